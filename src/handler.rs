// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Context;
use crate::format::Formatter;
use crate::sink::Sink;

/// A secondary sink with its own context, formatter, and minimum level.
///
/// Handlers are registered under a name with
/// [`Dispatcher::add_handler`](crate::Dispatcher::add_handler). A handler without a formatter
/// receives the raw message; it does not fall back to the global formatter.
///
/// # Examples
///
/// ```
/// use logrelay::Handler;
/// use logrelay::format::JsonFormatter;
/// use logrelay::sink::Stderr;
/// use serde_json::json;
///
/// let handler = Handler::new(Stderr::default(), 2)
///     .context(json!({"service": "billing"}))
///     .formatter(JsonFormatter::default());
/// ```
#[derive(Debug)]
pub struct Handler {
    sink: Box<dyn Sink>,
    context: Context,
    formatter: Option<Box<dyn Formatter>>,
    min_level: i64,
}

impl Handler {
    /// Create a handler with a null context and no formatter.
    pub fn new(sink: impl Into<Box<dyn Sink>>, min_level: i64) -> Self {
        Self {
            sink: sink.into(),
            context: Context::Null,
            formatter: None,
            min_level,
        }
    }

    /// Set the context passed to this handler's formatter.
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Set the formatter of this handler.
    pub fn formatter(mut self, formatter: impl Into<Box<dyn Formatter>>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// The minimum priority an event needs to reach this handler.
    pub fn min_level(&self) -> i64 {
        self.min_level
    }

    pub(crate) fn context_ref(&self) -> &Context {
        &self.context
    }

    pub(crate) fn formatter_ref(&self) -> Option<&dyn Formatter> {
        self.formatter.as_deref()
    }

    pub(crate) fn sink_ref(&self) -> &dyn Sink {
        &*self.sink
    }
}
