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

use std::fmt;

use crate::Context;
use crate::Error;
use crate::LogEvent;
use crate::format::Formatter;

type FormatFunction = dyn Fn(&Context, &LogEvent) -> String + Send + Sync + 'static;

/// A formatter that you can pass the custom format function.
///
/// The custom format function receives the sink's context and the event, and returns the exact
/// text the sink will receive. For example:
///
/// ```rust
/// use logrelay::format::CustomFormatter;
///
/// let formatter = CustomFormatter::new(|_ctx, event| {
///     format!("{}:{}", event.level(), event.message())
/// });
/// ```
pub struct CustomFormatter {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFormatter {{ ... }}")
    }
}

impl CustomFormatter {
    /// Create a new [`CustomFormatter`].
    pub fn new(
        formatter: impl Fn(&Context, &LogEvent) -> String + Send + Sync + 'static,
    ) -> Self {
        CustomFormatter {
            f: Box::new(formatter),
        }
    }
}

impl Formatter for CustomFormatter {
    fn format(&self, context: &Context, event: &LogEvent) -> Result<String, Error> {
        Ok((self.f)(context, event))
    }
}
