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

use crate::Error;
use crate::Severity;
use crate::sink::Sink;

type SinkFunction = dyn Fn(Severity, &str) -> Result<(), Error> + Send + Sync + 'static;

/// A sink that you can pass the custom sink function.
///
/// ```rust
/// use logrelay::sink::CustomSink;
///
/// let sink = CustomSink::new(|severity, line| {
///     println!("[{severity}] {line}");
///     Ok(())
/// });
/// ```
pub struct CustomSink {
    f: Box<SinkFunction>,
}

impl fmt::Debug for CustomSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomSink {{ ... }}")
    }
}

impl CustomSink {
    /// Create a new [`CustomSink`].
    pub fn new(sink: impl Fn(Severity, &str) -> Result<(), Error> + Send + Sync + 'static) -> Self {
        CustomSink { f: Box::new(sink) }
    }
}

impl Sink for CustomSink {
    fn append(&self, severity: Severity, line: &str) -> Result<(), Error> {
        (self.f)(severity, line)
    }
}
