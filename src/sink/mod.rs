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

//! Destinations for formatted log lines.

use std::fmt;

use crate::Error;
use crate::Severity;

mod custom;
mod stdio;
mod testing;

pub use self::custom::CustomSink;
pub use self::stdio::Console;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Capture;
pub use self::testing::CapturedLines;
pub use self::testing::TestCapture;

/// A destination that accepts log lines.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Accept one line. `severity` is the severity of the event the line was rendered from.
    fn append(&self, severity: Severity, line: &str) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Sink> From<T> for Box<dyn Sink> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
