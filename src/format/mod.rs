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

//! Formatters that turn a context and a log event into the text handed to a sink.

use std::fmt;

use crate::Context;
use crate::Error;
use crate::LogEvent;

mod custom;
mod json;
mod text;

pub use self::custom::CustomFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

/// A formatter for log events.
///
/// The text returned by [`Formatter::format`] is passed to the sink unchanged.
pub trait Formatter: fmt::Debug + Send + Sync + 'static {
    /// Render `event` with the `context` of the sink it is about to reach.
    fn format(&self, context: &Context, event: &LogEvent) -> Result<String, Error>;
}

impl<T: Formatter> From<T> for Box<dyn Formatter> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// Render a JSON value without quoting plain strings.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(feature = "jiff")]
fn format_timestamp(
    time: std::time::SystemTime,
    tz: Option<&jiff::tz::TimeZone>,
) -> Result<String, Error> {
    use jiff::Timestamp;
    use jiff::tz::TimeZone;

    let ts = Timestamp::try_from(time).map_err(|err| {
        Error::new(crate::ErrorKind::Format, "event time out of range").with_source(err)
    })?;
    let tz = tz.cloned().unwrap_or_else(TimeZone::system);
    let offset = tz.to_offset(ts);
    Ok(format!("{:.6}", ts.display_with_offset(offset)))
}
