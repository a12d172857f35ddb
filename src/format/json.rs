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

#[cfg(feature = "jiff")]
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::Context;
use crate::Error;
use crate::LogEvent;
use crate::Metadata;
use crate::format::Formatter;

/// A formatter that renders events as one JSON object per line.
///
/// Output format:
///
/// ```json
/// {"level":"error","message":"Hello error!","metadata":{"code":7},"context":{"service":"api"}}
/// {"level":"warning","message":"Hello warning!"}
/// ```
///
/// `metadata` is omitted when empty and `context` is omitted when null. A `timestamp` field comes
/// first when enabled.
///
/// # Examples
///
/// ```
/// use logrelay::format::JsonFormatter;
///
/// let json_formatter = JsonFormatter::default();
/// ```
#[derive(Default, Debug, Clone)]
pub struct JsonFormatter {
    #[cfg(feature = "jiff")]
    timestamp: Option<Option<TimeZone>>,
}

impl JsonFormatter {
    /// Include the event time in the system timezone.
    #[cfg(feature = "jiff")]
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(None);
        self
    }

    /// Include the event time in `tz`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logrelay::format::JsonFormatter;
    ///
    /// let formatter = JsonFormatter::default().timezone(TimeZone::UTC);
    /// ```
    #[cfg(feature = "jiff")]
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timestamp = Some(Some(tz));
        self
    }
}

#[derive(Debug, Serialize)]
struct EventLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    metadata: &'a Metadata,
    #[serde(skip_serializing_if = "is_null")]
    context: &'a Context,
}

fn is_empty(metadata: &&Metadata) -> bool {
    metadata.is_empty()
}

fn is_null(context: &&Context) -> bool {
    context.is_null()
}

impl Formatter for JsonFormatter {
    fn format(&self, context: &Context, event: &LogEvent) -> Result<String, Error> {
        #[cfg(feature = "jiff")]
        let timestamp = match &self.timestamp {
            Some(tz) => Some(super::format_timestamp(event.time(), tz.as_ref())?),
            None => None,
        };
        #[cfg(not(feature = "jiff"))]
        let timestamp = None;

        let line = EventLine {
            timestamp,
            level: event.level().name(),
            message: event.message(),
            metadata: event.metadata(),
            context,
        };

        serde_json::to_string(&line).map_err(Error::from_json_error)
    }
}
