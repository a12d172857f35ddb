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

use std::fmt::Write;

#[cfg(feature = "jiff")]
use jiff::tz::TimeZone;

use crate::Context;
use crate::Error;
use crate::LogEvent;
use crate::format::Formatter;
use crate::format::display_value;

/// A formatter that renders events as a single line of text.
///
/// Output format:
///
/// ```text
/// warning:disk low free_mb=12 mount=/var
/// ```
///
/// Metadata follows the message as `key=value` pairs. Optionally the line is prefixed with a
/// timestamp and suffixed with the entries of the sink's context.
///
/// # Examples
///
/// ```
/// use logrelay::format::TextFormatter;
///
/// let formatter = TextFormatter::default().with_context(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    context: bool,
    #[cfg(feature = "jiff")]
    timestamp: Option<Option<TimeZone>>,
}

impl TextFormatter {
    /// Append the sink's context after the metadata.
    ///
    /// Object contexts are rendered as `key=value` pairs; any other non-null value is rendered as
    /// `context=value`.
    pub fn with_context(mut self, context: bool) -> Self {
        self.context = context;
        self
    }

    /// Prefix each line with the event time in the system timezone.
    #[cfg(feature = "jiff")]
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(None);
        self
    }

    /// Prefix each line with the event time in `tz`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use logrelay::format::TextFormatter;
    ///
    /// let formatter = TextFormatter::default().timezone(TimeZone::UTC);
    /// ```
    #[cfg(feature = "jiff")]
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timestamp = Some(Some(tz));
        self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, context: &Context, event: &LogEvent) -> Result<String, Error> {
        let mut text = String::new();

        #[cfg(feature = "jiff")]
        if let Some(tz) = &self.timestamp {
            let time = super::format_timestamp(event.time(), tz.as_ref())?;
            text.push_str(&time);
            text.push(' ');
        }

        // SAFETY: write to a string always succeeds
        write!(&mut text, "{}:{}", event.level(), event.message()).unwrap();
        for (key, value) in event.metadata() {
            write!(&mut text, " {key}={}", display_value(value)).unwrap();
        }

        if self.context {
            match context {
                serde_json::Value::Null => {}
                serde_json::Value::Object(kvs) => {
                    for (key, value) in kvs {
                        write!(&mut text, " {key}={}", display_value(value)).unwrap();
                    }
                }
                other => write!(&mut text, " context={}", display_value(other)).unwrap(),
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;
    use crate::Metadata;
    use crate::Severity;

    fn event(metadata: serde_json::Value) -> LogEvent {
        let serde_json::Value::Object(metadata) = metadata else {
            unreachable!("test metadata must be an object")
        };
        LogEvent::new(Severity::Warning, "disk low", metadata)
    }

    #[test]
    fn level_and_message() {
        let text = TextFormatter::default()
            .format(&Context::Null, &event(json!({})))
            .unwrap();
        assert_snapshot!(text, @"warning:disk low");
    }

    #[test]
    fn metadata_pairs() {
        let text = TextFormatter::default()
            .format(&Context::Null, &event(json!({"mount": "/var", "free_mb": 12})))
            .unwrap();
        // serde_json::Map keeps keys sorted
        assert_snapshot!(text, @"warning:disk low free_mb=12 mount=/var");
    }

    #[test]
    fn context_only_when_enabled() {
        let ctx = json!({"env": "prod", "service": "api"});
        let e = LogEvent::new(Severity::Error, "boom", Metadata::new());

        let without = TextFormatter::default().format(&ctx, &e).unwrap();
        assert_snapshot!(without, @"error:boom");

        let with = TextFormatter::default().with_context(true).format(&ctx, &e).unwrap();
        assert_snapshot!(with, @"error:boom env=prod service=api");

        let scalar = TextFormatter::default()
            .with_context(true)
            .format(&json!("batch-7"), &e)
            .unwrap();
        assert_snapshot!(scalar, @"error:boom context=batch-7");
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn timestamp_prefix() {
        use std::time::Duration;
        use std::time::SystemTime;

        let e = LogEvent::new(Severity::Info, "tick", Metadata::new())
            .with_time(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000));
        let text = TextFormatter::default()
            .timezone(TimeZone::UTC)
            .format(&Context::Null, &e)
            .unwrap();
        assert_snapshot!(text, @"2023-11-14T22:13:20.000000+00:00 info:tick");
    }
}
