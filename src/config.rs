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

use crate::Error;
use crate::ErrorKind;
use crate::LevelPriority;
use crate::Severity;
use crate::format::Formatter;
use crate::sink::Console;
use crate::sink::Sink;

/// The global configuration of a [`Dispatcher`](crate::Dispatcher).
///
/// A configuration is always replaced as a whole by
/// [`Dispatcher::set_config`](crate::Dispatcher::set_config).
///
/// # Examples
///
/// ```
/// use logrelay::Config;
/// use logrelay::PriorityTable;
/// use logrelay::format::TextFormatter;
/// use logrelay::sink::Stderr;
///
/// let config = Config::new(1, PriorityTable::default())
///     .formatter(TextFormatter::default())
///     .sink(Stderr::default());
/// ```
#[derive(Debug)]
pub struct Config {
    min_level: i64,
    level_priority: Box<dyn LevelPriority>,
    formatter: Option<Box<dyn Formatter>>,
    sink: Box<dyn Sink>,
}

impl Config {
    /// Create a configuration with no formatter that writes to the [`Console`] sink.
    pub fn new(min_level: i64, level_priority: impl Into<Box<dyn LevelPriority>>) -> Self {
        Self {
            min_level,
            level_priority: level_priority.into(),
            formatter: None,
            sink: Box::new(Console::default()),
        }
    }

    /// Set the formatter used for the global sink.
    ///
    /// Without a formatter the global sink receives the raw message.
    pub fn formatter(mut self, formatter: impl Into<Box<dyn Formatter>>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    /// Replace the global sink.
    pub fn sink(mut self, sink: impl Into<Box<dyn Sink>>) -> Self {
        self.sink = sink.into();
        self
    }

    /// The minimum priority an event needs to reach the global sink.
    pub fn min_level(&self) -> i64 {
        self.min_level
    }

    /// Resolve the priority of `severity`.
    ///
    /// # Errors
    ///
    /// Return a configuration error if the priority mapping does not cover `severity`.
    pub fn priority(&self, severity: Severity) -> Result<i64, Error> {
        self.level_priority.priority(severity).ok_or_else(|| {
            Error::new(ErrorKind::Configuration, "no priority configured for severity")
                .with_context("severity", severity)
        })
    }

    pub(crate) fn formatter_ref(&self) -> Option<&dyn Formatter> {
        self.formatter.as_deref()
    }

    pub(crate) fn sink_ref(&self) -> &dyn Sink {
        &*self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriorityTable;

    #[test]
    fn priority_resolves_through_mapping() {
        let config = Config::new(1, PriorityTable::default());
        assert_eq!(config.min_level(), 1);
        assert_eq!(config.priority(Severity::Warning).unwrap(), 2);
    }

    #[test]
    fn unmapped_severity_is_configuration_error() {
        let config = Config::new(0, PriorityTable::empty().with(Severity::Info, 1));
        let err = config.priority(Severity::Debug).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.context("severity"), Some("debug"));
    }
}
