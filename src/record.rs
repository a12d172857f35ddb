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

//! Severities and the log events built from them.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::ErrorKind;

/// Key-value pairs attached to a single log call.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Caller-defined value handed to formatters alongside each event.
///
/// The global configuration and every handler carry their own context.
pub type Context = serde_json::Value;

/// The severity of a log event.
///
/// Severities carry no intrinsic ordering for filtering purposes: the numeric priority of each
/// severity is supplied by the configured [`LevelPriority`](crate::LevelPriority).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Diagnostic detail.
    Debug,
    /// Routine information.
    Info,
    /// Something unexpected that the program can continue past.
    #[serde(alias = "warn")]
    Warning,
    /// A failure.
    Error,
}

impl Severity {
    /// All severities, from the least to the most severe under the default priorities.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// The lowercase name of this severity.
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(Error::new(ErrorKind::Configuration, "unknown severity")
                .with_context("input", s)),
        }
    }
}

/// A single log event, built once per emitter call and shared by every sink it reaches.
#[derive(Debug, Clone)]
pub struct LogEvent {
    level: Severity,
    message: String,
    metadata: Metadata,
    time: SystemTime,
}

impl LogEvent {
    /// Create a new event stamped with the current time.
    pub fn new(level: Severity, message: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            level,
            message: message.into(),
            metadata,
            time: SystemTime::now(),
        }
    }

    /// Override the timestamp of this event.
    pub fn with_time(mut self, time: SystemTime) -> Self {
        self.time = time;
        self
    }

    /// The severity of the event.
    pub fn level(&self) -> Severity {
        self.level
    }

    /// The raw message of the event.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The metadata attached to the event.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The time the event was created.
    pub fn time(&self) -> SystemTime {
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_severity_names() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);

        let err = "fatal".parse::<Severity>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.context("input"), Some("fatal"));
    }

    #[test]
    fn severity_serde_accepts_abbreviation() {
        let s: Severity = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(s, Severity::Warning);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"warning\"");
    }

    #[test]
    fn display_pads() {
        assert_eq!(format!("{:>7}", Severity::Info), "   info");
    }
}
