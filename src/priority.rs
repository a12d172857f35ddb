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

//! Mappings from [`Severity`] to numeric priority.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::Severity;

/// Maps a severity to the numeric priority compared against minimum levels.
///
/// Returning `None` means the mapping does not cover the severity; dispatching such an event is a
/// configuration error.
pub trait LevelPriority: fmt::Debug + Send + Sync + 'static {
    /// Return the priority of `severity`.
    fn priority(&self, severity: Severity) -> Option<i64>;
}

impl<T: LevelPriority> From<T> for Box<dyn LevelPriority> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// An explicit severity to priority table.
///
/// The default table is `debug=0, info=1, warning=2, error=3`. A table may be partial.
///
/// # Examples
///
/// ```
/// use logrelay::PriorityTable;
/// use logrelay::Severity;
///
/// let table: PriorityTable =
///     serde_json::from_str(r#"{"debug": 10, "info": 20, "warn": 30, "error": 40}"#).unwrap();
/// assert_eq!(table.get(Severity::Warning), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTable {
    priorities: BTreeMap<Severity, i64>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        PriorityTable::empty()
            .with(Severity::Debug, 0)
            .with(Severity::Info, 1)
            .with(Severity::Warning, 2)
            .with(Severity::Error, 3)
    }
}

impl PriorityTable {
    /// Create a table with no entries.
    pub fn empty() -> Self {
        Self {
            priorities: BTreeMap::new(),
        }
    }

    /// Set the priority of `severity`.
    pub fn with(mut self, severity: Severity, priority: i64) -> Self {
        self.priorities.insert(severity, priority);
        self
    }

    /// Look up the priority of `severity`.
    pub fn get(&self, severity: Severity) -> Option<i64> {
        self.priorities.get(&severity).copied()
    }
}

impl LevelPriority for PriorityTable {
    fn priority(&self, severity: Severity) -> Option<i64> {
        self.get(severity)
    }
}

/// A priority mapping backed by a caller-supplied function.
///
/// # Examples
///
/// ```
/// use logrelay::CustomPriority;
/// use logrelay::Severity;
///
/// let priority = CustomPriority::new(|severity| match severity {
///     Severity::Error => 100,
///     _ => 0,
/// });
/// ```
pub struct CustomPriority {
    f: Box<dyn Fn(Severity) -> i64 + Send + Sync + 'static>,
}

impl fmt::Debug for CustomPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomPriority {{ ... }}")
    }
}

impl CustomPriority {
    /// Create a new [`CustomPriority`] from a total mapping function.
    pub fn new(priority: impl Fn(Severity) -> i64 + Send + Sync + 'static) -> Self {
        CustomPriority {
            f: Box::new(priority),
        }
    }
}

impl LevelPriority for CustomPriority {
    fn priority(&self, severity: Severity) -> Option<i64> {
        Some((self.f)(severity))
    }
}
