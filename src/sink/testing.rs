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

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::Severity;
use crate::sink::Sink;

type Lines = Arc<Mutex<Vec<String>>>;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Named in-memory captures of log lines, for asserting on output in tests.
///
/// [`TestCapture::handler`] hands out a [`Capture`] sink that records lines instead of printing
/// them, and [`TestCapture::logs`] reads them back.
///
/// # Examples
///
/// ```
/// use logrelay::Severity;
/// use logrelay::sink::Sink;
/// use logrelay::sink::TestCapture;
///
/// let capture = TestCapture::new();
/// let sink = capture.handler("t");
/// sink.append(Severity::Info, "hello").unwrap();
///
/// assert_eq!(capture.logs("t").unwrap().to_vec(), vec!["hello"]);
/// assert!(capture.logs("never").is_none());
/// ```
#[derive(Debug, Default)]
pub struct TestCapture {
    captures: Mutex<HashMap<String, Lines>>,
}

impl TestCapture {
    /// Create an empty [`TestCapture`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the capture registered under `name`, creating it if needed, and return a sink that
    /// appends to it.
    ///
    /// The sequence is cleared in place: sinks handed out earlier for the same name keep writing
    /// into it, and [`CapturedLines`] handles observe the reset.
    pub fn handler(&self, name: impl Into<String>) -> Capture {
        let lines = lock(&self.captures).entry(name.into()).or_default().clone();
        lock(&lines).clear();
        Capture { lines }
    }

    /// Return a live handle onto the capture registered under `name`.
    ///
    /// Return `None` if [`TestCapture::handler`] was never called with `name`.
    pub fn logs(&self, name: &str) -> Option<CapturedLines> {
        lock(&self.captures)
            .get(name)
            .map(|lines| CapturedLines {
                lines: lines.clone(),
            })
    }
}

/// A sink that appends every line to a [`TestCapture`] sequence.
#[derive(Debug, Clone)]
pub struct Capture {
    lines: Lines,
}

impl Capture {
    /// Return a live handle onto the lines this sink records.
    pub fn lines(&self) -> CapturedLines {
        CapturedLines {
            lines: self.lines.clone(),
        }
    }
}

impl Sink for Capture {
    fn append(&self, _: Severity, line: &str) -> Result<(), Error> {
        lock(&self.lines).push(line.to_string());
        Ok(())
    }
}

/// A live view of a captured sequence; it grows as the capture sink is invoked.
#[derive(Debug, Clone)]
pub struct CapturedLines {
    lines: Lines,
}

impl CapturedLines {
    /// Copy out the lines captured so far, in order.
    pub fn to_vec(&self) -> Vec<String> {
        lock(&self.lines).clone()
    }

    /// The number of lines captured so far.
    pub fn len(&self) -> usize {
        lock(&self.lines).len()
    }

    /// Whether no line has been captured since the last reset.
    pub fn is_empty(&self) -> bool {
        lock(&self.lines).is_empty()
    }

    /// The most recently captured line.
    pub fn last(&self) -> Option<String> {
        lock(&self.lines).last().cloned()
    }
}
