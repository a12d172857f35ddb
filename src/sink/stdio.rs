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

use std::io::Write;

use crate::Error;
use crate::Severity;
use crate::sink::Sink;

fn write_line(mut w: impl Write, line: &str) -> Result<(), Error> {
    let mut bytes = Vec::with_capacity(line.len() + 1);
    bytes.extend_from_slice(line.as_bytes());
    bytes.push(b'\n');
    w.write_all(&bytes).map_err(Error::from_io_error)
}

/// A sink that prints log lines to stdout.
///
/// # Examples
///
/// ```
/// use logrelay::sink::Stdout;
///
/// let stdout_sink = Stdout::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl Sink for Stdout {
    fn append(&self, _: Severity, line: &str) -> Result<(), Error> {
        write_line(std::io::stdout().lock(), line)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)
    }
}

/// A sink that prints log lines to stderr.
///
/// # Examples
///
/// ```
/// use logrelay::sink::Stderr;
///
/// let stderr_sink = Stderr::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl Sink for Stderr {
    fn append(&self, _: Severity, line: &str) -> Result<(), Error> {
        write_line(std::io::stderr().lock(), line)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::from_io_error)
    }
}

/// A sink that picks the output stream by severity.
///
/// `debug` and `info` lines go to stdout; `warning` and `error` lines go to stderr. This is the
/// default global sink.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Console {}

impl Sink for Console {
    fn append(&self, severity: Severity, line: &str) -> Result<(), Error> {
        match severity {
            Severity::Debug | Severity::Info => Stdout::default().append(severity, line),
            Severity::Warning | Severity::Error => Stderr::default().append(severity, line),
        }
    }

    fn flush(&self) -> Result<(), Error> {
        Stdout::default().flush()?;
        Stderr::default().flush()
    }
}
