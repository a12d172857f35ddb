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

use crate::Dispatcher;
use crate::Metadata;
use crate::Severity;
use crate::default_dispatcher;

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

struct MetadataVisitor<'a> {
    metadata: &'a mut Metadata,
}

impl<'kvs> log::kv::VisitSource<'kvs> for MetadataVisitor<'_> {
    fn visit_pair(
        &mut self,
        key: log::kv::Key<'kvs>,
        value: log::kv::Value<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let key = key.as_str().to_string();
        match serde_json::to_value(&value) {
            Ok(value) => self.metadata.insert(key, value),
            Err(_) => self.metadata.insert(key, value.to_string().into()),
        };
        Ok(())
    }
}

impl log::Log for Dispatcher {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Dispatcher::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &log::Record) {
        let mut metadata = Metadata::new();
        let mut visitor = MetadataVisitor {
            metadata: &mut metadata,
        };
        // MetadataVisitor never fails
        let _ = record.key_values().visit(&mut visitor);

        let message = record.args().to_string();
        if let Err(err) = Dispatcher::log(self, record.level().into(), metadata, message) {
            self.report(&err.with_context("target", record.target()));
        }
    }

    fn flush(&self) {
        if let Err(err) = Dispatcher::flush(self) {
            self.report(&err);
        }
    }
}

struct LogCrateProxy(());

impl log::Log for LogCrateProxy {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_dispatcher(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_dispatcher(), record)
    }

    fn flush(&self) {
        log::Log::flush(default_dispatcher())
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a `LogCrateProxy` and all logs from the log
/// crate will be forwarded to the [default dispatcher](crate::default_dispatcher).
///
/// `Trace` records are dispatched as [`Severity::Debug`]. Errors that cannot be returned to the
/// `log` macros are written to stderr.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = logrelay::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateProxy = LogCrateProxy(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for more details.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// logrelay::bridge::setup_log_crate();
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "logrelay::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use log::Log;
    use serde_json::json;

    use super::*;
    use crate::Config;
    use crate::Context;
    use crate::Handler;
    use crate::PriorityTable;
    use crate::format::JsonFormatter;
    use crate::sink::TestCapture;

    #[test]
    fn maps_levels() {
        assert_eq!(Severity::from(log::Level::Trace), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Debug), Severity::Debug);
        assert_eq!(Severity::from(log::Level::Info), Severity::Info);
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Error), Severity::Error);
    }

    #[test]
    fn records_become_events() {
        let capture = TestCapture::new();
        let dispatcher = Dispatcher::new();
        dispatcher.set_config(
            Context::Null,
            Config::new(1, PriorityTable::default())
                .formatter(JsonFormatter::default())
                .sink(capture.handler("global")),
        );
        dispatcher.add_handler(Handler::new(capture.handler("raw"), 2), "raw");

        let metadata = log::Metadata::builder()
            .level(log::Level::Warn)
            .target("storage")
            .build();
        assert!(Log::enabled(&dispatcher, &metadata));

        let kvs = vec![
            ("disk", log::kv::Value::from("sda1")),
            ("free", log::kv::Value::from(12i64)),
        ];
        Log::log(
            &dispatcher,
            &log::Record::builder()
                .args(format_args!("disk low"))
                .metadata(metadata)
                .key_values(&kvs)
                .build(),
        );

        let line = capture.logs("global").unwrap().last().unwrap();
        let line: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            line,
            json!({
                "level": "warning",
                "message": "disk low",
                "metadata": {"disk": "sda1", "free": 12},
            })
        );
        assert_eq!(capture.logs("raw").unwrap().to_vec(), vec!["disk low"]);
    }

    #[test]
    fn filtered_records_are_disabled() {
        let dispatcher = Dispatcher::new();
        dispatcher.set_config(
            Context::Null,
            Config::new(3, PriorityTable::default()).sink(TestCapture::new().handler("g")),
        );

        let metadata = log::Metadata::builder().level(log::Level::Trace).build();
        assert!(!Log::enabled(&dispatcher, &metadata));
    }
}
