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

use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::Config;
use crate::Context;
use crate::Error;
use crate::ErrorKind;
use crate::Handler;
use crate::LogEvent;
use crate::Metadata;
use crate::Severity;
use crate::format::Formatter;
use crate::sink::Sink;
#[cfg(feature = "bridge-log")]
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// The name reported in error context for the global sink.
const GLOBAL_SINK: &str = "global";

/// A dispatcher that filters log events and fans them out to the global sink and every
/// registered handler.
///
/// Each sink receives an event iff the event's priority is at least the sink's minimum level.
///
/// # Examples
///
/// ```
/// use logrelay::Config;
/// use logrelay::Dispatcher;
/// use logrelay::Handler;
/// use logrelay::Metadata;
/// use logrelay::PriorityTable;
/// use logrelay::sink::TestCapture;
///
/// let capture = TestCapture::new();
/// let dispatcher = Dispatcher::new();
/// dispatcher.set_config(
///     serde_json::Value::Null,
///     Config::new(1, PriorityTable::default()).sink(capture.handler("global")),
/// );
/// dispatcher.add_handler(Handler::new(capture.handler("errors"), 3), "errors");
///
/// dispatcher.warning(Metadata::new(), "disk low").unwrap();
/// assert_eq!(capture.logs("global").unwrap().to_vec(), vec!["disk low"]);
/// assert!(capture.logs("errors").unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: RwLock<Registry>,
    trap: Option<Box<dyn Trap>>,
}

#[derive(Debug, Default)]
struct Registry {
    global: Option<Arc<Global>>,
    // copy-on-write so that dispatch can snapshot without holding the lock
    handlers: Arc<Vec<Arc<Registered>>>,
}

#[derive(Debug)]
struct Global {
    context: Context,
    config: Config,
}

#[derive(Debug)]
struct Registered {
    name: String,
    handler: Handler,
}

impl Dispatcher {
    /// Create a dispatcher with no configuration and no handlers.
    ///
    /// Logging through it fails with a configuration error until
    /// [`Dispatcher::set_config`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report sink and formatter failures to `trap` and keep delivering to the remaining sinks,
    /// instead of returning the first failure to the caller.
    ///
    /// Configuration errors are always returned.
    ///
    /// The trap is fixed when the dispatcher is built, so this applies to owned dispatchers only.
    /// The [default dispatcher](crate::default_dispatcher) has no trap and returns every failure.
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = Some(trap.into());
        self
    }

    /// Replace the global context and configuration together.
    pub fn set_config(&self, context: Context, config: Config) {
        self.write().global = Some(Arc::new(Global { context, config }));
    }

    /// Whether [`Dispatcher::set_config`] has been called.
    pub fn is_configured(&self) -> bool {
        self.read().global.is_some()
    }

    /// Register `handler` under `name`.
    ///
    /// An existing handler with the same name is replaced and keeps its position in the
    /// dispatch order.
    pub fn add_handler(&self, handler: Handler, name: impl Into<String>) {
        let registered = Arc::new(Registered {
            name: name.into(),
            handler,
        });

        let mut registry = self.write();
        let handlers = Arc::make_mut(&mut registry.handlers);
        match handlers.iter().position(|r| r.name == registered.name) {
            Some(index) => handlers[index] = registered,
            None => handlers.push(registered),
        }
    }

    /// Deregister the handler under `name`.
    ///
    /// Return whether a handler was removed; removing an absent name is a no-op.
    pub fn remove_handler(&self, name: &str) -> bool {
        let mut registry = self.write();
        let Some(index) = registry.handlers.iter().position(|r| r.name == name) else {
            return false;
        };
        Arc::make_mut(&mut registry.handlers).remove(index);
        true
    }

    /// The names of the registered handlers, in dispatch order.
    pub fn handler_names(&self) -> Vec<String> {
        self.read().handlers.iter().map(|r| r.name.clone()).collect()
    }

    /// Whether an event of `severity` would reach at least one sink.
    ///
    /// Return `true` if the priority mapping does not cover `severity`, so that the configuration
    /// error surfaces when the event is logged.
    pub fn enabled(&self, severity: Severity) -> bool {
        let (global, handlers) = self.snapshot();
        let Some(global) = global else {
            return false;
        };
        let Ok(priority) = global.config.priority(severity) else {
            return true;
        };

        priority >= global.config.min_level()
            || handlers.iter().any(|r| priority >= r.handler.min_level())
    }

    /// Log a debug event.
    pub fn debug(&self, metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
        self.log(Severity::Debug, metadata, message)
    }

    /// Log an info event.
    pub fn info(&self, metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
        self.log(Severity::Info, metadata, message)
    }

    /// Log a warning event.
    pub fn warning(&self, metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
        self.log(Severity::Warning, metadata, message)
    }

    /// Log an error event.
    pub fn error(&self, metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
        self.log(Severity::Error, metadata, message)
    }

    /// Dispatch an event of `severity` to the global sink and every qualifying handler.
    ///
    /// # Errors
    ///
    /// Return a [`ErrorKind::Configuration`] error if the dispatcher is not configured or the
    /// priority mapping does not cover `severity`; nothing is delivered in that case.
    ///
    /// Without a trap, the first [`ErrorKind::Sink`] or [`ErrorKind::Format`] failure is returned
    /// and the remaining handlers are skipped. The `sink` context of the error names the failing
    /// handler, or `global`.
    pub fn log(
        &self,
        severity: Severity,
        metadata: Metadata,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        let (global, handlers) = self.snapshot();
        let Some(global) = global else {
            return Err(
                Error::new(ErrorKind::Configuration, "dispatcher is not configured")
                    .with_context("severity", severity),
            );
        };

        let priority = global.config.priority(severity)?;
        let event = LogEvent::new(severity, message, metadata);

        if priority >= global.config.min_level() {
            let result = deliver(
                global.config.sink_ref(),
                &global.context,
                global.config.formatter_ref(),
                &event,
            )
            .map_err(|err| err.with_context("sink", GLOBAL_SINK));
            self.isolate(result)?;
        }

        for registered in handlers.iter() {
            let handler = &registered.handler;
            if priority >= handler.min_level() {
                let result = deliver(
                    handler.sink_ref(),
                    handler.context_ref(),
                    handler.formatter_ref(),
                    &event,
                )
                .map_err(|err| err.with_context("sink", &registered.name));
                self.isolate(result)?;
            }
        }

        Ok(())
    }

    /// Flush the global sink and every handler sink.
    pub fn flush(&self) -> Result<(), Error> {
        let (global, handlers) = self.snapshot();

        if let Some(global) = global {
            let result = global
                .config
                .sink_ref()
                .flush()
                .map_err(|err| flush_error(err).with_context("sink", GLOBAL_SINK));
            self.isolate(result)?;
        }
        for registered in handlers.iter() {
            let result = registered
                .handler
                .sink_ref()
                .flush()
                .map_err(|err| flush_error(err).with_context("sink", &registered.name));
            self.isolate(result)?;
        }

        Ok(())
    }

    /// Send an error that cannot be returned to the installed trap, or to [`DefaultTrap`].
    #[cfg(feature = "bridge-log")]
    pub(crate) fn report(&self, err: &Error) {
        match &self.trap {
            Some(trap) => trap.trap(err),
            None => DefaultTrap::default().trap(err),
        }
    }

    fn isolate(&self, result: Result<(), Error>) -> Result<(), Error> {
        match (result, &self.trap) {
            (Err(err), Some(trap)) => {
                trap.trap(&err);
                Ok(())
            }
            (result, _) => result,
        }
    }

    fn snapshot(&self) -> (Option<Arc<Global>>, Arc<Vec<Arc<Registered>>>) {
        let registry = self.read();
        (registry.global.clone(), registry.handlers.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn deliver(
    sink: &dyn Sink,
    context: &Context,
    formatter: Option<&dyn Formatter>,
    event: &LogEvent,
) -> Result<(), Error> {
    let sink_error =
        |err: Error| Error::new(ErrorKind::Sink, "failed to deliver log line").with_source(err);

    match formatter {
        Some(formatter) => {
            let text = formatter.format(context, event).map_err(|err| {
                Error::new(ErrorKind::Format, "failed to format log event").with_source(err)
            })?;
            sink.append(event.level(), &text).map_err(sink_error)
        }
        // the raw message only; metadata is not rendered without a formatter
        None => sink.append(event.level(), event.message()).map_err(sink_error),
    }
}

fn flush_error(err: Error) -> Error {
    Error::new(ErrorKind::Sink, "failed to flush sink").with_source(err)
}
