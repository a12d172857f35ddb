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

use std::sync::LazyLock;

use crate::Config;
use crate::Context;
use crate::Dispatcher;
use crate::Error;
use crate::Handler;
use crate::Metadata;
use crate::Severity;
use crate::sink::Capture;
use crate::sink::CapturedLines;
use crate::sink::TestCapture;

static DEFAULT_DISPATCHER: LazyLock<Dispatcher> = LazyLock::new(Dispatcher::new);
static DEFAULT_CAPTURE: LazyLock<TestCapture> = LazyLock::new(TestCapture::new);

/// Return the process-wide default [`Dispatcher`].
///
/// It starts unconfigured with no handlers, and lives until the process exits.
pub fn default_dispatcher() -> &'static Dispatcher {
    &DEFAULT_DISPATCHER
}

/// Replace the context and configuration of the default dispatcher.
///
/// # Examples
///
/// ```
/// use logrelay::Config;
/// use logrelay::PriorityTable;
/// use logrelay::format::TextFormatter;
/// use serde_json::json;
///
/// logrelay::set_config(
///     json!({"env": "dev"}),
///     Config::new(1, PriorityTable::default()).formatter(TextFormatter::default()),
/// );
/// logrelay::info(Default::default(), "service started").unwrap();
/// ```
pub fn set_config(context: Context, config: Config) {
    default_dispatcher().set_config(context, config)
}

/// Register a handler on the default dispatcher.
pub fn add_handler(handler: Handler, name: impl Into<String>) {
    default_dispatcher().add_handler(handler, name)
}

/// Deregister a handler from the default dispatcher.
pub fn remove_handler(name: &str) -> bool {
    default_dispatcher().remove_handler(name)
}

/// Log a debug event through the default dispatcher.
pub fn debug(metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
    default_dispatcher().debug(metadata, message)
}

/// Log an info event through the default dispatcher.
pub fn info(metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
    default_dispatcher().info(metadata, message)
}

/// Log a warning event through the default dispatcher.
pub fn warning(metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
    default_dispatcher().warning(metadata, message)
}

/// Log an error event through the default dispatcher.
pub fn error(metadata: Metadata, message: impl Into<String>) -> Result<(), Error> {
    default_dispatcher().error(metadata, message)
}

/// Log an event of `severity` through the default dispatcher.
///
/// See [`Dispatcher::log`].
pub fn log(
    severity: Severity,
    metadata: Metadata,
    message: impl Into<String>,
) -> Result<(), Error> {
    default_dispatcher().log(severity, metadata, message)
}

/// Reset the process-wide capture named `name` and return a sink that appends to it.
///
/// See [`TestCapture::handler`].
pub fn test_handler(name: impl Into<String>) -> Capture {
    DEFAULT_CAPTURE.handler(name)
}

/// Return a live handle onto the process-wide capture named `name`.
///
/// Return `None` if [`test_handler`] was never called with `name`.
pub fn test_logs(name: &str) -> Option<CapturedLines> {
    DEFAULT_CAPTURE.logs(name)
}
