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

//! Logrelay is a small leveled logging utility: events go to a global sink and are copied to any
//! number of named handlers, each with its own context, formatter, and minimum level.
//!
//! # Overview
//!
//! A [`Dispatcher`] holds a global context, a global [`Config`] and a registry of [`Handler`]s.
//! Every event is given a numeric priority by the configured [`LevelPriority`]; a sink receives
//! the event iff that priority is at least the sink's minimum level. Sinks with a
//! [formatter](format::Formatter) receive its output; sinks without one receive the raw message.
//!
//! A process-wide default dispatcher backs the free functions [`set_config`], [`add_handler`],
//! [`remove_handler`], [`log()`], [`debug`], [`info`], [`warning`], and [`error`]. Tests that
//! need isolation construct their own [`Dispatcher`].
//!
//! # Examples
//!
//! ```
//! use logrelay::Config;
//! use logrelay::Dispatcher;
//! use logrelay::Handler;
//! use logrelay::Metadata;
//! use logrelay::PriorityTable;
//! use logrelay::format::CustomFormatter;
//! use logrelay::sink::TestCapture;
//! use serde_json::json;
//!
//! let capture = TestCapture::new();
//! let dispatcher = Dispatcher::new();
//! dispatcher.set_config(
//!     json!({"service": "storage"}),
//!     Config::new(1, PriorityTable::default())
//!         .formatter(CustomFormatter::new(|_, e| format!("{}:{}", e.level(), e.message())))
//!         .sink(capture.handler("console")),
//! );
//! dispatcher.add_handler(Handler::new(capture.handler("h1"), 2), "h1");
//!
//! dispatcher.warning(Metadata::new(), "disk low").unwrap();
//! dispatcher.debug(Metadata::new(), "tick").unwrap();
//!
//! assert_eq!(capture.logs("console").unwrap().to_vec(), vec!["warning:disk low"]);
//! assert_eq!(capture.logs("h1").unwrap().to_vec(), vec!["disk low"]);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod format;
pub mod sink;
pub mod trap;

mod config;
pub use self::config::Config;

mod dispatcher;
pub use self::dispatcher::*;

mod error;
pub use self::error::Error;
pub use self::error::ErrorKind;

mod handler;
pub use self::handler::Handler;

mod priority;
pub use self::priority::CustomPriority;
pub use self::priority::LevelPriority;
pub use self::priority::PriorityTable;

mod record;
pub use self::record::Context;
pub use self::record::LogEvent;
pub use self::record::Metadata;
pub use self::record::Severity;
