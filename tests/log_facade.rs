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

#![cfg(feature = "bridge-log")]

use logrelay::Config;
use logrelay::Handler;
use logrelay::PriorityTable;
use logrelay::format::TextFormatter;

// The log crate logger can only be installed once per process.
#[test]
fn log_macros_reach_default_dispatcher() {
    logrelay::bridge::setup_log_crate();
    assert!(logrelay::bridge::try_setup_log_crate().is_err());

    logrelay::set_config(
        serde_json::Value::Null,
        Config::new(1, PriorityTable::default())
            .formatter(TextFormatter::default())
            .sink(logrelay::test_handler("facade-global")),
    );
    logrelay::add_handler(
        Handler::new(logrelay::test_handler("facade-errors"), 3),
        "errors",
    );

    log::trace!("dropped");
    log::debug!("dropped too");
    log::info!(user = 42; "login");
    log::warn!("disk {}", "low");
    log::error!(code = "E7"; "boom");

    assert_eq!(
        logrelay::test_logs("facade-global").unwrap().to_vec(),
        vec!["info:login user=42", "warning:disk low", "error:boom code=E7"]
    );
    assert_eq!(
        logrelay::test_logs("facade-errors").unwrap().to_vec(),
        vec!["boom"]
    );
}
