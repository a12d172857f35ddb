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

use logrelay::Config;
use logrelay::PriorityTable;
use logrelay::format::JsonFormatter;

fn main() {
    logrelay::bridge::setup_log_crate();
    logrelay::set_config(
        serde_json::Value::Null,
        Config::new(0, PriorityTable::default()).formatter(JsonFormatter::default()),
    );

    log::error!(code = 7; "Hello error!");
    log::warn!("Hello warn!");
    log::info!("Hello info!");
    log::debug!("Hello debug!");
    log::trace!("Hello trace!");
}
