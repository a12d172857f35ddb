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
use logrelay::Handler;
use logrelay::Metadata;
use logrelay::PriorityTable;
use logrelay::format::JsonFormatter;
use logrelay::format::TextFormatter;
use logrelay::sink::Stderr;
use serde_json::json;

fn main() -> Result<(), logrelay::Error> {
    logrelay::set_config(
        json!({"env": "dev"}),
        Config::new(1, PriorityTable::default())
            .formatter(TextFormatter::default().with_timestamp()),
    );
    logrelay::add_handler(
        Handler::new(Stderr::default(), 3)
            .context(json!({"team": "oncall"}))
            .formatter(JsonFormatter::default().with_timestamp()),
        "oncall",
    );
    logrelay::add_handler(Handler::new(logrelay::test_handler("audit"), 0), "audit");

    logrelay::debug(Metadata::new(), "cache warmed")?;
    logrelay::info(Metadata::new(), "request served")?;
    logrelay::error(Metadata::new(), "upstream unavailable")?;

    logrelay::remove_handler("oncall");
    logrelay::error(Metadata::new(), "upstream still unavailable")?;

    if let Some(audit) = logrelay::test_logs("audit") {
        println!("audit trail: {:?}", audit.to_vec());
    }
    Ok(())
}
