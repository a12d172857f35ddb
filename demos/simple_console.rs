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
use logrelay::Metadata;
use logrelay::PriorityTable;
use logrelay::format::TextFormatter;
use serde_json::json;

fn main() -> Result<(), logrelay::Error> {
    logrelay::set_config(
        json!({"service": "simple"}),
        Config::new(0, PriorityTable::default())
            .formatter(TextFormatter::default().with_context(true)),
    );

    let mut metadata = Metadata::new();
    metadata.insert("attempt".to_string(), json!(3));

    logrelay::error(metadata, "Hello error!")?;
    logrelay::warning(Metadata::new(), "Hello warning!")?;
    logrelay::info(Metadata::new(), "Hello info!")?;
    logrelay::debug(Metadata::new(), "Hello debug!")?;
    Ok(())
}
