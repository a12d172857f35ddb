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

mod dispatch;
pub use self::dispatch::Dispatcher;

mod global;
pub use self::global::add_handler;
pub use self::global::debug;
pub use self::global::default_dispatcher;
pub use self::global::error;
pub use self::global::info;
pub use self::global::log;
pub use self::global::remove_handler;
pub use self::global::set_config;
pub use self::global::test_handler;
pub use self::global::test_logs;
pub use self::global::warning;
