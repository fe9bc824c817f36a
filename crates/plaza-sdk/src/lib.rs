// Copyright 2025 eraflo
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

//! # Plaza SDK
//!
//! The public entry point of the profile subsystem. [`OnlineServices`] wires
//! one [`ProfileCache`], the signed-in [`CurrentUser`], a transport, and the
//! [`FriendsAgent`] together; applications construct it once and pass it
//! wherever profile data is needed.

#![warn(missing_docs)]

mod config;
mod services;

pub use config::OnlineConfig;
pub use services::OnlineServices;

pub use plaza_agents::FriendsAgent;
pub use plaza_core::{
    EventBus, ProfileError, ProfileEvent, ProfileResult, Session, Transport, UserId,
};
pub use plaza_data::{FetchOutcome, FetchState, Profile, ProfileCache, RelationInfo};
pub use plaza_infra::{CurrentUser, TransportConfig};

/// Initializes the global logger from `RUST_LOG`, falling back to `default_filter`.
///
/// Calling it more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    use env_logger::{Builder, Env};

    if Builder::from_env(Env::default().default_filter_or(default_filter))
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized.");
    }
}
