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

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the network transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Base URL of the online service, including the trailing slash.
    pub server_url: String,
    /// Script handling user requests, appended to `server_url`.
    pub endpoint_path: String,
    /// Time after which an unanswered request fails with a timeout.
    pub request_timeout_ms: u64,
    /// Maximum number of requests executing at the same time.
    /// Further requests wait for a free slot.
    pub max_concurrent_requests: usize,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl TransportConfig {
    /// Full URL requests are posted to.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.server_url, self.endpoint_path)
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080/".to_string(),
            endpoint_path: "client-user.php".to_string(),
            request_timeout_ms: 10_000,
            max_concurrent_requests: 4,
            user_agent: concat!("plaza/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
