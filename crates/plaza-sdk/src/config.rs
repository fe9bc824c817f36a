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

//! Top-level configuration.

use anyhow::{Context, Result};
use plaza_infra::TransportConfig;
use serde::{Deserialize, Serialize};

/// Configuration for [`OnlineServices`](crate::OnlineServices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineConfig {
    /// Network transport settings.
    pub transport: TransportConfig,
    /// Log filter used by [`init_logging`](crate::init_logging) when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl OnlineConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse online configuration")
    }
}

impl Default for OnlineConfig {
    fn default() -> Self {
        Self {
            transport: TransportConfig::default(),
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_overrides_nested_fields() {
        let config = OnlineConfig::from_json(
            r#"{ "transport": { "server_url": "https://example.net/" }, "log_filter": "debug" }"#,
        )
        .unwrap();

        assert_eq!(config.transport.server_url, "https://example.net/");
        assert_eq!(config.transport.endpoint_path, "client-user.php");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_json_reports_bad_input() {
        let error = OnlineConfig::from_json("{ not json").unwrap_err();
        assert!(error.to_string().contains("online configuration"));
    }
}
