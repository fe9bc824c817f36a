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

use super::{RequestExecutor, TransportConfig};
use async_trait::async_trait;
use plaza_core::protocol::{FIELD_INFO, FIELD_SUCCESS};
use plaza_core::{PayloadNode, RequestDescriptor, TransportError, TransportResult};

/// Posts requests as HTML forms and decodes JSON responses.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpExecutor {
    /// Builds an executor posting to the endpoint named by `config`.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
        })
    }

    /// URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, descriptor: &RequestDescriptor) -> TransportResult {
        log::trace!("HttpExecutor: POST {} action={}", self.endpoint, descriptor.action());

        let response = self
            .client
            .post(&self.endpoint)
            .form(&descriptor.form_fields())
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        let payload = PayloadNode::new(body);
        check_success(&payload)?;
        Ok(payload)
    }
}

/// Turns a `success: "no"` answer into [`TransportError::Rejected`].
/// Responses without a `success` field are accepted.
fn check_success(payload: &PayloadNode) -> Result<(), TransportError> {
    let root = payload.root();
    match root.get_flag(FIELD_SUCCESS) {
        Some(false) => Err(TransportError::Rejected(
            root.get_str(FIELD_INFO)
                .unwrap_or_else(|| "no reason given".to_string()),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flag() {
        let accepted = PayloadNode::new(json!({ "success": "yes", "friends": [] }));
        let unflagged = PayloadNode::new(json!({ "friends": [] }));
        let rejected = PayloadNode::new(json!({ "success": "no", "info": "Session expired" }));

        assert_eq!(check_success(&accepted), Ok(()));
        assert_eq!(check_success(&unflagged), Ok(()));
        assert_eq!(
            check_success(&rejected),
            Err(TransportError::Rejected("Session expired".to_string()))
        );
    }

    #[test]
    fn test_executor_uses_configured_endpoint() {
        let config = TransportConfig {
            server_url: "https://example.net/".to_string(),
            ..Default::default()
        };
        let executor = HttpExecutor::new(&config).unwrap();
        assert_eq!(executor.endpoint(), "https://example.net/client-user.php");
    }
}
