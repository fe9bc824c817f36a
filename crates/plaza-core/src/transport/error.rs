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

use crate::payload::PayloadNode;
use std::time::Duration;

/// The outcome handed to a [`Completion`](super::Completion).
pub type TransportResult = Result<PayloadNode, TransportError>;

/// A failure reported by the network layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The HTTP exchange itself failed (connection, TLS, I/O).
    #[error("HTTP request failed: {0}")]
    Http(String),
    /// The server answered with a non-success status code.
    #[error("server answered with status {0}")]
    Status(u16),
    /// The response body could not be parsed.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// No answer arrived within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The server processed the request but reported a failure.
    #[error("server rejected the request: {0}")]
    Rejected(String),
    /// The request was dropped before it completed.
    #[error("request was dropped before completing")]
    Dropped,
    /// The transport no longer accepts requests.
    #[error("transport is shut down")]
    Shutdown,
}
