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

//! Network transport backed by a tokio runtime.
//!
//! [`TokioTransport`] owns the scheduling concerns (runtime, concurrency limit,
//! timeout, shutdown) and delegates the actual exchange to a
//! [`RequestExecutor`], of which [`HttpExecutor`] is the production one.

mod config;
mod http;
mod tokio_transport;

pub use self::config::TransportConfig;
pub use self::http::HttpExecutor;
pub use self::tokio_transport::TokioTransport;

use async_trait::async_trait;
use plaza_core::{RequestDescriptor, TransportResult};

/// Performs one request and returns the parsed response.
///
/// Implementations need not enforce timeouts; the transport does.
#[async_trait]
pub trait RequestExecutor: Send + Sync + 'static {
    /// Executes `descriptor`.
    async fn execute(&self, descriptor: &RequestDescriptor) -> TransportResult;
}
