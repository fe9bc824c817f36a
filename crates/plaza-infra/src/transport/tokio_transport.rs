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
use plaza_core::{Completion, RequestDescriptor, Transport, TransportError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;

/// A [`Transport`] running each request as a task on a tokio runtime.
///
/// Every accepted request completes exactly once:
/// - with the executor's result,
/// - with [`TransportError::Timeout`] if the executor takes too long,
/// - with [`TransportError::Shutdown`] if the transport was shut down,
/// - with [`TransportError::Dropped`] if the runtime is torn down first.
pub struct TokioTransport<E: RequestExecutor> {
    executor: Arc<E>,
    runtime: Handle,
    timeout: Duration,
    slots: Arc<Semaphore>,
    in_flight: Arc<AtomicUsize>,
    accepting: AtomicBool,
}

impl<E: RequestExecutor> TokioTransport<E> {
    /// Creates a transport spawning its requests on `runtime`.
    pub fn new(executor: E, runtime: Handle, config: &TransportConfig) -> Self {
        log::info!(
            "TokioTransport: up to {} concurrent requests, timeout {:?}.",
            config.max_concurrent_requests,
            config.request_timeout()
        );
        Self {
            executor: Arc::new(executor),
            runtime,
            timeout: config.request_timeout(),
            slots: Arc::new(Semaphore::new(config.max_concurrent_requests.max(1))),
            in_flight: Arc::new(AtomicUsize::new(0)),
            accepting: AtomicBool::new(true),
        }
    }

    /// Number of submitted requests that have not completed yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Stops accepting requests. Queued requests that have not started fail
    /// with [`TransportError::Shutdown`]; running ones finish normally.
    pub fn shutdown(&self) {
        if self.accepting.swap(false, Ordering::SeqCst) {
            log::info!("TokioTransport: shutting down.");
            self.slots.close();
        }
    }
}

impl<E: RequestExecutor> Transport for TokioTransport<E> {
    fn submit(&self, descriptor: RequestDescriptor, completion: Completion) {
        if !self.accepting.load(Ordering::SeqCst) {
            completion.complete(Err(TransportError::Shutdown));
            return;
        }

        let executor = Arc::clone(&self.executor);
        let slots = Arc::clone(&self.slots);
        let timeout = self.timeout;
        let counted = InFlight::enter(&self.in_flight);

        self.runtime.spawn(async move {
            let result = match slots.acquire_owned().await {
                Ok(_permit) => match tokio::time::timeout(timeout, executor.execute(&descriptor)).await {
                    Ok(result) => result,
                    Err(_) => {
                        log::warn!(
                            "TokioTransport: {} for {} timed out.",
                            descriptor.action(),
                            descriptor.target()
                        );
                        Err(TransportError::Timeout(timeout))
                    }
                },
                Err(_) => Err(TransportError::Shutdown),
            };
            drop(counted);
            completion.complete(result);
        });
    }
}

/// Counts a request as in flight until dropped, including when the runtime
/// drops the task without polling it to completion.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
