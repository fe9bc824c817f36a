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

//! Contract between the profile subsystem and the network layer.
//!
//! A [`Transport`] accepts a [`RequestDescriptor`] together with a single-shot
//! [`Completion`] and performs the request on its own execution context. The
//! transport must eventually complete every accepted request, either with a
//! parsed [`PayloadNode`](crate::PayloadNode) or with a [`TransportError`].
//! A `Completion` that is dropped unused reports [`TransportError::Dropped`] on
//! its own, so a lost request can never leave its caller waiting forever.

mod completion;
mod descriptor;
mod error;

pub use self::completion::Completion;
pub use self::descriptor::{ParamValue, RequestDescriptor};
pub use self::error::{TransportError, TransportResult};

/// A network layer able to perform requests asynchronously.
pub trait Transport: Send + Sync {
    /// Queues `descriptor` for execution and returns immediately.
    ///
    /// `completion` is invoked exactly once, on any thread, when the request
    /// finishes or fails.
    fn submit(&self, descriptor: RequestDescriptor, completion: Completion);
}
