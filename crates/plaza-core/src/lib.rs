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

//! # Plaza Core
//!
//! Foundational crate containing identities, wire contracts, error types, and the
//! collaborator traits (session, transport) that the rest of the workspace is
//! built against.

#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod identity;
pub mod payload;
pub mod protocol;
pub mod session;
pub mod transport;

pub use error::{ProfileError, ProfileResult};
pub use event::{EventBus, ProfileEvent};
pub use identity::UserId;
pub use payload::{NodeRef, PayloadNode};
pub use session::Session;
pub use transport::{
    Completion, ParamValue, RequestDescriptor, Transport, TransportError, TransportResult,
};
