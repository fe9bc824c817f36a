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

//! Error taxonomy of the profile subsystem.

use crate::identity::UserId;
use crate::transport::TransportError;

/// A specialized `Result` type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// An error raised while fetching, routing, or reading profile data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    /// The caller used an API in a state where it is not valid, such as reading
    /// friends before a fetch completed or fetching while signed out.
    /// This is a caller bug, never retried.
    #[error("precondition violated: {0}")]
    Precondition(String),
    /// A response referred to a profile that is not in the cache.
    #[error("profile {0} is not cached")]
    NotFound(UserId),
    /// The transport could not complete the request.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A required field was missing or had the wrong type.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl ProfileError {
    /// Builds a [`ProfileError::Precondition`] from any message.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Builds a [`ProfileError::MalformedPayload`] from any message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}
