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

//! Notifications about profile data becoming available.
//!
//! The [`EventBus`] is a generic, thread-safe MPMC channel. The profile
//! subsystem publishes a [`ProfileEvent`] after every friend-list completion so
//! that interested code (UI, tests) can react without polling the cache.

mod bus;

pub use self::bus::EventBus;

use crate::identity::UserId;

/// An event published when a friend-list request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileEvent {
    /// The friend list of `id` was fetched and is now readable.
    FriendsListReady {
        /// The profile whose friends were fetched.
        id: UserId,
        /// Number of friends in the list.
        friend_count: usize,
    },
    /// The friend-list request for `id` failed. The profile can be fetched again.
    FriendsListFailed {
        /// The profile whose fetch failed.
        id: UserId,
        /// A human-readable reason.
        reason: String,
    },
}

impl ProfileEvent {
    /// Returns the profile the event is about.
    pub fn id(&self) -> UserId {
        match self {
            ProfileEvent::FriendsListReady { id, .. } | ProfileEvent::FriendsListFailed { id, .. } => {
                *id
            }
        }
    }
}
