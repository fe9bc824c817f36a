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

use plaza_core::UserId;

/// Externally visible state of a profile's friend-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// No request is in flight.
    Ready,
    /// A friend-list request is in flight.
    Fetching,
}

/// What [`Profile::start_fetch`](super::Profile::start_fetch) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The profile moved to `Fetching`; the caller must send the request.
    Started,
    /// A request is already in flight; nothing to send.
    InFlight,
    /// The friend list is already cached; nothing to send.
    AlreadyFetched,
}

impl FetchOutcome {
    /// Returns `true` if the caller is responsible for issuing a request.
    pub fn needs_request(self) -> bool {
        self == FetchOutcome::Started
    }
}

/// The friend-list lifecycle of a single profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum FriendsState {
    #[default]
    Unfetched,
    Fetching,
    Fetched(Vec<UserId>),
}

impl FriendsState {
    pub(crate) fn fetch_state(&self) -> FetchState {
        match self {
            FriendsState::Fetching => FetchState::Fetching,
            FriendsState::Unfetched | FriendsState::Fetched(_) => FetchState::Ready,
        }
    }

    pub(crate) fn start(&mut self) -> FetchOutcome {
        match self {
            FriendsState::Unfetched => {
                *self = FriendsState::Fetching;
                FetchOutcome::Started
            }
            FriendsState::Fetching => FetchOutcome::InFlight,
            FriendsState::Fetched(_) => FetchOutcome::AlreadyFetched,
        }
    }
}
