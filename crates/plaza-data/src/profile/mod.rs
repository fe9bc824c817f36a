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

//! Cached representation of a remote user profile.
//!
//! A [`Profile`] has an immutable identity and a friend list that is fetched
//! lazily over the network. The friend list goes through a small state machine:
//!
//! ```text
//!  Unfetched --start_fetch--> Fetching --complete_fetch--> Fetched
//!      ^                          |
//!      +--------fail_fetch--------+
//! ```
//!
//! `start_fetch` is a no-op while `Fetching` (no duplicate requests) and once
//! `Fetched` (the cached list is reused).

mod fetch_state;
mod parse;
mod relation;

#[cfg(test)]
mod tests;

pub use fetch_state::{FetchOutcome, FetchState};
pub use parse::ProfileNodeKind;
pub use relation::RelationInfo;

use fetch_state::FriendsState;
use plaza_core::{ProfileError, ProfileResult, UserId};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A remote user profile.
///
/// Identity, name, and relation data never change after construction. The
/// friend-list state sits behind its own lock so it can be read while a
/// completion on another thread updates it.
#[derive(Debug)]
pub struct Profile {
    id: UserId,
    user_name: String,
    is_current_user: bool,
    relation_info: Option<RelationInfo>,
    friends: RwLock<FriendsState>,
}

impl Profile {
    /// Creates a profile known only by identity and name.
    ///
    /// `current_user` is the identity of the signed-in user, used to flag the
    /// local user's own profile.
    pub fn new(id: UserId, user_name: impl Into<String>, current_user: Option<UserId>) -> Self {
        Self::from_parts(id, user_name.into(), None, current_user)
    }

    fn from_parts(
        id: UserId,
        user_name: String,
        relation_info: Option<RelationInfo>,
        current_user: Option<UserId>,
    ) -> Self {
        Self {
            id,
            user_name,
            is_current_user: current_user == Some(id),
            relation_info,
            friends: RwLock::new(FriendsState::Unfetched),
        }
    }

    /// The server-assigned identity.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The display name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Whether this is the signed-in user's own profile.
    pub fn is_current_user(&self) -> bool {
        self.is_current_user
    }

    /// Relation to the signed-in user, if the profile was read from their friend list.
    pub fn relation_info(&self) -> Option<&RelationInfo> {
        self.relation_info.as_ref()
    }

    /// Current fetch state.
    pub fn state(&self) -> FetchState {
        self.read_friends().fetch_state()
    }

    /// Whether the friend list has been fetched.
    pub fn has_fetched_friends(&self) -> bool {
        matches!(*self.read_friends(), FriendsState::Fetched(_))
    }

    /// Returns the fetched friend list, in server order.
    ///
    /// Fails with [`ProfileError::Precondition`] until a fetch has completed.
    pub fn friends(&self) -> ProfileResult<Vec<UserId>> {
        match &*self.read_friends() {
            FriendsState::Fetched(friends) => Ok(friends.clone()),
            FriendsState::Fetching => Err(ProfileError::precondition(format!(
                "friends of {} read while a fetch is in flight",
                self.id
            ))),
            FriendsState::Unfetched => Err(ProfileError::precondition(format!(
                "friends of {} read before they were fetched",
                self.id
            ))),
        }
    }

    /// Moves the profile to `Fetching` if its friends still need fetching.
    ///
    /// The check and the transition happen under one lock, so concurrent callers
    /// see exactly one [`FetchOutcome::Started`].
    pub fn start_fetch(&self) -> FetchOutcome {
        let outcome = self.write_friends().start();
        log::trace!("Profile {}: start_fetch -> {outcome:?}", self.id);
        outcome
    }

    /// Stores a fetched friend list and returns to `Ready`.
    ///
    /// Fails with [`ProfileError::Precondition`] if no fetch was in flight
    /// (a duplicate or stale response); the profile is left untouched.
    pub fn complete_fetch(&self, friends: Vec<UserId>) -> ProfileResult<()> {
        let mut state = self.write_friends();
        if *state != FriendsState::Fetching {
            return Err(ProfileError::precondition(format!(
                "friend list for {} completed while no fetch was in flight",
                self.id
            )));
        }
        log::debug!("Profile {}: fetched {} friends.", self.id, friends.len());
        *state = FriendsState::Fetched(friends);
        Ok(())
    }

    /// Abandons an in-flight fetch and returns to `Ready` without friends,
    /// so a later fetch can be attempted.
    ///
    /// This recovery path is a deliberate correction: without it a failed
    /// request would leave the profile stuck in `Fetching` forever.
    /// Returns `true` if a fetch was actually abandoned.
    pub fn fail_fetch(&self) -> bool {
        let mut state = self.write_friends();
        if *state == FriendsState::Fetching {
            *state = FriendsState::Unfetched;
            log::debug!("Profile {}: fetch abandoned, back to ready.", self.id);
            true
        } else {
            false
        }
    }

    fn read_friends(&self) -> RwLockReadGuard<'_, FriendsState> {
        self.friends.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_friends(&self) -> RwLockWriteGuard<'_, FriendsState> {
        self.friends.write().unwrap_or_else(PoisonError::into_inner)
    }
}
