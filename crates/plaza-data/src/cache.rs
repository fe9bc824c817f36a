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

//! The identity-keyed store that owns every known profile.

use crate::profile::{FetchState, Profile};
use plaza_core::{ProfileError, ProfileResult, UserId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, in-memory cache of remote profiles.
///
/// The cache maps each [`UserId`] to at most one [`Profile`]. Profiles are
/// added on first observation (a direct lookup, or as a side effect of parsing
/// a friend list) and stay until explicitly removed. Callers receive shared
/// `Arc` handles and mutate a profile only through its own methods.
///
/// The cache is constructed explicitly and shared by `Arc`; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct ProfileCache {
    profiles: RwLock<HashMap<UserId, Arc<Profile>>>,
}

impl ProfileCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached profile for `id`. Never constructs on a miss.
    pub fn get(&self, id: UserId) -> Option<Arc<Profile>> {
        self.read().get(&id).cloned()
    }

    /// Returns the cached profile for `id`, or [`ProfileError::NotFound`].
    ///
    /// Used when routing responses, where the profile that issued the request
    /// is expected to be cached.
    pub fn must_get(&self, id: UserId) -> ProfileResult<Arc<Profile>> {
        self.get(id).ok_or(ProfileError::NotFound(id))
    }

    /// Inserts `profile`, replacing any previous entry with the same identity.
    /// Returns the stored handle.
    ///
    /// A replaced entry with a fetch in flight is moved back to `Ready`: its
    /// response can no longer reach it through the cache.
    pub fn insert(&self, profile: Profile) -> Arc<Profile> {
        let id = profile.id();
        let profile = Arc::new(profile);
        let displaced = self.write().insert(id, Arc::clone(&profile));
        if let Some(displaced) = displaced {
            log::trace!("ProfileCache: replaced profile {id}.");
            release(&displaced);
        }
        profile
    }

    /// Inserts a profile observed as a side effect of another response (a
    /// friend-list entry). Behaves like [`insert`](Self::insert), except that an
    /// entry with a fetch in flight is kept so its pending response still finds it.
    /// Returns the handle that ends up cached.
    pub fn insert_observed(&self, profile: Profile) -> Arc<Profile> {
        let id = profile.id();
        let mut profiles = self.write();
        if let Some(existing) = profiles.get(&id) {
            if existing.state() == FetchState::Fetching {
                log::trace!("ProfileCache: kept in-flight profile {id}.");
                return Arc::clone(existing);
            }
        }
        let profile = Arc::new(profile);
        profiles.insert(id, Arc::clone(&profile));
        profile
    }

    /// Returns the cached profile for `id`, inserting the one built by `create`
    /// if there is none. `create` runs under the cache lock.
    pub fn get_or_insert_with(&self, id: UserId, create: impl FnOnce() -> Profile) -> Arc<Profile> {
        if let Some(profile) = self.get(id) {
            return profile;
        }
        let mut profiles = self.write();
        let profile = profiles.entry(id).or_insert_with(|| Arc::new(create()));
        Arc::clone(profile)
    }

    /// Checks if a profile with this identity is cached.
    pub fn contains(&self, id: UserId) -> bool {
        self.read().contains_key(&id)
    }

    /// Removes and returns the profile for `id`.
    ///
    /// A fetch in flight for the removed profile is abandoned, so retained
    /// handles stay fetchable.
    pub fn remove(&self, id: UserId) -> Option<Arc<Profile>> {
        let removed = self.write().remove(&id);
        if let Some(profile) = &removed {
            release(profile);
        }
        removed
    }

    /// Removes every profile, abandoning their fetches in flight.
    pub fn clear(&self) {
        let removed: Vec<Arc<Profile>> = self.write().drain().map(|(_, profile)| profile).collect();
        for profile in &removed {
            release(profile);
        }
    }

    /// Checks that `profile` is the very instance cached under its identity.
    ///
    /// Responses are routed through the cache, so only the cached instance can
    /// receive one.
    pub fn holds(&self, profile: &Profile) -> bool {
        self.read()
            .get(&profile.id())
            .is_some_and(|cached| std::ptr::eq(Arc::as_ptr(cached), profile))
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no profile is cached.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Identities of all cached profiles, sorted.
    pub fn ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<UserId, Arc<Profile>>> {
        self.profiles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<UserId, Arc<Profile>>> {
        self.profiles.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Abandons the fetch of a profile that left the cache.
fn release(profile: &Profile) {
    if profile.fail_fetch() {
        log::debug!(
            "ProfileCache: profile {} left the cache mid-fetch; its fetch was abandoned.",
            profile.id()
        );
    }
}
