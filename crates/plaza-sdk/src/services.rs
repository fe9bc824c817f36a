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

//! Wiring of the profile subsystem.

use std::sync::Arc;

use anyhow::{Context, Result};
use plaza_agents::FriendsAgent;
use plaza_core::{EventBus, ProfileEvent, ProfileResult, Session, Transport, UserId};
use plaza_data::{FetchOutcome, Profile, ProfileCache};
use plaza_infra::{CurrentUser, HttpExecutor, TokioTransport};
use tokio::runtime::Handle;

use crate::config::OnlineConfig;

/// The profile cache, session, and friend-list agent of one application.
pub struct OnlineServices {
    cache: Arc<ProfileCache>,
    user: Arc<CurrentUser>,
    events: Arc<EventBus<ProfileEvent>>,
    agent: FriendsAgent,
}

impl OnlineServices {
    /// Creates the services with an HTTP transport running on `runtime`.
    pub fn new(config: &OnlineConfig, runtime: Handle) -> Result<Self> {
        let executor =
            HttpExecutor::new(&config.transport).context("Failed to build the HTTP client")?;
        let transport = TokioTransport::new(executor, runtime, &config.transport);
        log::info!(
            "OnlineServices: using {}",
            config.transport.endpoint_url()
        );
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates the services on top of an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        let cache = Arc::new(ProfileCache::new());
        let user = Arc::new(CurrentUser::new());
        let events = Arc::new(EventBus::new());
        let session: Arc<dyn Session> = user.clone();
        let agent = FriendsAgent::new(Arc::clone(&cache), session, transport)
            .with_event_bus(Arc::clone(&events));
        Self {
            cache,
            user,
            events,
            agent,
        }
    }

    /// The shared profile cache.
    pub fn cache(&self) -> &Arc<ProfileCache> {
        &self.cache
    }

    /// The local user session.
    pub fn current_user(&self) -> &Arc<CurrentUser> {
        &self.user
    }

    /// Events published when friend-list requests settle.
    pub fn events(&self) -> &Arc<EventBus<ProfileEvent>> {
        &self.events
    }

    /// The friend-list agent.
    pub fn agent(&self) -> &FriendsAgent {
        &self.agent
    }

    /// Records a sign-in and caches the user's own profile.
    pub fn sign_in(
        &self,
        id: UserId,
        user_name: &str,
        token: impl Into<String>,
    ) -> Arc<Profile> {
        self.user.sign_in(id, user_name, token);
        self.cache
            .insert_observed(Profile::new(id, user_name, Some(id)))
    }

    /// Returns the cached profile for `id`.
    pub fn profile(&self, id: UserId) -> Option<Arc<Profile>> {
        self.cache.get(id)
    }

    /// Returns the cached profile for `id`, creating a plain one on first observation.
    pub fn profile_or_insert(&self, id: UserId, user_name: &str) -> Arc<Profile> {
        let current = self.user.current_identity();
        self.cache
            .get_or_insert_with(id, || Profile::new(id, user_name, current))
    }

    /// Starts fetching the friends of a cached profile.
    pub fn fetch_friends(&self, id: UserId) -> ProfileResult<FetchOutcome> {
        let profile = self.cache.must_get(id)?;
        self.agent.fetch_friends(&profile)
    }

    /// Returns the cached profiles of `id`'s friends, in server order.
    ///
    /// Fails like [`Profile::friends`] until the list has been fetched. Friends
    /// removed from the cache since the fetch are left out (with a warning), so
    /// the result can be shorter than [`Profile::friends`].
    pub fn friends_of(&self, id: UserId) -> ProfileResult<Vec<Arc<Profile>>> {
        let profile = self.cache.must_get(id)?;
        let friends = profile.friends()?;
        Ok(friends
            .into_iter()
            .filter_map(|friend| {
                let cached = self.cache.get(friend);
                if cached.is_none() {
                    log::warn!("OnlineServices: friend {friend} of {id} is no longer cached.");
                }
                cached
            })
            .collect())
    }
}
