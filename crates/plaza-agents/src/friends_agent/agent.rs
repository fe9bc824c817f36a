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

use std::sync::Arc;

use plaza_core::protocol::{ACTION_GET_FRIENDS_LIST, PARAM_TOKEN, PARAM_USER_ID, PARAM_VISITING_ID};
use plaza_core::{
    Completion, EventBus, NodeRef, PayloadNode, ProfileError, ProfileEvent, ProfileResult,
    RequestDescriptor, Session, Transport, TransportResult, UserId,
};
use plaza_data::{FetchOutcome, FetchState, Profile, ProfileCache};

/// Issues friend-list requests and applies their responses.
///
/// Cloning the agent is cheap; every clone shares the same cache, session,
/// transport, and event bus. Completion callbacks hold such a clone.
#[derive(Clone)]
pub struct FriendsAgent {
    cache: Arc<ProfileCache>,
    session: Arc<dyn Session>,
    transport: Arc<dyn Transport>,
    events: Arc<EventBus<ProfileEvent>>,
}

impl FriendsAgent {
    /// Creates an agent with its own event bus.
    pub fn new(
        cache: Arc<ProfileCache>,
        session: Arc<dyn Session>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            cache,
            session,
            transport,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Publishes completion events on `events` instead of a private bus.
    pub fn with_event_bus(mut self, events: Arc<EventBus<ProfileEvent>>) -> Self {
        self.events = events;
        self
    }

    /// The cache this agent reads and populates.
    pub fn cache(&self) -> &Arc<ProfileCache> {
        &self.cache
    }

    /// The bus on which completion events are published.
    pub fn events(&self) -> &Arc<EventBus<ProfileEvent>> {
        &self.events
    }

    /// Fetches the friend list of `profile` unless it is cached or already in flight.
    ///
    /// Returns immediately; the list is applied later from the transport's
    /// completion. Fails with [`ProfileError::Precondition`] when the session
    /// is not authenticated, in which case nothing changes and nothing is sent.
    pub fn fetch_friends(&self, profile: &Profile) -> ProfileResult<FetchOutcome> {
        if !self.session.is_authenticated() {
            log::error!(
                "FriendsAgent: friend list of {} requested without an authenticated session.",
                profile.id()
            );
            return Err(ProfileError::precondition(
                "friend lists can only be fetched by a signed-in user",
            ));
        }

        let outcome = profile.start_fetch();
        if outcome.needs_request() {
            if let Err(e) = self.request_friends_list(profile) {
                profile.fail_fetch();
                return Err(e);
            }
        } else {
            log::debug!("FriendsAgent: no request for {} ({outcome:?}).", profile.id());
        }
        Ok(outcome)
    }

    /// Sends the `get-friends-list` request for a profile already in `Fetching`.
    pub fn request_friends_list(&self, profile: &Profile) -> ProfileResult<()> {
        if profile.state() != FetchState::Fetching {
            return Err(ProfileError::precondition(format!(
                "friend list of {} requested while not fetching",
                profile.id()
            )));
        }
        // Responses are routed through the cache; any other instance would never see its answer.
        if !self.cache.holds(profile) {
            return Err(ProfileError::precondition(format!(
                "profile {} must be the cached instance to fetch its friends",
                profile.id()
            )));
        }
        let token = self
            .session
            .token()
            .ok_or_else(|| ProfileError::precondition("session has no token"))?;
        let user_id = self
            .session
            .current_identity()
            .ok_or_else(|| ProfileError::precondition("session has no user"))?;

        let target = profile.id();
        let descriptor = RequestDescriptor::new(ACTION_GET_FRIENDS_LIST, target)
            .with_param(PARAM_TOKEN, token)
            .with_param(PARAM_USER_ID, user_id)
            .with_param(PARAM_VISITING_ID, target);

        let agent = self.clone();
        let completion =
            Completion::new(move |result| agent.on_friends_list_response(target, result));

        log::debug!("FriendsAgent: requesting friend list of {target}.");
        self.transport.submit(descriptor, completion);
        Ok(())
    }

    /// Applies the outcome of a friend-list request issued for `requested`.
    ///
    /// Successful responses are routed by the `visitingid` they carry. Every
    /// failure (transport error, malformed payload) drives the profile back to
    /// `Ready` without friends so it can be fetched again.
    pub fn on_friends_list_response(&self, requested: UserId, result: TransportResult) {
        match result {
            Ok(payload) => self.handle_payload(requested, &payload),
            Err(e) => {
                log::warn!("FriendsAgent: friend list of {requested} failed: {e}");
                self.abandon(requested, &ProfileError::from(e));
            }
        }
    }

    fn handle_payload(&self, requested: UserId, payload: &PayloadNode) {
        let root = payload.root();
        let Some(target) = root.get_id(PARAM_VISITING_ID) else {
            let e = ProfileError::malformed(format!("response without '{PARAM_VISITING_ID}'"));
            log::warn!("FriendsAgent: friend list of {requested} unusable: {e}");
            self.abandon(requested, &e);
            return;
        };
        if target != requested {
            // The request for `requested` has no answer of its own now.
            log::warn!("FriendsAgent: response for {target} answered the request for {requested}.");
            self.abandon(
                requested,
                &ProfileError::malformed(format!("response carried {target}")),
            );
        }

        let profile = match self.cache.must_get(target) {
            Ok(profile) => profile,
            Err(e) => {
                log::error!("FriendsAgent: dropping friend list: {e}");
                return;
            }
        };
        if profile.state() != FetchState::Fetching {
            log::warn!("FriendsAgent: dropping stale friend list for {target}.");
            return;
        }

        match self.apply_friends_list(&profile, root) {
            Ok(friend_count) => self.events.publish(ProfileEvent::FriendsListReady {
                id: target,
                friend_count,
            }),
            Err(e) => {
                log::warn!("FriendsAgent: friend list of {target} rejected: {e}");
                self.abandon(target, &e);
            }
        }
    }

    fn apply_friends_list(&self, profile: &Profile, root: NodeRef<'_>) -> ProfileResult<usize> {
        let friends = profile.parse_friends(root, self.session.current_identity())?;
        let ids: Vec<UserId> = friends.iter().map(Profile::id).collect();

        for friend in friends {
            if friend.id() != profile.id() {
                self.cache.insert_observed(friend);
            }
        }

        let friend_count = ids.len();
        profile.complete_fetch(ids)?;
        log::info!(
            "FriendsAgent: {} now has {friend_count} cached friends.",
            profile.id()
        );
        Ok(friend_count)
    }

    fn abandon(&self, id: UserId, reason: &ProfileError) {
        let Some(profile) = self.cache.get(id) else {
            log::error!("FriendsAgent: cannot reset {id}: {}", ProfileError::NotFound(id));
            return;
        };
        if profile.fail_fetch() {
            self.events.publish(ProfileEvent::FriendsListFailed {
                id,
                reason: reason.to_string(),
            });
        }
    }
}
