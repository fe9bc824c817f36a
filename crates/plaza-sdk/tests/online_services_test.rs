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

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use plaza_core::protocol::PARAM_VISITING_ID;
use plaza_core::{PayloadNode, RequestDescriptor, TransportError, TransportResult};
use plaza_infra::{RequestExecutor, TokioTransport};
use plaza_sdk::{
    init_logging, FetchOutcome, FetchState, OnlineConfig, OnlineServices, ProfileError,
    ProfileEvent, UserId,
};
use serde_json::{json, Value};
use tokio::runtime::Runtime;

const ME: UserId = UserId::new(1);
const WAIT: Duration = Duration::from_secs(5);

/// Serves canned friend lists keyed by `visitingid`.
struct FakeServer {
    friends: HashMap<u32, Value>,
}

#[async_trait]
impl RequestExecutor for FakeServer {
    async fn execute(&self, descriptor: &RequestDescriptor) -> TransportResult {
        let visiting = descriptor.target().get();
        assert_eq!(
            descriptor.param(PARAM_VISITING_ID).map(ToString::to_string),
            Some(visiting.to_string())
        );
        let friends = self
            .friends
            .get(&visiting)
            .cloned()
            .ok_or(TransportError::Status(404))?;
        Ok(PayloadNode::new(json!({
            "success": "yes",
            "visitingid": visiting,
            "friends": friends,
        })))
    }
}

fn services(runtime: &Runtime) -> OnlineServices {
    init_logging("debug");
    let server = FakeServer {
        friends: HashMap::from([
            (
                1,
                json!([
                    { "online": "yes", "date": "2013-10-02", "is_pending": "no",
                      "user": { "id": 42, "user_name": "alice" } },
                ]),
            ),
            (
                42,
                json!([
                    { "id": 7, "user_name": "bob" },
                    { "id": 9, "user_name": "carol" },
                ]),
            ),
        ]),
    };
    let config = OnlineConfig::default();
    let transport = TokioTransport::new(server, runtime.handle().clone(), &config.transport);
    OnlineServices::with_transport(Arc::new(transport))
}

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Runtime should build")
}

#[test]
fn test_fetch_alice_end_to_end() {
    // --- 1. ARRANGE ---
    let runtime = runtime();
    let online = services(&runtime);
    online.sign_in(ME, "me", "token-abc");
    let alice = online.profile_or_insert(UserId::new(42), "alice");

    // --- 2. ACT ---
    let outcome = online.fetch_friends(UserId::new(42)).unwrap();
    let event = online.events().next_timeout(WAIT).expect("Fetch should settle");

    // --- 3. ASSERT ---
    assert_eq!(outcome, FetchOutcome::Started);
    assert_eq!(
        event,
        ProfileEvent::FriendsListReady {
            id: UserId::new(42),
            friend_count: 2
        }
    );
    assert_eq!(alice.state(), FetchState::Ready);
    assert_eq!(
        alice.friends().unwrap(),
        vec![UserId::new(7), UserId::new(9)]
    );
    let names: Vec<String> = online
        .friends_of(UserId::new(42))
        .unwrap()
        .iter()
        .map(|friend| friend.user_name().to_string())
        .collect();
    assert_eq!(names, vec!["bob", "carol"]);

    assert_eq!(
        online.fetch_friends(UserId::new(42)).unwrap(),
        FetchOutcome::AlreadyFetched
    );
}

#[test]
fn test_own_friend_list_has_relations() {
    let runtime = runtime();
    let online = services(&runtime);
    let me = online.sign_in(ME, "me", "token-abc");
    assert!(me.is_current_user());

    online.fetch_friends(ME).unwrap();
    online.events().next_timeout(WAIT).expect("Fetch should settle");

    let alice = online.profile(UserId::new(42)).expect("Friend should be cached");
    let relation = alice.relation_info().expect("Own list carries relations");
    assert!(relation.is_online());
    assert!(!relation.is_pending());
}

#[test]
fn test_failed_fetch_can_be_retried() {
    let runtime = runtime();
    let online = services(&runtime);
    online.sign_in(ME, "me", "token-abc");
    let stranger = online.profile_or_insert(UserId::new(500), "stranger");

    online.fetch_friends(UserId::new(500)).unwrap();
    let event = online.events().next_timeout(WAIT).expect("Fetch should settle");

    assert!(matches!(event, ProfileEvent::FriendsListFailed { id, .. } if id == UserId::new(500)));
    assert_eq!(stranger.state(), FetchState::Ready);
    assert!(matches!(
        online.friends_of(UserId::new(500)),
        Err(ProfileError::Precondition(_))
    ));
    assert_eq!(
        online.fetch_friends(UserId::new(500)).unwrap(),
        FetchOutcome::Started
    );
    online.events().next_timeout(WAIT).expect("Retry should settle");
}

#[test]
fn test_friends_of_leaves_out_evicted_friends() {
    let runtime = runtime();
    let online = services(&runtime);
    online.sign_in(ME, "me", "token-abc");
    let alice = online.profile_or_insert(UserId::new(42), "alice");
    online.fetch_friends(UserId::new(42)).unwrap();
    online.events().next_timeout(WAIT).expect("Fetch should settle");

    online.cache().remove(UserId::new(7));

    let friends = online.friends_of(UserId::new(42)).unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id(), UserId::new(9));
    assert_eq!(alice.friends().unwrap().len(), 2);
}

#[test]
fn test_signed_out_fetch_is_rejected() {
    let runtime = runtime();
    let online = services(&runtime);
    online.profile_or_insert(UserId::new(42), "alice");

    assert!(matches!(
        online.fetch_friends(UserId::new(42)),
        Err(ProfileError::Precondition(_))
    ));
    assert!(matches!(
        online.fetch_friends(UserId::new(404)),
        Err(ProfileError::NotFound(_))
    ));
}
