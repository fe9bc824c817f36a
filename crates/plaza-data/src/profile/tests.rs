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

use super::{FetchOutcome, FetchState, Profile, ProfileNodeKind};
use plaza_core::{PayloadNode, ProfileError, UserId};
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn alice() -> Profile {
    Profile::new(UserId::new(42), "alice", None)
}

#[test]
fn test_new_profile_is_ready_and_unfetched() {
    let profile = alice();

    assert_eq!(profile.id(), UserId::new(42));
    assert_eq!(profile.user_name(), "alice");
    assert_eq!(profile.state(), FetchState::Ready);
    assert!(!profile.has_fetched_friends());
    assert!(profile.relation_info().is_none());
    assert!(!profile.is_current_user());
}

#[test]
fn test_current_user_flag() {
    let me = Profile::new(UserId::new(1), "me", Some(UserId::new(1)));
    let other = Profile::new(UserId::new(2), "other", Some(UserId::new(1)));

    assert!(me.is_current_user());
    assert!(!other.is_current_user());
}

#[test]
fn test_friends_before_fetch_is_precondition_error() {
    let profile = alice();
    assert!(matches!(
        profile.friends(),
        Err(ProfileError::Precondition(_))
    ));

    profile.start_fetch();
    assert!(
        matches!(profile.friends(), Err(ProfileError::Precondition(_))),
        "Friends must not be readable while a fetch is in flight"
    );
}

#[test]
fn test_fetch_lifecycle() {
    // --- 1. SETUP ---
    let profile = alice();

    // --- 2. ACTION ---
    let first = profile.start_fetch();
    let second = profile.start_fetch();

    // --- 3. ASSERTIONS ---
    assert_eq!(first, FetchOutcome::Started);
    assert_eq!(second, FetchOutcome::InFlight, "Re-entry must be a no-op");
    assert_eq!(profile.state(), FetchState::Fetching);

    profile
        .complete_fetch(vec![UserId::new(7), UserId::new(9)])
        .expect("Completing an in-flight fetch should succeed");

    assert_eq!(profile.state(), FetchState::Ready);
    assert!(profile.has_fetched_friends());
    assert_eq!(
        profile.friends().unwrap(),
        vec![UserId::new(7), UserId::new(9)]
    );

    // A cached list is reused.
    assert_eq!(profile.start_fetch(), FetchOutcome::AlreadyFetched);
    assert_eq!(profile.state(), FetchState::Ready);
    assert_eq!(profile.friends().unwrap().len(), 2);
}

#[test]
fn test_complete_without_fetch_is_rejected() {
    let profile = alice();

    let result = profile.complete_fetch(vec![UserId::new(7)]);

    assert!(matches!(result, Err(ProfileError::Precondition(_))));
    assert!(!profile.has_fetched_friends());
}

#[test]
fn test_fail_fetch_allows_retry() {
    let profile = alice();
    assert!(!profile.fail_fetch(), "Nothing to abandon while ready");

    profile.start_fetch();
    assert!(profile.fail_fetch());

    assert_eq!(profile.state(), FetchState::Ready);
    assert!(!profile.has_fetched_friends());
    assert_eq!(profile.start_fetch(), FetchOutcome::Started);
}

#[test]
fn test_concurrent_start_fetch_starts_once() {
    let profile = Arc::new(alice());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let profile = Arc::clone(&profile);
            thread::spawn(move || profile.start_fetch())
        })
        .collect();
    let started = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread join failed"))
        .filter(|outcome| outcome.needs_request())
        .count();

    assert_eq!(started, 1, "Exactly one caller may issue the request");
}

#[test]
fn test_plain_node() {
    let payload = PayloadNode::new(json!({ "id": "7", "user_name": "bob" }));

    let profile = Profile::from_node(payload.root(), ProfileNodeKind::Plain, Some(UserId::new(7)))
        .expect("Plain node should parse");

    assert_eq!(profile.id(), UserId::new(7));
    assert_eq!(profile.user_name(), "bob");
    assert!(profile.is_current_user());
    assert!(profile.relation_info().is_none());
    assert_eq!(profile.state(), FetchState::Ready);
}

#[test]
fn test_relation_node() {
    let payload = PayloadNode::new(json!({
        "online": "yes",
        "date": "2013-09-01",
        "is_pending": "yes",
        "is_asker": "yes",
        "user": { "id": 9, "user_name": "carol" },
    }));

    let profile = Profile::from_node(payload.root(), ProfileNodeKind::Relation, None)
        .expect("Relation node should parse");

    let relation = profile.relation_info().expect("Relation info should be set");
    assert_eq!(profile.id(), UserId::new(9));
    assert_eq!(profile.user_name(), "carol");
    assert_eq!(relation.date(), "2013-09-01");
    assert!(relation.is_online());
    assert!(relation.is_pending());
    assert!(relation.is_asker());
}

#[test]
fn test_relation_asker_ignored_unless_pending() {
    let payload = PayloadNode::new(json!({
        "online": "no",
        "is_pending": "no",
        "is_asker": "yes",
        "user": { "id": 9, "user_name": "carol" },
    }));

    let profile = Profile::from_node(payload.root(), ProfileNodeKind::Relation, None).unwrap();

    let relation = profile.relation_info().unwrap();
    assert!(!relation.is_pending());
    assert!(!relation.is_asker());
    assert_eq!(relation.date(), "");
}

#[test]
fn test_missing_identity_is_malformed() {
    let plain = PayloadNode::new(json!({ "user_name": "nobody" }));
    let relation = PayloadNode::new(json!({ "online": "yes" }));

    assert!(matches!(
        Profile::from_node(plain.root(), ProfileNodeKind::Plain, None),
        Err(ProfileError::MalformedPayload(_))
    ));
    assert!(matches!(
        Profile::from_node(relation.root(), ProfileNodeKind::Relation, None),
        Err(ProfileError::MalformedPayload(_))
    ));
}

#[test]
fn test_parse_friends_uses_relation_nodes_for_current_user() {
    let me = Profile::new(UserId::new(1), "me", Some(UserId::new(1)));
    let payload = PayloadNode::new(json!({
        "visitingid": 1,
        "friends": [
            { "online": "yes", "is_pending": "no", "user": { "id": 7, "user_name": "bob" } },
        ],
    }));

    let friends = me
        .parse_friends(payload.root(), Some(UserId::new(1)))
        .unwrap();

    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id(), UserId::new(7));
    assert!(friends[0].relation_info().unwrap().is_online());
}

#[test]
fn test_parse_friends_rejects_whole_list_on_bad_entry() {
    let profile = alice();
    let payload = PayloadNode::new(json!({
        "visitingid": 42,
        "friends": [
            { "id": 7, "user_name": "bob" },
            { "user_name": "ghost" },
        ],
    }));

    let result = profile.parse_friends(payload.root(), None);

    assert!(matches!(result, Err(ProfileError::MalformedPayload(_))));
}

#[test]
fn test_parse_friends_requires_friends_node() {
    let profile = alice();
    let payload = PayloadNode::new(json!({ "visitingid": 42 }));

    assert!(matches!(
        profile.parse_friends(payload.root(), None),
        Err(ProfileError::MalformedPayload(_))
    ));
}
