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

//! Names used on the wire by the user-profile endpoint.
//!
//! Requests are HTTP form posts carrying an `action` field plus the request
//! parameters. Responses are structured node trees (see [`PayloadNode`](crate::PayloadNode)).

/// Form field holding the requested action.
pub const FIELD_ACTION: &str = "action";

/// Action that returns the friend list of a user.
pub const ACTION_GET_FRIENDS_LIST: &str = "get-friends-list";

/// Session token of the signed-in user.
pub const PARAM_TOKEN: &str = "token";
/// Identity of the signed-in user.
pub const PARAM_USER_ID: &str = "userid";
/// Identity of the profile being visited. Echoed back in the response.
pub const PARAM_VISITING_ID: &str = "visitingid";

/// Node holding the friend entries of a friend-list response.
pub const NODE_FRIENDS: &str = "friends";
/// Nested user node inside a relation entry.
pub const NODE_USER: &str = "user";

/// Identity field of a user node.
pub const FIELD_ID: &str = "id";
/// Display-name field of a user node.
pub const FIELD_USER_NAME: &str = "user_name";

/// Relation entry: whether the friend is currently online.
pub const FIELD_ONLINE: &str = "online";
/// Relation entry: date the relation was last updated.
pub const FIELD_DATE: &str = "date";
/// Relation entry: whether the friendship is still a pending request.
pub const FIELD_IS_PENDING: &str = "is_pending";
/// Relation entry: whether the pending request was sent by the listed user.
pub const FIELD_IS_ASKER: &str = "is_asker";

/// Optional top-level status flag of a response.
pub const FIELD_SUCCESS: &str = "success";
/// Optional top-level human-readable status message.
pub const FIELD_INFO: &str = "info";
