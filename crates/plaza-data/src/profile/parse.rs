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

//! Construction of profiles from response nodes.

use super::{Profile, RelationInfo};
use plaza_core::protocol::{
    FIELD_DATE, FIELD_ID, FIELD_IS_ASKER, FIELD_IS_PENDING, FIELD_ONLINE, FIELD_USER_NAME,
    NODE_FRIENDS, NODE_USER,
};
use plaza_core::{NodeRef, ProfileError, ProfileResult, UserId};

/// The shape of a user entry in a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileNodeKind {
    /// A bare user node carrying `id` and `user_name`.
    Plain,
    /// A relation node carrying `online`, `date`, `is_pending`, `is_asker`,
    /// and the user itself in a nested `user` node.
    Relation,
}

impl Profile {
    /// Builds a profile from a user or relation node.
    ///
    /// Fails with [`ProfileError::MalformedPayload`] if the identity (or, for a
    /// relation, the nested user node) is missing. Absent optional fields fall
    /// back to empty text or `false`.
    pub fn from_node(
        node: NodeRef<'_>,
        kind: ProfileNodeKind,
        current_user: Option<UserId>,
    ) -> ProfileResult<Self> {
        let (relation_info, user) = match kind {
            ProfileNodeKind::Plain => (None, node),
            ProfileNodeKind::Relation => {
                let is_pending = node.get_flag(FIELD_IS_PENDING).unwrap_or(false);
                // The asker flag is only sent for pending requests.
                let is_asker = is_pending && node.get_flag(FIELD_IS_ASKER).unwrap_or(false);
                let relation = RelationInfo::new(
                    node.get_str(FIELD_DATE).unwrap_or_default(),
                    node.get_flag(FIELD_ONLINE).unwrap_or(false),
                    is_pending,
                    is_asker,
                );
                let user = node.node(NODE_USER).ok_or_else(|| {
                    ProfileError::malformed(format!("relation entry without a '{NODE_USER}' node"))
                })?;
                (Some(relation), user)
            }
        };

        let id = user.get_id(FIELD_ID).ok_or_else(|| {
            ProfileError::malformed(format!("user entry without a valid '{FIELD_ID}'"))
        })?;
        let user_name = user.get_str(FIELD_USER_NAME).unwrap_or_default();

        Ok(Self::from_parts(id, user_name, relation_info, current_user))
    }

    /// Parses the `friends` collection of a friend-list response for this profile.
    ///
    /// Entries are read as relations when this is the signed-in user's profile
    /// and as plain users otherwise. Every entry is parsed before anything is
    /// returned, so a single malformed entry rejects the whole list.
    pub fn parse_friends(
        &self,
        response: NodeRef<'_>,
        current_user: Option<UserId>,
    ) -> ProfileResult<Vec<Profile>> {
        let friends = response.node(NODE_FRIENDS).ok_or_else(|| {
            ProfileError::malformed(format!("response without a '{NODE_FRIENDS}' node"))
        })?;
        let kind = if self.is_current_user {
            ProfileNodeKind::Relation
        } else {
            ProfileNodeKind::Plain
        };

        friends
            .children()
            .map(|entry| Profile::from_node(entry, kind, current_user))
            .collect()
    }
}
