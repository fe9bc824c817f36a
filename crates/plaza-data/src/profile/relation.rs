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

/// The social relation between a listed user and the signed-in user.
///
/// Only attached to profiles that were read from the signed-in user's own
/// friend list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelationInfo {
    date: String,
    is_online: bool,
    is_pending: bool,
    is_asker: bool,
}

impl RelationInfo {
    /// Creates a relation record.
    ///
    /// `is_asker` only has meaning for a pending request and is cleared when
    /// `is_pending` is `false`.
    pub fn new(date: impl Into<String>, is_online: bool, is_pending: bool, is_asker: bool) -> Self {
        Self {
            date: date.into(),
            is_online,
            is_pending,
            is_asker: is_pending && is_asker,
        }
    }

    /// Date of the last change to the relation, as sent by the server.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Whether the listed user is online.
    pub fn is_online(&self) -> bool {
        self.is_online
    }

    /// Whether the friendship is still an unanswered request.
    pub fn is_pending(&self) -> bool {
        self.is_pending
    }

    /// Whether the listed user sent the pending request.
    pub fn is_asker(&self) -> bool {
        self.is_asker
    }
}
