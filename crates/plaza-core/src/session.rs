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

//! Boundary contract of the signed-in user session.

use crate::identity::UserId;

/// Read access to the local user session.
///
/// The profile subsystem never signs in or out itself; it only asks who the
/// local user is and whether relational requests may be issued.
pub trait Session: Send + Sync {
    /// Returns the identity of the signed-in user, if any.
    fn current_identity(&self) -> Option<UserId>;

    /// Returns `true` if the session belongs to a registered, signed-in user.
    fn is_authenticated(&self) -> bool;

    /// Returns the opaque token sent along with authenticated requests.
    fn token(&self) -> Option<String>;

    /// Returns `true` if `id` is the signed-in user.
    fn is_current(&self, id: UserId) -> bool {
        self.current_identity() == Some(id)
    }
}
