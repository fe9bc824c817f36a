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

//! The signed-in user of this process.

use plaza_core::{Session, UserId};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Clone)]
struct SignedIn {
    id: UserId,
    user_name: String,
    token: String,
}

/// The local user session.
///
/// Sign-in itself happens elsewhere; this type only records its result and
/// exposes it through the [`Session`] contract.
#[derive(Debug, Default)]
pub struct CurrentUser {
    signed_in: RwLock<Option<SignedIn>>,
}

impl CurrentUser {
    /// Creates a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful sign-in, replacing any previous user.
    pub fn sign_in(&self, id: UserId, user_name: impl Into<String>, token: impl Into<String>) {
        let user = SignedIn {
            id,
            user_name: user_name.into(),
            token: token.into(),
        };
        log::info!("CurrentUser: signed in as {} ({id}).", user.user_name);
        *self.signed_in.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Forgets the signed-in user.
    pub fn sign_out(&self) {
        if let Some(user) = self
            .signed_in
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            log::info!("CurrentUser: {} signed out.", user.id);
        }
    }

    /// Display name of the signed-in user.
    pub fn user_name(&self) -> Option<String> {
        self.with_user(|user| user.user_name.clone())
    }

    fn with_user<R>(&self, read: impl FnOnce(&SignedIn) -> R) -> Option<R> {
        self.signed_in
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(read)
    }
}

impl Session for CurrentUser {
    fn current_identity(&self) -> Option<UserId> {
        self.with_user(|user| user.id)
    }

    fn is_authenticated(&self) -> bool {
        self.with_user(|user| !user.token.is_empty()).unwrap_or(false)
    }

    fn token(&self) -> Option<String> {
        self.with_user(|user| user.token.clone())
    }
}
