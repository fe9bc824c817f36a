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

//! Acts as the request correlator for friend lists.
//!
//! The [`FriendsAgent`] starts a fetch on a profile, builds the
//! `get-friends-list` request, and hands it to the transport. When the
//! transport completes, the agent resolves the originating profile through the
//! cache using the `visitingid` echoed by the server, never through a reference
//! held by the request. The response may therefore arrive on any thread, and
//! a profile removed from the cache in the meantime simply drops its response.

mod agent;

pub use self::agent::FriendsAgent;
