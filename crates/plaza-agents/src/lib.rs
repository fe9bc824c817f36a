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

//! # Plaza Agents
//!
//! Agents turn profile operations into network requests and route the
//! asynchronous responses back into the [`ProfileCache`](plaza_data::ProfileCache).

#![warn(missing_docs)]

pub mod friends_agent;

pub use friends_agent::FriendsAgent;
