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

use crate::identity::UserId;
use crate::protocol::FIELD_ACTION;
use std::fmt;

/// A single request parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A text value.
    Text(String),
    /// An integer value.
    Number(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<UserId> for ParamValue {
    fn from(value: UserId) -> Self {
        Self::from(value.get())
    }
}

/// Everything the transport needs to perform one request.
///
/// The descriptor names the profile it was issued for (`target`) but holds no
/// reference to it. Responses are routed back through the profile cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    action: String,
    params: Vec<(String, ParamValue)>,
    target: UserId,
}

impl RequestDescriptor {
    /// Creates a descriptor for `action`, issued on behalf of `target`.
    pub fn new(action: impl Into<String>, target: UserId) -> Self {
        Self {
            action: action.into(),
            params: Vec::new(),
            target,
        }
    }

    /// Sets a parameter, replacing any previous value with the same name.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set_param(name, value);
        self
    }

    /// Sets a parameter in place, replacing any previous value with the same name.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((name, value)),
        }
    }

    /// Returns the requested action.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the profile this request was issued for.
    pub fn target(&self) -> UserId {
        self.target
    }

    /// Returns the value of a parameter.
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns all parameters in insertion order.
    pub fn params(&self) -> &[(String, ParamValue)] {
        &self.params
    }

    /// Flattens the descriptor into the fields of an HTTP form post:
    /// `action` first, then every parameter in insertion order.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        std::iter::once((FIELD_ACTION.to_owned(), self.action.clone()))
            .chain(
                self.params
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_string())),
            )
            .collect()
    }
}
