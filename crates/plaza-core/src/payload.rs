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

//! A parsed response document with typed field extraction.
//!
//! The server encodes scalar fields loosely: identities may arrive as numbers or
//! as numeric strings, and boolean flags as `"yes"`/`"no"`. The accessors here
//! accept both forms so callers only deal with typed values.

use crate::identity::UserId;
use serde_json::Value;

/// An owned, parsed response payload.
///
/// Use [`root`](PayloadNode::root) to obtain a borrowed [`NodeRef`] and walk the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadNode {
    value: Value,
}

impl PayloadNode {
    /// Wraps an already parsed JSON value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Parses a payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    /// Returns a borrowed view of the top-level node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef(&self.value)
    }

    /// Returns the underlying JSON value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl From<Value> for PayloadNode {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// A borrowed node inside a [`PayloadNode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRef<'a>(&'a Value);

impl<'a> NodeRef<'a> {
    fn field(self, name: &str) -> Option<&'a Value> {
        self.0.as_object()?.get(name)
    }

    /// Returns `true` if the node carries a field with this name.
    pub fn has(self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Reads a text field. Numbers are rendered as their decimal form.
    pub fn get_str(self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Reads an unsigned 32-bit field, accepting numbers and numeric strings.
    pub fn get_u32(self, name: &str) -> Option<u32> {
        match self.field(name)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads a boolean flag. Accepts JSON booleans, `"yes"`/`"no"`,
    /// `"true"`/`"false"`, and `0`/`1`.
    pub fn get_flag(self, name: &str) -> Option<bool> {
        match self.field(name)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_u64().map(|v| v != 0),
            Value::String(s) => match s.trim() {
                "yes" | "true" | "1" => Some(true),
                "no" | "false" | "0" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Reads a user identity field.
    pub fn get_id(self, name: &str) -> Option<UserId> {
        self.get_u32(name).map(UserId::new)
    }

    /// Returns the named child node, if present.
    pub fn node(self, name: &str) -> Option<NodeRef<'a>> {
        self.field(name).map(NodeRef)
    }

    /// Iterates over the child nodes.
    ///
    /// Array elements (in order) are the children of an array node; field values
    /// are the children of an object node. Scalars have no children.
    pub fn children(self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let (items, fields) = match self.0 {
            Value::Array(items) => (Some(items.iter()), None),
            Value::Object(map) => (None, Some(map.values())),
            _ => (None, None),
        };
        items
            .into_iter()
            .flatten()
            .chain(fields.into_iter().flatten())
            .map(NodeRef)
    }

    /// Returns the number of child nodes.
    pub fn child_count(self) -> usize {
        match self.0 {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}
