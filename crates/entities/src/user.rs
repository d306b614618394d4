//! User-related entity definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned to a user by the store.
pub type UserId = u64;

/// A user record.
///
/// Only `username` is known; every other field supplied at creation is kept
/// verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned on creation.
    pub id: UserId,
    /// Login name. Not required to be unique.
    pub username: String,
    /// Remaining opaque fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl User {
    /// Builds a user from creation input. The assigned `id` replaces any
    /// `id` the input carried.
    pub fn new(id: UserId, input: NewUser) -> Self {
        let mut fields = input.fields;
        fields.remove("id");
        Self {
            id,
            username: input.username,
            fields,
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name.
    pub username: String,
    /// Additional fields to store alongside the username.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewUser {
    /// Creates input with only a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fields: Map::new(),
        }
    }

    /// Adds an extra field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
