//! Todo Identifier
//!
//! Ids are opaque strings so that previously persisted keys keep loading.
//! Fresh ids all come from [`TodoId::generate`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Key of a todo inside a [`crate::TodoCollection`]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap an existing key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id (UUID v7).
    ///
    /// v7 ids sort by creation time, so a `BTreeMap` keyed by them
    /// lists todos in the order they were added.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
