//! Snapshot Persistence
//!
//! The whole collection is stored under one key as a flat JSON object:
//! `{ "<id>": { "title": "...", "completed": false, "childrenIds": [...] } }`.

use std::collections::HashMap;

use crate::error::PersistResult;
use crate::todo::TodoCollection;

/// Key/value backend holding the snapshot
pub trait Storage {
    /// Read the raw value stored under `key`
    fn load(&self, key: &str) -> PersistResult<Option<String>>;

    /// Replace the value stored under `key`
    fn save(&mut self, key: &str, value: &str) -> PersistResult<()>;
}

/// Serialize a collection to the persisted layout
pub fn encode(todos: &TodoCollection) -> PersistResult<String> {
    Ok(serde_json::to_string(todos)?)
}

/// Parse a persisted snapshot.
///
/// A missing value or unparsable JSON yields an empty collection.
pub fn decode(raw: Option<&str>) -> TodoCollection {
    let Some(raw) = raw else {
        return TodoCollection::new();
    };
    match serde_json::from_str(raw) {
        Ok(todos) => todos,
        Err(e) => {
            log::warn!("[PERSIST] Ignoring malformed snapshot ({} bytes): {}", raw.len(), e);
            TodoCollection::new()
        }
    }
}

/// In-memory [`Storage`], used by tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    /// Number of successful writes
    pub writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> PersistResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
