//! Todo Entity and Collection
//!
//! The tree is carried by `children_ids`; a todo has no parent pointer.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::id::TodoId;

/// A single todo record (its id lives in the enclosing collection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    pub completed: bool,
    /// Child ids in display order. May contain ids that no longer exist.
    #[serde(rename = "childrenIds", default)]
    pub children_ids: Vec<TodoId>,
}

impl Todo {
    /// Create a new, incomplete todo without children
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            children_ids: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children_ids.is_empty()
    }
}

/// Mapping from id to todo.
///
/// Serializes as a flat JSON object keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoCollection(BTreeMap<TodoId, Todo>);

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.0.values().filter(|todo| todo.completed).count()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.0.get(id)
    }

    pub fn get_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.0.get_mut(id)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.0.contains_key(id)
    }

    /// Insert or overwrite, returning the previous record
    pub fn insert(&mut self, id: TodoId, todo: Todo) -> Option<Todo> {
        self.0.insert(id, todo)
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        self.0.remove(id)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, TodoId, Todo> {
        self.0.iter()
    }

    pub(crate) fn values_mut(&mut self) -> btree_map::ValuesMut<'_, TodoId, Todo> {
        self.0.values_mut()
    }
}

impl<'a> IntoIterator for &'a TodoCollection {
    type Item = (&'a TodoId, &'a Todo);
    type IntoIter = btree_map::Iter<'a, TodoId, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(TodoId, Todo)> for TodoCollection {
    fn from_iter<I: IntoIterator<Item = (TodoId, Todo)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
