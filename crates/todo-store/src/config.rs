//! Store Configuration

/// Key holding the serialized collection
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// Title given to children created from the tree's "Add Child" button
pub const DEFAULT_CHILD_TITLE: &str = "New Child Todo";

/// What deleting a todo does to the rest of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Remove only the entry. Parents keep the dangling id and the
    /// entry's children become top-level.
    #[default]
    Orphan,
    /// Remove the entry and all of its descendants, and unlink every
    /// removed id from the remaining `children_ids` lists.
    Cascade,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub delete_policy: DeletePolicy,
    pub child_title: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            delete_policy: DeletePolicy::default(),
            child_title: DEFAULT_CHILD_TITLE.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }

    pub fn with_child_title(mut self, title: impl Into<String>) -> Self {
        self.child_title = title.into();
        self
    }
}
