//! Error types for store operations.

use thiserror::Error;

use crate::id::TodoId;

/// Why an action left the collection unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Toggle or edit referenced a todo that does not exist.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// Add-child referenced a parent that does not exist.
    #[error("Parent todo not found: {0}")]
    ParentNotFound(TodoId),

    /// Add-child used the parent's own id for the child.
    #[error("Todo cannot be its own child: {0}")]
    SelfParent(TodoId),
}

/// Errors from reading or writing the persisted snapshot.
#[derive(Error, Debug)]
pub enum PersistError {
    /// No storage backend is reachable (e.g. storage disabled in the browser).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Reading the snapshot failed.
    #[error("Failed to read snapshot: {0}")]
    Read(String),

    /// Writing the snapshot failed (quota, permissions, ...).
    #[error("Failed to write snapshot: {0}")]
    Write(String),

    /// Serializing the collection failed.
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ActionResult<T> = Result<T, ActionError>;
pub type PersistResult<T> = Result<T, PersistError>;
