//! Todo Store
//!
//! State layer for a hierarchical to-do list. Holds a flat collection of
//! todos whose tree shape is carried by each todo's `children_ids`, applies
//! actions through a pure reducer, and persists a full JSON snapshot after
//! every successful change.
//!
//! This crate has no browser dependency; the UI plugs in its own
//! [`Storage`] and subscribes to changes.

mod action;
mod config;
mod error;
mod id;
mod persist;
mod reducer;
mod store;
mod todo;
pub mod tree;

pub use action::TodoAction;
pub use config::{DeletePolicy, StoreConfig, DEFAULT_CHILD_TITLE, DEFAULT_STORAGE_KEY};
pub use error::{ActionError, ActionResult, PersistError, PersistResult};
pub use id::TodoId;
pub use persist::{decode, encode, MemoryStorage, Storage};
pub use reducer::{apply, reduce};
pub use store::{Listener, SubscriptionId, TodoStore};
pub use todo::{Todo, TodoCollection};
