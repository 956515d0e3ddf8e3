//! Todo Context
//!
//! Dispatch handle provided via the Leptos Context API.

use leptos::prelude::*;
use todo_store::{TodoAction, TodoStore};

use crate::browser_storage::BrowserStorage;

/// Owns the `TodoStore`; every gesture goes through [`TodoContext::dispatch`]
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: StoredValue<TodoStore<BrowserStorage>>,
}

impl TodoContext {
    pub fn new(store: TodoStore<BrowserStorage>) -> Self {
        Self {
            store: StoredValue::new(store),
        }
    }

    /// Send one action to the store.
    ///
    /// Rejected actions were already logged by the store and leave state as is.
    pub fn dispatch(&self, action: TodoAction) {
        self.store.update_value(|store| {
            let _ = store.dispatch(action);
        });
    }

    /// Title for todos created with "Add Child"
    pub fn child_title(&self) -> String {
        self.store.with_value(|store| store.config().child_title.clone())
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
