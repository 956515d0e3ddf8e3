//! Reactive View State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `TodoStore`
//! subscription is the only writer; components only read.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_store::TodoCollection;

/// Latest snapshot published by the todo store
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, keyed by id
    pub todos: TodoCollection,
    /// Version counter, incremented on every published snapshot
    pub revision: u64,
}

impl AppState {
    pub fn new(todos: TodoCollection) -> Self {
        Self { todos, revision: 0 }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the published snapshot
pub fn store_replace_todos(store: &AppStore, todos: &TodoCollection) {
    *store.todos().write() = todos.clone();
    *store.revision().write() += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_store::Todo;

    #[test]
    fn test_replace_todos_bumps_revision() {
        let owner = Owner::new();
        owner.with(|| {
            let store = AppStore::new(AppState::new(TodoCollection::new()));
            assert_eq!(store.revision().get_untracked(), 0);

            let mut todos = TodoCollection::new();
            todos.insert("1".into(), Todo::new("Buy milk"));
            store_replace_todos(&store, &todos);
            store_replace_todos(&store, &todos);

            assert_eq!(store.revision().get_untracked(), 2);
            assert_eq!(store.todos().get_untracked(), todos);
        });
    }
}
