//! Todo Tree App
//!
//! Opens the todo store, wires its subscription into the reactive view state
//! and lays out the page.

use leptos::prelude::*;
use todo_store::{StoreConfig, TodoStore};

use crate::browser_storage::BrowserStorage;
use crate::components::{NewTodoForm, TodoTreeView};
use crate::context::TodoContext;
use crate::store::{store_replace_todos, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let mut todo_store = TodoStore::open(BrowserStorage, StoreConfig::default());

    // View state mirrors the todo store; the subscription is its only writer
    let app_store = AppStore::new(AppState::new(todo_store.state().clone()));
    todo_store.subscribe(move |todos| store_replace_todos(&app_store, todos));

    provide_context(app_store);
    provide_context(TodoContext::new(todo_store));

    let summary = move || {
        let todos = app_store.todos().read();
        format!("{} todos, {} completed", todos.len(), todos.completed_count())
    };

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>

            <NewTodoForm />

            <TodoTreeView />

            <p class="todo-count">{summary}</p>
        </main>
    }
}
