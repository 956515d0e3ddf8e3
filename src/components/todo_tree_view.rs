//! Todo Tree View Component
//!
//! Renders every top-level todo; each node renders its own children.

use leptos::prelude::*;
use todo_store::tree::{self, TreePath};
use todo_store::TodoId;

use crate::components::TodoNode;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoTreeView() -> impl IntoView {
    let app_store = use_app_store();

    // Full scan on every change; collections are small
    let top_level = move || {
        let todos = app_store.todos().read();
        let ids: Vec<TodoId> = tree::top_level(&todos)
            .into_iter()
            .map(|(id, _)| id.clone())
            .collect();
        ids
    };

    view! {
        <div class="todo-tree">
            <For
                each=top_level
                key=|id| id.clone()
                children=move |id| view! { <TodoNode id=id path=TreePath::root() /> }
            />
        </div>
    }
}
