//! Todo Node Component
//!
//! One todo row followed by its children, rendered recursively.

use leptos::prelude::*;
use todo_store::tree::TreePath;
use todo_store::{TodoAction, TodoId};

use crate::context::use_todo_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// A todo row and its subtree.
///
/// The record is looked up from the current snapshot on every change, so
/// edits made elsewhere in the tree show up here too.
#[component]
pub fn TodoNode(id: TodoId, path: TreePath) -> AnyView {
    let ctx = use_todo_context();
    let app_store = use_app_store();

    let todo = {
        let id = id.clone();
        Memo::new(move |_| app_store.todos().read().get(&id).cloned())
    };

    let children = {
        let id = id.clone();
        let path = path.clone();
        move || {
            let todos = app_store.todos().read();
            let entries: Vec<(usize, TodoId)> = path
                .renderable_children(&todos, &id)
                .into_iter()
                .enumerate()
                .map(|(position, (child_id, _))| (position, child_id))
                .collect();
            entries
        }
    };
    let child_path = path.descend(&id);
    let indent = path.depth() * 24;

    let on_toggle = {
        let id = id.clone();
        move |_: web_sys::Event| ctx.dispatch(TodoAction::ToggleComplete { id: id.clone() })
    };
    let on_edit = {
        let id = id.clone();
        move |ev: web_sys::Event| {
            ctx.dispatch(TodoAction::EditTitle {
                id: id.clone(),
                new_title: event_target_value(&ev),
            })
        }
    };
    let on_delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.dispatch(TodoAction::DeleteTodo { id: id.clone() })
    };
    let on_add_child = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            ctx.dispatch(TodoAction::AddChildTodo {
                parent_id: id.clone(),
                child_id: TodoId::generate(),
                child_title: ctx.child_title(),
            })
        }
    };

    let completed = move || todo.get().is_some_and(|t| t.completed);
    let has_children = move || todo.get().is_some_and(|t| t.has_children());
    let row_class = move || {
        let mut c = String::from("todo-row");
        if completed() {
            c.push_str(" completed");
        }
        if has_children() {
            c.push_str(" has-children");
        }
        c
    };
    let title = move || todo.get().map(|t| t.title).unwrap_or_default();

    view! {
        <div class="todo-node">
            <div
                class=row_class
                style=format!("margin-left: {}px;", indent)
            >
                <input type="checkbox" prop:checked=completed on:change=on_toggle />
                <input type="text" class="todo-title" prop:value=title on:input=on_edit />
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
                <button class="add-child-btn" on:click=on_add_child>"Add Child"</button>
            </div>

            <For
                each=children
                key=|entry| entry.clone()
                children=move |(_, child_id)| {
                    view! { <TodoNode id=child_id path=child_path.clone() /> }
                }
            />
        </div>
    }
    .into_any()
}
