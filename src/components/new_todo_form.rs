//! New Todo Form Component
//!
//! Single input that adds a root todo.

use leptos::prelude::*;
use todo_store::{TodoAction, TodoId};

use crate::context::use_todo_context;

/// Form for creating root todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let (new_title, set_new_title) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(TodoAction::AddTodo {
            id: TodoId::generate(),
            title: new_title.get_untracked(),
        });
        set_new_title.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                class="new-todo-input"
                placeholder="Add new todo..."
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
