//! UI Components
//!
//! Leptos components for the todo tree.

mod new_todo_form;
mod todo_node;
mod todo_tree_view;

pub use new_todo_form::NewTodoForm;
pub use todo_node::TodoNode;
pub use todo_tree_view::TodoTreeView;
