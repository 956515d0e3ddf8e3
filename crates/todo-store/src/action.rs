//! Store Actions
//!
//! Every user gesture maps to exactly one of these.

use crate::id::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Insert a new root todo (overwrites on id collision)
    AddTodo { id: TodoId, title: String },
    /// Remove a todo; a missing id is a no-op
    DeleteTodo { id: TodoId },
    /// Flip the completed flag
    ToggleComplete { id: TodoId },
    /// Replace the title
    EditTitle { id: TodoId, new_title: String },
    /// Append `child_id` under `parent_id` and insert the child record
    AddChildTodo {
        parent_id: TodoId,
        child_id: TodoId,
        child_title: String,
    },
}

impl TodoAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            TodoAction::AddTodo { .. } => "add_todo",
            TodoAction::DeleteTodo { .. } => "delete_todo",
            TodoAction::ToggleComplete { .. } => "toggle_complete",
            TodoAction::EditTitle { .. } => "edit_title",
            TodoAction::AddChildTodo { .. } => "add_child_todo",
        }
    }

    /// The id the action primarily touches (the parent for add-child)
    pub fn target(&self) -> &TodoId {
        match self {
            TodoAction::AddTodo { id, .. }
            | TodoAction::DeleteTodo { id }
            | TodoAction::ToggleComplete { id }
            | TodoAction::EditTitle { id, .. } => id,
            TodoAction::AddChildTodo { parent_id, .. } => parent_id,
        }
    }
}
