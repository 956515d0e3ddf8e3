//! Reducer
//!
//! Pure transition `(collection, action) -> collection`. No I/O happens here;
//! the store persists and notifies after a successful reduce.

use crate::action::TodoAction;
use crate::config::DeletePolicy;
use crate::error::{ActionError, ActionResult};
use crate::id::TodoId;
use crate::todo::{Todo, TodoCollection};
use crate::tree;

/// Apply `action` to a copy of `state`.
///
/// `Err` means the action was a no-op and `state` should be kept as is.
pub fn reduce(
    state: &TodoCollection,
    action: &TodoAction,
    policy: DeletePolicy,
) -> ActionResult<TodoCollection> {
    let mut next = state.clone();
    apply(&mut next, action, policy)?;
    Ok(next)
}

/// In-place variant of [`reduce`]. On `Err` the collection is untouched.
pub fn apply(
    todos: &mut TodoCollection,
    action: &TodoAction,
    policy: DeletePolicy,
) -> ActionResult<()> {
    match action {
        TodoAction::AddTodo { id, title } => {
            todos.insert(id.clone(), Todo::new(title.as_str()));
        }
        TodoAction::DeleteTodo { id } => delete(todos, id, policy),
        TodoAction::ToggleComplete { id } => {
            let todo = todos.get_mut(id).ok_or_else(|| ActionError::NotFound(id.clone()))?;
            todo.completed = !todo.completed;
        }
        TodoAction::EditTitle { id, new_title } => {
            let todo = todos.get_mut(id).ok_or_else(|| ActionError::NotFound(id.clone()))?;
            todo.title.clone_from(new_title);
        }
        TodoAction::AddChildTodo { parent_id, child_id, child_title } => {
            if parent_id == child_id {
                return Err(ActionError::SelfParent(parent_id.clone()));
            }
            let parent = todos
                .get_mut(parent_id)
                .ok_or_else(|| ActionError::ParentNotFound(parent_id.clone()))?;
            parent.children_ids.push(child_id.clone());
            todos.insert(child_id.clone(), Todo::new(child_title.as_str()));
        }
    }
    Ok(())
}

fn delete(todos: &mut TodoCollection, id: &TodoId, policy: DeletePolicy) {
    match policy {
        DeletePolicy::Orphan => {
            todos.remove(id);
        }
        DeletePolicy::Cascade => {
            if !todos.contains(id) {
                return;
            }
            let mut removed = tree::descendants(todos, id);
            removed.push(id.clone());
            for gone in &removed {
                todos.remove(gone);
            }
            for todo in todos.values_mut() {
                todo.children_ids.retain(|child| !removed.contains(child));
            }
        }
    }
}
