//! Tree Queries
//!
//! Derive the tree shape from `children_ids` back-references.
//! Nothing here assumes the graph is acyclic or single-parent.

use std::collections::HashSet;

use crate::id::TodoId;
use crate::todo::{Todo, TodoCollection};

/// Todos not listed in any *other* todo's `children_ids`, in map order.
///
/// A group that only references itself (A -> B -> A) has no top-level
/// member and is therefore not reachable from the rendered tree.
pub fn top_level(todos: &TodoCollection) -> Vec<(&TodoId, &Todo)> {
    let mut referenced: HashSet<&TodoId> = HashSet::new();
    for (id, todo) in todos {
        referenced.extend(todo.children_ids.iter().filter(|child| *child != id));
    }

    todos
        .iter()
        .filter(|(id, _)| !referenced.contains(id))
        .collect()
}

/// Resolve a todo's children against the current collection.
///
/// Ids that do not resolve are skipped. List order and duplicates are kept.
pub fn children<'a>(todos: &'a TodoCollection, id: &TodoId) -> Vec<(&'a TodoId, &'a Todo)> {
    let Some(todo) = todos.get(id) else {
        return Vec::new();
    };
    todo.children_ids
        .iter()
        .filter_map(|child_id| todos.get(child_id).map(|child| (child_id, child)))
        .collect()
}

/// Every id reachable below `id`, each once, in breadth-first order.
/// `id` itself is never included even if a cycle leads back to it.
pub fn descendants(todos: &TodoCollection, id: &TodoId) -> Vec<TodoId> {
    let mut seen: HashSet<&TodoId> = HashSet::from([id]);
    let mut result = Vec::new();
    let mut queue = vec![id];

    while !queue.is_empty() {
        let mut next = Vec::new();
        for current in queue {
            let Some(todo) = todos.get(current) else { continue };
            for child in &todo.children_ids {
                if seen.insert(child) {
                    result.push(child.clone());
                    next.push(child);
                }
            }
        }
        queue = next;
    }

    result
}

/// `(parent, missing_child)` pairs for child ids with no entry
pub fn dangling_references(todos: &TodoCollection) -> Vec<(TodoId, TodoId)> {
    todos
        .iter()
        .flat_map(|(parent, todo)| {
            todo.children_ids
                .iter()
                .filter(move |child| !todos.contains(child))
                .map(move |child| (parent.clone(), child.clone()))
        })
        .collect()
}

/// Ancestor chain of a rendered node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath(Vec<TodoId>);

impl TreePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.0.contains(id)
    }

    /// Path for a node's children
    pub fn descend(&self, id: &TodoId) -> Self {
        let mut path = self.0.clone();
        path.push(id.clone());
        Self(path)
    }

    /// Children of `id` that are safe to render below this path.
    ///
    /// Skips unresolved ids and any id already on the path (cycles).
    pub fn renderable_children(
        &self,
        todos: &TodoCollection,
        id: &TodoId,
    ) -> Vec<(TodoId, Todo)> {
        let below = self.descend(id);
        children(todos, id)
            .into_iter()
            .filter(|(child_id, _)| !below.contains(child_id))
            .map(|(child_id, child)| (child_id.clone(), child.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(title: &str, children: &[&str]) -> Todo {
        Todo {
            title: title.to_string(),
            completed: false,
            children_ids: children.iter().map(|c| TodoId::from(*c)).collect(),
        }
    }

    fn make_collection(entries: &[(&str, &[&str])]) -> TodoCollection {
        entries
            .iter()
            .map(|(id, children)| (TodoId::from(*id), make_todo(id, children)))
            .collect()
    }

    fn ids<'a>(entries: impl IntoIterator<Item = (&'a TodoId, &'a Todo)>) -> Vec<&'a str> {
        entries.into_iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn test_top_level_hides_children() {
        let todos = make_collection(&[("A", &["B"]), ("B", &[])]);
        assert_eq!(ids(top_level(&todos)), vec!["A"]);
    }

    #[test]
    fn test_top_level_without_links() {
        let todos = make_collection(&[("A", &[]), ("B", &[])]);
        assert_eq!(ids(top_level(&todos)), vec!["A", "B"]);
    }

    #[test]
    fn test_top_level_ignores_self_reference() {
        let todos = make_collection(&[("A", &["A"])]);
        assert_eq!(ids(top_level(&todos)), vec!["A"]);
    }

    #[test]
    fn test_closed_cycle_has_no_top_level() {
        let todos = make_collection(&[("A", &["B"]), ("B", &["A"]), ("C", &[])]);
        assert_eq!(ids(top_level(&todos)), vec!["C"]);
    }

    #[test]
    fn test_orphaned_child_becomes_top_level() {
        // Parent "A" was deleted; "B" is no longer referenced.
        let todos = make_collection(&[("B", &[])]);
        assert_eq!(ids(top_level(&todos)), vec!["B"]);
    }

    #[test]
    fn test_children_skip_dangling() {
        let todos = make_collection(&[("A", &["B", "gone", "C"]), ("B", &[]), ("C", &[])]);
        assert_eq!(ids(children(&todos, &"A".into())), vec!["B", "C"]);
        assert!(children(&todos, &"missing".into()).is_empty());
    }

    #[test]
    fn test_descendants_handle_cycles() {
        let todos = make_collection(&[("A", &["B"]), ("B", &["C"]), ("C", &["A", "B"])]);
        let found = descendants(&todos, &"A".into());
        assert_eq!(found, vec![TodoId::from("B"), TodoId::from("C")]);
    }

    #[test]
    fn test_dangling_references() {
        let todos = make_collection(&[("A", &["B", "X"]), ("B", &["Y"])]);
        let dangling = dangling_references(&todos);
        assert_eq!(
            dangling,
            vec![
                (TodoId::from("A"), TodoId::from("X")),
                (TodoId::from("B"), TodoId::from("Y")),
            ]
        );
    }

    #[test]
    fn test_tree_path_stops_cycles() {
        let todos = make_collection(&[("A", &["B"]), ("B", &["A", "C"]), ("C", &[])]);
        let root = TreePath::root();
        let under_a = root.renderable_children(&todos, &"A".into());
        assert_eq!(under_a.len(), 1);
        assert_eq!(under_a[0].0.as_str(), "B");

        let path = root.descend(&"A".into());
        assert_eq!(path.depth(), 1);
        let under_b: Vec<String> = path
            .renderable_children(&todos, &"B".into())
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(under_b, vec!["C"]);
    }
}
