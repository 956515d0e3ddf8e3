//! Reducer properties over collections reachable through the public actions.

use proptest::prelude::*;
use todo_store::{
    decode, encode, reduce, tree, DeletePolicy, Todo, TodoAction, TodoCollection, TodoId,
};

const IDS: &[&str] = &["a", "b", "c", "d", "e", "f"];

fn id_strategy() -> impl Strategy<Value = TodoId> {
    prop::sample::select(IDS).prop_map(TodoId::from)
}

fn action_strategy() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        (id_strategy(), "[a-z ]{0,8}").prop_map(|(id, title)| TodoAction::AddTodo { id, title }),
        id_strategy().prop_map(|id| TodoAction::DeleteTodo { id }),
        id_strategy().prop_map(|id| TodoAction::ToggleComplete { id }),
        (id_strategy(), "[a-z ]{0,8}")
            .prop_map(|(id, new_title)| TodoAction::EditTitle { id, new_title }),
        (id_strategy(), id_strategy(), "[a-z ]{0,8}").prop_map(
            |(parent_id, child_id, child_title)| TodoAction::AddChildTodo {
                parent_id,
                child_id,
                child_title,
            }
        ),
    ]
}

fn collection_strategy() -> impl Strategy<Value = TodoCollection> {
    prop::collection::vec(action_strategy(), 0..24).prop_map(|actions| {
        actions.iter().fold(TodoCollection::new(), |state, action| {
            reduce(&state, action, DeletePolicy::Orphan).unwrap_or(state)
        })
    })
}

fn without(todos: &TodoCollection, id: &TodoId) -> TodoCollection {
    todos.iter().filter(|(k, _)| *k != id).map(|(k, v)| (k.clone(), v.clone())).collect()
}

proptest! {
    #[test]
    fn add_todo_inserts_exactly_one_entry(todos in collection_strategy(), title in "[a-z]{0,8}") {
        let id = TodoId::generate();
        let action = TodoAction::AddTodo { id: id.clone(), title: title.clone() };
        let next = reduce(&todos, &action, DeletePolicy::Orphan).unwrap();

        prop_assert_eq!(next.len(), todos.len() + 1);
        prop_assert_eq!(next.get(&id), Some(&Todo::new(title)));
        prop_assert_eq!(without(&next, &id), todos);
    }

    #[test]
    fn toggle_is_an_involution(todos in collection_strategy(), id in id_strategy()) {
        prop_assume!(todos.contains(&id));
        let action = TodoAction::ToggleComplete { id: id.clone() };
        let once = reduce(&todos, &action, DeletePolicy::Orphan).unwrap();
        let twice = reduce(&once, &action, DeletePolicy::Orphan).unwrap();

        prop_assert_ne!(once.get(&id).map(|t| t.completed), todos.get(&id).map(|t| t.completed));
        prop_assert_eq!(twice, todos);
    }

    #[test]
    fn delete_removes_only_the_target(todos in collection_strategy(), id in id_strategy()) {
        let action = TodoAction::DeleteTodo { id: id.clone() };
        let next = reduce(&todos, &action, DeletePolicy::Orphan).unwrap();

        prop_assert!(!next.contains(&id));
        prop_assert_eq!(next, without(&todos, &id));
    }

    #[test]
    fn add_child_appends_one_occurrence(
        todos in collection_strategy(),
        parent in id_strategy(),
        title in "[a-z]{0,8}",
    ) {
        prop_assume!(todos.contains(&parent));
        let child = TodoId::generate();
        let count = |c: &TodoCollection| {
            c.get(&parent).map_or(0, |t| t.children_ids.iter().filter(|id| **id == child).count())
        };

        let action = TodoAction::AddChildTodo {
            parent_id: parent.clone(),
            child_id: child.clone(),
            child_title: title.clone(),
        };
        let next = reduce(&todos, &action, DeletePolicy::Orphan).unwrap();

        prop_assert_eq!(count(&next), count(&todos) + 1);
        prop_assert_eq!(next.get(&child).map(|t| t.title.as_str()), Some(title.as_str()));
    }

    #[test]
    fn snapshot_round_trips(todos in collection_strategy()) {
        let json = encode(&todos).unwrap();
        prop_assert_eq!(decode(Some(json.as_str())), todos);
    }

    #[test]
    fn cascade_leaves_no_dangling_links_to_removed(
        todos in collection_strategy(),
        id in id_strategy(),
    ) {
        prop_assume!(todos.contains(&id));
        let removed = tree::descendants(&todos, &id);
        let action = TodoAction::DeleteTodo { id: id.clone() };
        let next = reduce(&todos, &action, DeletePolicy::Cascade).unwrap();

        prop_assert!(!next.contains(&id));
        for gone in &removed {
            prop_assert!(!next.contains(gone));
        }
        for (_, todo) in &next {
            prop_assert!(!todo.children_ids.contains(&id));
            prop_assert!(removed.iter().all(|gone| !todo.children_ids.contains(gone)));
        }
    }
}
