//! Tree Construction
//!
//! Builds the rendered task hierarchy from the flat list the store returns.

use crate::models::{Task, TaskTreeNode};
use std::collections::{HashMap, HashSet};

/// Ordered forest of root tasks plus the ids that could not be placed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    pub roots: Vec<TaskTreeNode>,
    /// Tasks whose ancestor chain never reaches a root: dangling parent
    /// references, self-parents, and parent cycles. Ascending order.
    pub unresolved: Vec<u32>,
}

/// Build a nested forest from a flat task list.
///
/// Tasks are grouped by `parent_task_id`, each group sorted by ascending id,
/// and the forest is materialized recursively from the root group (`None`).
/// Construction never fails: tasks that cannot be reached from a root end up
/// in `unresolved` instead of the tree.
pub fn build_forest(tasks: &[Task]) -> Forest {
    // Build parent -> children map
    let mut children_map: HashMap<Option<u32>, Vec<&Task>> = HashMap::new();
    for task in tasks {
        children_map.entry(task.parent_task_id).or_default().push(task);
    }

    // Sort siblings by ascending id
    for group in children_map.values_mut() {
        group.sort_by_key(|t| t.id);
    }

    // Recursive helper
    fn collect(
        parent_id: Option<u32>,
        children_map: &HashMap<Option<u32>, Vec<&Task>>,
        placed: &mut HashSet<u32>,
    ) -> Vec<TaskTreeNode> {
        let mut nodes = Vec::new();
        if let Some(group) = children_map.get(&parent_id) {
            for task in group {
                // Ids are expected to be unique; a repeated id keeps its
                // first placement
                if !placed.insert(task.id) {
                    continue;
                }
                nodes.push(TaskTreeNode {
                    task: (*task).clone(),
                    children: collect(Some(task.id), children_map, placed),
                });
            }
        }
        nodes
    }

    let mut placed = HashSet::new();
    let roots = collect(None, &children_map, &mut placed);

    // Everything the root-down walk never reached: dangling parents,
    // self-parents, cycle members
    let mut unresolved: Vec<u32> = tasks
        .iter()
        .map(|t| t.id)
        .filter(|id| !placed.contains(id))
        .collect();
    unresolved.sort_unstable();

    Forest { roots, unresolved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: u32, parent_task_id: Option<u32>) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            estimated_time: None,
            parent_task_id,
            parent_task: None,
            completed: false,
        }
    }

    /// (id, parent id) pairs in pre-order
    fn flatten(nodes: &[TaskTreeNode], parent: Option<u32>, out: &mut Vec<(u32, Option<u32>)>) {
        for node in nodes {
            out.push((node.task.id, parent));
            flatten(&node.children, Some(node.task.id), out);
        }
    }

    #[test]
    fn builds_nested_forest() {
        let tasks = vec![
            make_task(1, None),
            make_task(2, Some(1)),
            make_task(3, None),
            make_task(4, Some(3)),
        ];

        let forest = build_forest(&tasks);

        assert!(forest.unresolved.is_empty());
        assert_eq!(forest.roots.len(), 2);
        assert_eq!(forest.roots[0].task.id, 1);
        assert_eq!(forest.roots[1].task.id, 3);
        assert_eq!(forest.roots[0].children.len(), 1);
        assert_eq!(forest.roots[0].children[0].task.id, 2);
        assert_eq!(forest.roots[1].children.len(), 1);
        assert_eq!(forest.roots[1].children[0].task.id, 4);
    }

    #[test]
    fn siblings_sort_by_ascending_id() {
        // Deliberately unsorted input
        let tasks = vec![
            make_task(7, Some(1)),
            make_task(3, Some(1)),
            make_task(1, None),
            make_task(5, Some(1)),
        ];

        let forest = build_forest(&tasks);

        let child_ids: Vec<u32> = forest.roots[0]
            .children
            .iter()
            .map(|n| n.task.id)
            .collect();
        assert_eq!(child_ids, vec![3, 5, 7]);
    }

    #[test]
    fn output_is_permutation_with_correct_parents() {
        let tasks = vec![
            make_task(2, None),
            make_task(6, Some(2)),
            make_task(4, Some(6)),
            make_task(9, None),
            make_task(5, Some(9)),
        ];

        let forest = build_forest(&tasks);
        let mut flat = Vec::new();
        flatten(&forest.roots, None, &mut flat);

        assert_eq!(flat.len(), tasks.len());
        for task in &tasks {
            let entry = flat.iter().find(|(id, _)| *id == task.id).unwrap();
            assert_eq!(entry.1, task.parent_task_id);
        }
    }

    #[test]
    fn building_twice_is_idempotent() {
        let tasks = vec![
            make_task(1, None),
            make_task(2, Some(1)),
            make_task(3, Some(2)),
        ];

        assert_eq!(build_forest(&tasks), build_forest(&tasks));
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        let forest = build_forest(&[]);
        assert!(forest.roots.is_empty());
        assert!(forest.unresolved.is_empty());
    }

    #[test]
    fn dangling_parent_is_unresolved() {
        let tasks = vec![make_task(1, Some(99))];

        let forest = build_forest(&tasks);

        assert!(forest.roots.is_empty());
        assert_eq!(forest.unresolved, vec![1]);
    }

    #[test]
    fn descendants_of_dangling_parent_are_unresolved_too() {
        let tasks = vec![make_task(1, Some(99)), make_task(2, Some(1))];

        let forest = build_forest(&tasks);

        assert!(forest.roots.is_empty());
        assert_eq!(forest.unresolved, vec![1, 2]);
    }

    #[test]
    fn self_parent_is_unresolved() {
        let tasks = vec![make_task(1, None), make_task(2, Some(2))];

        let forest = build_forest(&tasks);

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].task.id, 1);
        assert_eq!(forest.unresolved, vec![2]);
    }

    #[test]
    fn parent_cycle_is_rejected_gracefully() {
        // 1 -> 2 -> 1, with an honest root alongside
        let tasks = vec![make_task(1, Some(2)), make_task(2, Some(1)), make_task(3, None)];

        let forest = build_forest(&tasks);

        assert_eq!(forest.roots.len(), 1);
        assert_eq!(forest.roots[0].task.id, 3);
        assert_eq!(forest.unresolved, vec![1, 2]);
    }
}
