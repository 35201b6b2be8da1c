use super::TraversalHooks;
use crate::graph::Graph;
use crate::step::{FrontierEntry, Step};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize)]
pub struct BfsResult {
    pub order: Vec<String>,
    pub steps: Vec<Step>,
    pub visited: FxHashSet<String>,
    pub levels: FxHashMap<String, usize>,
}

impl BfsResult {
    fn empty() -> Self {
        Self {
            order: Vec::new(),
            steps: Vec::new(),
            visited: FxHashSet::default(),
            levels: FxHashMap::default(),
        }
    }
}

struct QueueEntry {
    vertex: String,
    level: usize,
}

pub fn bfs_traverse(graph: &mut Graph, start: &str) -> BfsResult {
    bfs_traverse_with_hooks(graph, start, &mut TraversalHooks::default())
}

/// Breadth-first traversal with level tracking.
///
/// Vertices are marked visited at discovery time, not at dequeue time, so
/// each vertex is enqueued at most once and levels come out as predecessor
/// level + 1 with the start at level 0. Unknown start yields an empty
/// result, as does a start left visited by a previous run (same stale-state
/// policy as DFS, which skips a visited start at pop time).
pub fn bfs_traverse_with_hooks(
    graph: &mut Graph,
    start: &str,
    hooks: &mut TraversalHooks,
) -> BfsResult {
    if !graph.contains(start) || graph.is_visited(start) {
        return BfsResult::empty();
    }

    let mut order = Vec::new();
    let mut steps = Vec::new();
    let mut visited = FxHashSet::default();
    let mut levels = FxHashMap::default();

    let mut queue = VecDeque::new();
    graph.mark_visited(start);
    visited.insert(start.to_owned());
    levels.insert(start.to_owned(), 0);
    queue.push_back(QueueEntry {
        vertex: start.to_owned(),
        level: 0,
    });

    while let Some(entry) = queue.pop_front() {
        order.push(entry.vertex.clone());

        let step = Step::visit(
            &entry.vertex,
            format!("Visiting \"{}\" (level {})", entry.vertex, entry.level),
            queue_snapshot(&queue),
        )
        .with_level(entry.level);
        hooks.fire_visit(&entry.vertex);
        hooks.fire_step(&step);
        steps.push(step);

        let neighbors: Vec<String> = graph
            .neighbors(&entry.vertex)
            .iter()
            .map(|(neighbor, _)| neighbor.clone())
            .collect();

        for neighbor in neighbors {
            if graph.is_visited(&neighbor) {
                continue;
            }

            let level = entry.level + 1;
            graph.mark_visited(&neighbor);
            graph.set_predecessor(&neighbor, &entry.vertex);
            visited.insert(neighbor.clone());
            levels.insert(neighbor.clone(), level);
            queue.push_back(QueueEntry {
                vertex: neighbor.clone(),
                level,
            });

            let step = Step::discover(
                &neighbor,
                format!(
                    "Discovered \"{}\" from \"{}\" (level {})",
                    neighbor, entry.vertex, level
                ),
                queue_snapshot(&queue),
            )
            .with_level(level);
            hooks.fire_step(&step);
            steps.push(step);
        }
    }

    BfsResult {
        order,
        steps,
        visited,
        levels,
    }
}

fn queue_snapshot(queue: &VecDeque<QueueEntry>) -> Vec<FrontierEntry> {
    queue
        .iter()
        .map(|entry| FrontierEntry::leveled(&entry.vertex, entry.level))
        .collect()
}
