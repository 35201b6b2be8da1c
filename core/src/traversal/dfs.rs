use super::TraversalHooks;
use crate::graph::Graph;
use crate::step::{FrontierEntry, Step};
use rustc_hash::FxHashSet;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DfsResult {
    pub order: Vec<String>,
    pub steps: Vec<Step>,
    pub visited: FxHashSet<String>,
}

impl DfsResult {
    fn empty() -> Self {
        Self {
            order: Vec::new(),
            steps: Vec::new(),
            visited: FxHashSet::default(),
        }
    }
}

struct StackFrame {
    vertex: String,
    path: Vec<String>,
}

pub fn dfs_traverse(graph: &mut Graph, start: &str) -> DfsResult {
    dfs_traverse_with_hooks(graph, start, &mut TraversalHooks::default())
}

/// Depth-first traversal with an explicit stack.
///
/// A vertex may sit on the stack once per discovering edge; only the first
/// pop where it is still unvisited gets processed, later pops are skipped
/// without recording anything. Neighbors are pushed in reverse adjacency
/// order so that pop order follows the original adjacency order. Unknown
/// start yields an empty result.
pub fn dfs_traverse_with_hooks(
    graph: &mut Graph,
    start: &str,
    hooks: &mut TraversalHooks,
) -> DfsResult {
    if !graph.contains(start) {
        return DfsResult::empty();
    }

    let mut order = Vec::new();
    let mut steps = Vec::new();
    let mut visited = FxHashSet::default();

    let mut stack = vec![StackFrame {
        vertex: start.to_owned(),
        path: vec![start.to_owned()],
    }];

    while let Some(frame) = stack.pop() {
        if graph.is_visited(&frame.vertex) {
            continue;
        }

        graph.mark_visited(&frame.vertex);
        if frame.path.len() >= 2 {
            let parent = &frame.path[frame.path.len() - 2];
            graph.set_predecessor(&frame.vertex, parent);
        }

        visited.insert(frame.vertex.clone());
        order.push(frame.vertex.clone());

        // Snapshot taken before this vertex's neighbors are pushed.
        let step = Step::visit(
            &frame.vertex,
            format!("Visiting \"{}\"", frame.vertex),
            stack_snapshot(&stack),
        );
        hooks.fire_visit(&frame.vertex);
        hooks.fire_step(&step);
        steps.push(step);

        let unvisited_neighbors: Vec<String> = graph
            .neighbors(&frame.vertex)
            .iter()
            .filter(|(neighbor, _)| !graph.is_visited(neighbor))
            .map(|(neighbor, _)| neighbor.clone())
            .collect();

        for neighbor in unvisited_neighbors.iter().rev() {
            let mut path = frame.path.clone();
            path.push(neighbor.clone());
            stack.push(StackFrame {
                vertex: neighbor.clone(),
                path,
            });

            let step = Step::discover(
                neighbor,
                format!("Discovered \"{}\" from \"{}\"", neighbor, frame.vertex),
                stack_snapshot(&stack),
            );
            hooks.fire_step(&step);
            steps.push(step);
        }
    }

    DfsResult {
        order,
        steps,
        visited,
    }
}

fn stack_snapshot(stack: &[StackFrame]) -> Vec<FrontierEntry> {
    stack
        .iter()
        .map(|frame| FrontierEntry::plain(&frame.vertex))
        .collect()
}
