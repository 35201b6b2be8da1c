use super::TraversalHooks;
use crate::graph::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DijkstraResult {
    pub distances: FxHashMap<String, f32>,
    pub predecessors: FxHashMap<String, Option<String>>,
    pub visited: FxHashSet<String>,
}

impl DijkstraResult {
    fn empty() -> Self {
        Self {
            distances: FxHashMap::default(),
            predecessors: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    /// Walks the predecessor chain back from `target`. `None` when the
    /// target was never reached (or never existed).
    pub fn path_to(&self, start: &str, target: &str) -> Option<Vec<String>> {
        if !self.distances.contains_key(target) || self.distances[target].is_infinite() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.to_owned();

        while current != start {
            let parent = self.predecessors.get(&current)?.clone()?;
            path.push(current);
            current = parent;
        }

        path.push(start.to_owned());
        path.reverse();
        Some(path)
    }
}

struct WorklistEntry {
    vertex: String,
    distance: f32,
}

pub fn dijkstra_shortest_paths(graph: &mut Graph, start: &str, end: Option<&str>) -> DijkstraResult {
    dijkstra_shortest_paths_with_hooks(graph, start, end, &mut TraversalHooks::default())
}

/// Single-source shortest paths over non-negative edge weights.
///
/// The worklist is a plain vector scanned linearly for the minimum on each
/// iteration; stale duplicate entries are left in place when a shorter
/// distance is found and skipped on pop. O(V^2), observably identical to a
/// heap-based version. When `end` is given the search finalizes it and
/// stops early; an unreachable `end` just leaves its distance infinite.
/// Dijkstra records no steps, only the `on_visit` hook fires.
pub fn dijkstra_shortest_paths_with_hooks(
    graph: &mut Graph,
    start: &str,
    end: Option<&str>,
    hooks: &mut TraversalHooks,
) -> DijkstraResult {
    if !graph.contains(start) {
        return DijkstraResult::empty();
    }

    let mut distances = FxHashMap::default();
    let mut predecessors = FxHashMap::default();
    let mut visited = FxHashSet::default();

    for id in graph.vertex_ids() {
        distances.insert(id.clone(), f32::INFINITY);
        predecessors.insert(id.clone(), None);
    }
    distances.insert(start.to_owned(), 0.0);
    graph.set_distance(start, 0.0);

    let mut worklist = vec![WorklistEntry {
        vertex: start.to_owned(),
        distance: 0.0,
    }];

    while !worklist.is_empty() {
        let current = pop_minimum(&mut worklist);

        // Stale entry: already finalized with a shorter distance.
        if visited.contains(&current.vertex) {
            continue;
        }
        visited.insert(current.vertex.clone());
        graph.mark_visited(&current.vertex);
        hooks.fire_visit(&current.vertex);

        if end == Some(current.vertex.as_str()) {
            break;
        }

        let neighbors: Vec<(String, f32)> = graph.neighbors(&current.vertex).to_vec();
        for (neighbor, weight) in neighbors {
            let candidate = current.distance + weight;
            let recorded = distances
                .get(&neighbor)
                .copied()
                .unwrap_or(f32::INFINITY);

            if candidate < recorded {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), Some(current.vertex.clone()));
                graph.set_distance(&neighbor, candidate);
                graph.set_predecessor(&neighbor, &current.vertex);
                worklist.push(WorklistEntry {
                    vertex: neighbor,
                    distance: candidate,
                });
            }
        }
    }

    DijkstraResult {
        distances,
        predecessors,
        visited,
    }
}

// Linear scan keeps the tie-break stable by insertion order. Only called
// with a non-empty worklist.
fn pop_minimum(worklist: &mut Vec<WorklistEntry>) -> WorklistEntry {
    let mut min_index = 0;
    for (index, entry) in worklist.iter().enumerate().skip(1) {
        if entry.distance < worklist[min_index].distance {
            min_index = index;
        }
    }
    worklist.remove(min_index)
}
