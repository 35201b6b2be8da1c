use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Layout coordinates for a vertex, used by external renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-vertex state mutated by traversals and read back by consumers.
///
/// Rendering concerns (color, highlight) live outside the engine and are
/// derived from the Step stream, not stored here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexState {
    pub position: Position,
    pub visited: bool,
    pub distance: f32,
    pub predecessor: Option<String>,
}

impl VertexState {
    fn new(position: Position) -> Self {
        Self {
            position,
            visited: false,
            distance: f32::INFINITY,
            predecessor: None,
        }
    }

    fn clear(&mut self) {
        self.visited = false;
        self.distance = f32::INFINITY;
        self.predecessor = None;
    }
}

/// A mutable weighted undirected graph keyed by string labels.
///
/// Neighbor lists keep insertion order, which determines traversal
/// tie-breaks. Adjacency is fixed after construction; traversals only touch
/// the per-vertex `visited`/`distance`/`predecessor` fields, and `reset`
/// restores those to their defaults between runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: FxHashMap<String, Vec<(String, f32)>>,
    vertices: FxHashMap<String, VertexState>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex at a pseudo-random position. Idempotent: an existing
    /// vertex keeps all of its state, including its position.
    pub fn add_vertex(&mut self, id: &str) {
        self.add_vertex_at(id, random_position());
    }

    /// Adds a vertex at the given position. Idempotent like `add_vertex`.
    pub fn add_vertex_at(&mut self, id: &str, position: Position) {
        if self.vertices.contains_key(id) {
            return;
        }
        self.adjacency.insert(id.to_owned(), Vec::new());
        self.vertices.insert(id.to_owned(), VertexState::new(position));
    }

    /// Adds an undirected edge: `v` is appended to `u`'s neighbor list and
    /// `u` to `v`'s, both with the same weight. Silent no-op when either
    /// endpoint was never added. Self-loops and parallel edges are kept as
    /// given, not deduplicated.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f32) {
        if !self.vertices.contains_key(u) || !self.vertices.contains_key(v) {
            return;
        }
        if let Some(list) = self.adjacency.get_mut(u) {
            list.push((v.to_owned(), weight));
        }
        if let Some(list) = self.adjacency.get_mut(v) {
            list.push((u.to_owned(), weight));
        }
    }

    /// Restores every vertex to unvisited, infinite distance, no
    /// predecessor. Traversals do not reset implicitly; callers must invoke
    /// this between runs on the same graph instance.
    pub fn reset(&mut self) {
        for state in self.vertices.values_mut() {
            state.clear();
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Neighbor list in insertion order; empty for unknown vertices.
    pub fn neighbors(&self, id: &str) -> &[(String, f32)] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex(&self, id: &str) -> Option<&VertexState> {
        self.vertices.get(id)
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = &String> {
        self.vertices.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn is_visited(&self, id: &str) -> bool {
        self.vertices.get(id).is_some_and(|state| state.visited)
    }

    pub(crate) fn mark_visited(&mut self, id: &str) {
        if let Some(state) = self.vertices.get_mut(id) {
            state.visited = true;
        }
    }

    pub(crate) fn set_distance(&mut self, id: &str, distance: f32) {
        if let Some(state) = self.vertices.get_mut(id) {
            state.distance = distance;
        }
    }

    pub(crate) fn set_predecessor(&mut self, id: &str, predecessor: &str) {
        if let Some(state) = self.vertices.get_mut(id) {
            state.predecessor = Some(predecessor.to_owned());
        }
    }
}

// Default canvas extent used when the caller supplies no position.
const LAYOUT_WIDTH: f32 = 800.0;
const LAYOUT_HEIGHT: f32 = 600.0;

fn random_position() -> Position {
    let mut rng = rand::rng();
    Position {
        x: rng.random_range(0.0..LAYOUT_WIDTH),
        y: rng.random_range(0.0..LAYOUT_HEIGHT),
    }
}
