pub mod bfs;
pub mod dfs;
pub mod dijkstra;

// Re-export the public functions
pub use bfs::{BfsResult, bfs_traverse, bfs_traverse_with_hooks};
pub use dfs::{DfsResult, dfs_traverse, dfs_traverse_with_hooks};
pub use dijkstra::{DijkstraResult, dijkstra_shortest_paths, dijkstra_shortest_paths_with_hooks};

use crate::step::Step;

/// Optional callbacks a consumer can attach to a traversal run.
///
/// `on_visit` fires once per processed vertex (for driving highlights),
/// `on_step` fires for every recorded step (for driving a step log). Both
/// are invoked synchronously, in step order, before the run returns.
#[derive(Default)]
pub struct TraversalHooks<'a> {
    on_visit: Option<Box<dyn FnMut(&str) + 'a>>,
    on_step: Option<Box<dyn FnMut(&Step) + 'a>>,
}

impl<'a> TraversalHooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_visit(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_visit = Some(Box::new(callback));
        self
    }

    pub fn with_on_step(mut self, callback: impl FnMut(&Step) + 'a) -> Self {
        self.on_step = Some(Box::new(callback));
        self
    }

    pub(crate) fn fire_visit(&mut self, vertex: &str) {
        if let Some(callback) = &mut self.on_visit {
            callback(vertex);
        }
    }

    pub(crate) fn fire_step(&mut self, step: &Step) {
        if let Some(callback) = &mut self.on_step {
            callback(step);
        }
    }
}
