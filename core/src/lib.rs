pub mod algorithm;
pub mod graph;
pub mod step;
pub mod traversal;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use graph::{Graph, Position, VertexState};
pub use step::{FrontierEntry, Step, StepKind};
pub use traversal::{
    BfsResult, DfsResult, DijkstraResult, TraversalHooks, bfs_traverse, bfs_traverse_with_hooks,
    dfs_traverse, dfs_traverse_with_hooks, dijkstra_shortest_paths,
    dijkstra_shortest_paths_with_hooks,
};
