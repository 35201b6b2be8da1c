pub mod args;
pub mod colors;
pub mod display;
pub mod parsing;

// Re-export commonly used items
pub use args::Args;
pub use colors::ColorScheme;
pub use display::{display_dijkstra_results, display_run_info, display_traversal_results};
pub use parsing::{GraphSpec, build_graph, find_vertex, load_graph};
