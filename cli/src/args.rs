use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(about = "Run a graph traversal and print its step-by-step trace")]
pub struct Args {
    /// Path to a JSON graph description
    pub graph: PathBuf,

    /// Start vertex label
    pub start: String,

    /// Traversal algorithm: dfs, bfs, or dijkstra
    #[arg(short, long, default_value = "dfs")]
    pub algorithm: String,

    /// Target vertex label (Dijkstra stops early once it is finalized)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Print every recorded step, not just the visit order
    #[arg(short, long)]
    pub steps: bool,

    /// Emit results as JSON instead of formatted text
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show run info before results
    #[arg(short, long)]
    pub verbose: bool,
}
