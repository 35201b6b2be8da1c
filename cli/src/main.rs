use clap::Parser;
use graphwalk::*;
use graphwalk_core::{Algorithm, Graph, bfs_traverse, dfs_traverse, dijkstra_shortest_paths};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error_message) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error_message);
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), String> {
    let mut graph = load_graph(&args.graph)?;
    let start = find_vertex(&graph, &args.start)?;
    let end = match &args.end {
        Some(label) => Some(find_vertex(&graph, label)?),
        None => None,
    };

    let algorithm = Algorithm::from(args.algorithm.as_str());

    if args.verbose && !args.json {
        display_run_info(algorithm, &start, end.as_deref(), colors);
    }

    match algorithm {
        Algorithm::Dfs => run_dfs(&mut graph, &start, args, colors),
        Algorithm::Bfs => run_bfs(&mut graph, &start, args, colors),
        Algorithm::Dijkstra => run_dijkstra(&mut graph, &start, end.as_deref(), args, colors),
    }
}

fn run_dfs(graph: &mut Graph, start: &str, args: &Args, colors: &ColorScheme) -> Result<(), String> {
    let result = dfs_traverse(graph, start);
    if args.json {
        print_json(&result)
    } else {
        display_traversal_results(&result.order, &result.steps, args, colors);
        Ok(())
    }
}

fn run_bfs(graph: &mut Graph, start: &str, args: &Args, colors: &ColorScheme) -> Result<(), String> {
    let result = bfs_traverse(graph, start);
    if args.json {
        print_json(&result)
    } else {
        display_traversal_results(&result.order, &result.steps, args, colors);
        Ok(())
    }
}

fn run_dijkstra(
    graph: &mut Graph,
    start: &str,
    end: Option<&str>,
    args: &Args,
    colors: &ColorScheme,
) -> Result<(), String> {
    let result = dijkstra_shortest_paths(graph, start, end);
    if args.json {
        print_json(&result)
    } else {
        display_dijkstra_results(&result, start, end, args, colors);
        Ok(())
    }
}

fn print_json<T: serde::Serialize>(result: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|error| format!("Failed to serialize results: {}", error))?;
    println!("{}", json);
    Ok(())
}
