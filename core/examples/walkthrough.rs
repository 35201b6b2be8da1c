use graphwalk_core::{Graph, bfs_traverse, dijkstra_shortest_paths};

fn main() {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(id);
    }
    for (u, v, w) in [
        ("A", "B", 5.0),
        ("B", "D", 1.0),
        ("A", "C", 1.0),
        ("C", "E", 1.0),
        ("E", "D", 1.0),
    ] {
        graph.add_edge(u, v, w);
    }

    let bfs = bfs_traverse(&mut graph, "A");
    println!("BFS visit order: {}", bfs.order.join(" -> "));
    for (index, step) in bfs.steps.iter().enumerate() {
        println!("{:>3}. {}", index + 1, step.message);
    }

    graph.reset();

    let dijkstra = dijkstra_shortest_paths(&mut graph, "A", Some("D"));
    println!("\nShortest distance A -> D: {}", dijkstra.distances["D"]);
    if let Some(path) = dijkstra.path_to("A", "D") {
        println!("Path: {}", path.join(" -> "));
    }
}
