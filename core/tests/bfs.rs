use graphwalk_core::{
    Graph, StepKind, TraversalHooks, bfs_traverse, bfs_traverse_with_hooks, dfs_traverse,
};
use rustc_hash::FxHashSet;

// Same fixture as the DFS tests: five vertices A-E, unit weights.
// A:[B,C]  B:[A,D,C]  C:[A,E,B]  D:[B,E]  E:[C,D]
fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["A", "B", "C", "D", "E"] {
        graph.add_vertex(id);
    }
    for (u, v) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "E"),
        ("D", "E"),
        ("B", "C"),
    ] {
        graph.add_edge(u, v, 1.0);
    }
    graph
}

#[test]
fn test_bfs_visits_in_level_order() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "A");

    assert_eq!(result.order, vec!["A", "B", "C", "D", "E"]);
}

#[test]
fn test_bfs_levels_match_shortest_hop_counts() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "A");

    assert_eq!(result.levels["A"], 0);
    assert_eq!(result.levels["B"], 1);
    assert_eq!(result.levels["C"], 1);
    assert_eq!(result.levels["D"], 2);
    assert_eq!(result.levels["E"], 2);
}

#[test]
fn test_bfs_visit_levels_are_non_decreasing() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "A");

    let visit_levels: Vec<usize> = result
        .steps
        .iter()
        .filter(|step| step.kind == StepKind::Visit)
        .map(|step| step.level.unwrap())
        .collect();

    assert!(visit_levels.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_bfs_has_no_duplicate_visits() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "A");

    let unique: FxHashSet<&String> = result.order.iter().collect();
    assert_eq!(unique.len(), result.order.len());
    assert_eq!(result.order.len(), result.visited.len());
}

#[test]
fn test_bfs_and_dfs_reach_the_same_set() {
    let mut graph = sample_graph();
    graph.add_vertex("F");
    graph.add_vertex("G");
    graph.add_edge("F", "G", 1.0);

    let bfs = bfs_traverse(&mut graph, "A");
    graph.reset();
    let dfs = dfs_traverse(&mut graph, "A");

    assert_eq!(bfs.visited, dfs.visited);
    assert_ne!(bfs.order, dfs.order);
}

#[test]
fn test_bfs_unknown_start_yields_empty_result() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "Z");

    assert!(result.order.is_empty());
    assert!(result.steps.is_empty());
    assert!(result.visited.is_empty());
    assert!(result.levels.is_empty());
}

#[test]
fn test_bfs_frontier_snapshots_carry_levels() {
    let mut graph = sample_graph();
    let result = bfs_traverse(&mut graph, "A");

    // Step 0: visit A with an empty queue (A was just dequeued).
    let visit_a = &result.steps[0];
    assert_eq!(visit_a.kind, StepKind::Visit);
    assert_eq!(visit_a.level, Some(0));
    assert!(visit_a.frontier.is_empty());

    // Step 1: discover B, queue holds only B at level 1.
    let discover_b = &result.steps[1];
    assert_eq!(discover_b.kind, StepKind::Discover);
    assert_eq!(discover_b.vertex, "B");
    assert_eq!(discover_b.frontier.len(), 1);
    assert_eq!(discover_b.frontier[0].vertex, "B");
    assert_eq!(discover_b.frontier[0].level, Some(1));

    // Step 2: discover C, queue holds B then C.
    let discover_c = &result.steps[2];
    assert_eq!(discover_c.vertex, "C");
    let snapshot: Vec<&str> = discover_c
        .frontier
        .iter()
        .map(|entry| entry.vertex.as_str())
        .collect();
    assert_eq!(snapshot, vec!["B", "C"]);
}

#[test]
fn test_bfs_records_predecessors_on_vertex_state() {
    let mut graph = sample_graph();
    bfs_traverse(&mut graph, "A");

    assert_eq!(graph.vertex("A").unwrap().predecessor, None);
    assert_eq!(graph.vertex("B").unwrap().predecessor, Some("A".to_owned()));
    assert_eq!(graph.vertex("C").unwrap().predecessor, Some("A".to_owned()));
    assert_eq!(graph.vertex("D").unwrap().predecessor, Some("B".to_owned()));
    assert_eq!(graph.vertex("E").unwrap().predecessor, Some("C".to_owned()));
}

#[test]
fn test_bfs_requires_explicit_reset_between_runs() {
    let mut graph = sample_graph();
    let first = bfs_traverse(&mut graph, "A");

    let stale = bfs_traverse(&mut graph, "A");
    assert!(stale.order.is_empty());
    assert!(stale.steps.is_empty());
    assert!(stale.levels.is_empty());

    graph.reset();
    let fresh = bfs_traverse(&mut graph, "A");
    assert_eq!(fresh.order, first.order);
    assert_eq!(fresh.levels, first.levels);
}

#[test]
fn test_bfs_and_dfs_share_the_stale_start_policy() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", 1.0);

    bfs_traverse(&mut graph, "A");
    let stale_bfs = bfs_traverse(&mut graph, "A");

    graph.reset();
    dfs_traverse(&mut graph, "A");
    let stale_dfs = dfs_traverse(&mut graph, "A");

    // A visited start yields an empty result from both traversals
    assert_eq!(stale_bfs.order.len(), stale_dfs.order.len());
    assert!(stale_bfs.order.is_empty());
    assert!(stale_dfs.order.is_empty());
}

#[test]
fn test_bfs_hooks_fire_in_step_order() {
    let mut graph = sample_graph();
    let mut visited_log = Vec::new();
    let mut step_log = Vec::new();

    let result = {
        let mut hooks = TraversalHooks::new()
            .with_on_visit(|vertex| visited_log.push(vertex.to_owned()))
            .with_on_step(|step| step_log.push(step.vertex.clone()));
        bfs_traverse_with_hooks(&mut graph, "A", &mut hooks)
    };

    assert_eq!(visited_log, result.order);
    let recorded: Vec<String> = result.steps.iter().map(|step| step.vertex.clone()).collect();
    assert_eq!(step_log, recorded);
}

#[test]
fn test_bfs_self_loop_does_not_reenqueue() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_edge("A", "A", 1.0);

    // Self-loop must not cause re-enqueueing
    let result = bfs_traverse(&mut graph, "A");
    assert_eq!(result.order, vec!["A"]);
}
