use graphwalk_core::{Graph, Position};
use serde::Deserialize;
use std::{fs, path::Path};

/// On-disk description of a graph, supplied by the user as JSON.
#[derive(Debug, Deserialize)]
pub struct GraphSpec {
    pub vertices: Vec<VertexSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Deserialize)]
pub struct VertexSpec {
    pub id: String,
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

pub fn load_graph(path: &Path) -> Result<Graph, String> {
    let contents = fs::read_to_string(path)
        .map_err(|error| format!("Failed to read graph file {:?}: {}", path, error))?;
    let spec: GraphSpec = serde_json::from_str(&contents)
        .map_err(|error| format!("Failed to parse graph file {:?}: {}", path, error))?;
    Ok(build_graph(spec))
}

/// Vertices land in spec order so adjacency insertion order (the traversal
/// tie-break) follows the file. Edges naming unknown vertices are dropped
/// silently, matching the engine's add_edge contract.
pub fn build_graph(spec: GraphSpec) -> Graph {
    let mut graph = Graph::new();

    for vertex in &spec.vertices {
        match (vertex.x, vertex.y) {
            (Some(x), Some(y)) => graph.add_vertex_at(&vertex.id, Position::new(x, y)),
            _ => graph.add_vertex(&vertex.id),
        }
    }

    for edge in &spec.edges {
        graph.add_edge(&edge.from, &edge.to, edge.weight);
    }

    graph
}

pub fn find_vertex(graph: &Graph, label: &str) -> Result<String, String> {
    if graph.contains(label) {
        Ok(label.to_owned())
    } else {
        Err(format!("Vertex \"{}\" is not in the graph", label))
    }
}
