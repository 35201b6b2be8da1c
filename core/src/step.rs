use serde::Serialize;

/// What a traversal event records: a neighbor entering the frontier, or a
/// vertex being taken off the frontier and processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Discover,
    Visit,
}

/// One entry of a frontier snapshot. BFS annotates entries with their
/// discovery level; DFS leaves `level` unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierEntry {
    pub vertex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl FrontierEntry {
    pub fn plain(vertex: &str) -> Self {
        Self {
            vertex: vertex.to_owned(),
            level: None,
        }
    }

    pub fn leveled(vertex: &str, level: usize) -> Self {
        Self {
            vertex: vertex.to_owned(),
            level: Some(level),
        }
    }
}

/// An immutable record of one discrete traversal event.
///
/// The ordered sequence of steps from one run is the complete audit trail a
/// renderer needs to replay the traversal: each step carries the frontier
/// (stack or queue) contents at the instant it was recorded. The `message`
/// is display text only, never semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub vertex: String,
    pub message: String,
    pub frontier: Vec<FrontierEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
}

impl Step {
    pub fn discover(vertex: &str, message: String, frontier: Vec<FrontierEntry>) -> Self {
        Self {
            kind: StepKind::Discover,
            vertex: vertex.to_owned(),
            message,
            frontier,
            level: None,
        }
    }

    pub fn visit(vertex: &str, message: String, frontier: Vec<FrontierEntry>) -> Self {
        Self {
            kind: StepKind::Visit,
            vertex: vertex.to_owned(),
            message,
            frontier,
            level: None,
        }
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }
}
