//! Graph directedness.

use serde::{Deserialize, Serialize};

/// Whether edges are one-way or mirrored on insertion. Fixed when the graph is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Directed,
    Undirected,
}

impl GraphKind {
    pub fn is_directed(self) -> bool {
        matches!(self, GraphKind::Directed)
    }
}
