use thiserror::Error;

/// Reasons a graph cannot be contracted down to two super-nodes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractionError {
    #[error("graph has {node_count} node(s), at least 2 are required")]
    TooFewNodes { node_count: usize },

    #[error("ran out of edges to contract with {remaining_nodes} nodes remaining")]
    EdgesExhausted { remaining_nodes: usize },
}
