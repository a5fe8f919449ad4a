use crate::Node;
use thiserror::Error;

/// Malformed graph input. Raised once, when the graph is built.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("start node {start} is outside 0..{n}")]
    StartOutOfRange { start: Node, n: usize },

    #[error("edge ({u}, {v}) references a node outside 0..{n}")]
    EdgeOutOfRange { u: Node, v: Node, n: usize },

    #[error("weight matrix row {row} has {len} entries, expected {n}")]
    NotSquare { row: usize, len: usize, n: usize },

    #[error("weight({u}, {v}) = {value} is not a valid cost")]
    InvalidWeight { u: Node, v: Node, value: f64 },

    #[error("graph description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a node sequence is not a tour of the graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("tour has {len} nodes, expected between {min} and {max}")]
    BadLength { len: usize, min: usize, max: usize },

    #[error("node {node} is outside 0..{n}")]
    NodeOutOfRange { node: Node, n: usize },

    #[error("node {0} is visited twice")]
    Repeated(Node),
}
