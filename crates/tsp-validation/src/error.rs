use crate::Algorithm;
use thiserror::Error;
use tsp_core::{GraphError, TourError};

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("{algorithm} refused: {n} nodes exceeds the limit of {limit}")]
    TooLarge { algorithm: Algorithm, n: usize, limit: usize },

    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid tour: {0}")]
    Tour(#[from] TourError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
