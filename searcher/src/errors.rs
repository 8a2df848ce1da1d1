use std::num::ParseIntError;

use thiserror::Error;

/// Error produced when a search fails.
///
/// An unreachable goal is not an error: the search
/// returns an [Expansion](crate::Expansion) without a path.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Step limit exhausted after {0} steps")]
    StepLimitExhausted(usize),

    #[error("Negative step cost from {from} to {to}")]
    NegativeCost { from: String, to: String },

    #[error("Negative heuristic estimate at {node}")]
    NegativeHeuristic { node: String },

    #[error("Path cost overflowed at {node}")]
    CostOverflow { node: String },
}

/// Error produced when a graph can't be read from text.
#[derive(Debug, Error)]
pub enum ParseGraphError {
    #[error("Invalid edge: {0:?}")]
    InvalidEdge(String),

    #[error("Invalid edge weight")]
    InvalidWeight(#[from] ParseIntError),
}

/// Error produced when a strategy name is not recognized.
#[derive(Debug, Error)]
#[error("Unknown search strategy: {0}")]
pub struct ParseStrategyError(pub String);

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
