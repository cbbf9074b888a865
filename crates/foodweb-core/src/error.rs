//! Error types for Foodweb Core

use thiserror::Error;

/// Result type alias using Foodweb's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Foodweb error types
///
/// Every operation that returns one of these has left the web untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Index {index} out of range for a web of {count} organisms")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Organism {0} cannot eat itself")]
    SelfLoop(usize),

    #[error("Organism {predator} already eats organism {prey}")]
    DuplicateEdge { predator: usize, prey: usize },

    #[error("Food web is empty")]
    EmptyWeb,

    #[error("Food web contains a cycle; heights are undefined")]
    Cycle,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// True for failures caused by a bad index (the IndexError class)
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// True for rejected edges (self-loops and duplicates)
    pub fn is_invalid_edge(&self) -> bool {
        matches!(self, Self::SelfLoop(_) | Self::DuplicateEdge { .. })
    }
}
