//! Error types for the drill library

use thiserror::Error;

/// Custom error type for the drill library
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Got {got} for [{name}], expected {expected}")]
    CountMismatch {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using DrillError
pub type Result<T> = std::result::Result<T, DrillError>;
