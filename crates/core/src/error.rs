//! Error type for friendgraph.
//!
//! Query and mutation operations never fail for an unknown user: they return
//! empty results or `false`. `GraphError` covers the remaining failures,
//! which come from loading a dataset or reading configuration.

use thiserror::Error;

/// Result alias used across friendgraph crates.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while building a graph or reading configuration.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Input data violates a store constraint (duplicate id, duplicate username).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// A dataset could not be parsed or written.
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying parser message.
        message: String,
    },

    /// Reading a dataset or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is malformed or out of range.
    #[error("invalid config: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },
}

impl GraphError {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            message: message.into(),
        }
    }

    /// Build a `Serialization` error.
    pub fn serialization(message: impl Into<String>) -> Self {
        GraphError::Serialization {
            message: message.into(),
        }
    }

    /// Build a `Config` error.
    pub fn config(message: impl Into<String>) -> Self {
        GraphError::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::serialization(err.to_string())
    }
}
