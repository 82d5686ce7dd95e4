//! Executor error type.

use thiserror::Error;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the command layer.
///
/// Unknown users are not errors; they produce empty results or `false`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A command parameter is out of range.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A command or result could not be (de)serialized, or a dataset could not be read.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// The executor produced something the caller did not expect.
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
