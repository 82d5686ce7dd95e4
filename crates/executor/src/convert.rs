//! Error conversion from engine errors.

use friendgraph_core::{GraphError, GraphResult};

use crate::Error;

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::InvalidInput { message } => Error::InvalidInput { reason: message },
            GraphError::Config { message } => Error::InvalidInput {
                reason: format!("config: {}", message),
            },
            GraphError::Serialization { message } => Error::Serialization { reason: message },
            GraphError::Io(e) => Error::Serialization {
                reason: format!("I/O: {}", e),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convert a `GraphResult` to an executor `Result`.
pub fn convert_result<T>(result: GraphResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
