//! Error conversion from engine error types.
//!
//! This module maps [`CiteError`] onto the executor's [`Error`] type.

use crate::Error;
use citegraph_core::CiteError;

/// Convert a CiteError to an executor Error.
///
/// All details are preserved; only the variant names change.
impl From<CiteError> for Error {
    fn from(err: CiteError) -> Self {
        match err {
            CiteError::NotFound { id } => Error::VertexNotFound { id },
            CiteError::InvalidVertex { reason } => Error::InvalidVertex { reason },
            CiteError::InvalidEdge { from, to, reason } => Error::InvalidEdge { from, to, reason },
            CiteError::InvalidInput { reason } => Error::InvalidInput { reason },
            CiteError::GraphTooLarge { vertices, limit } => {
                Error::GraphTooLarge { vertices, limit }
            }
            CiteError::Config { reason } => Error::Config { reason },
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

/// Convert a citegraph_core::CiteResult to an executor Result.
pub fn convert_result<T>(result: citegraph_core::CiteResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
