//! Executor error type.

use thiserror::Error;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
///
/// Every variant carries plain strings and numbers so the error can cross a
/// process or wire boundary unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No vertex with this id.
    #[error("vertex not found: {id}")]
    VertexNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A vertex record was rejected.
    #[error("invalid vertex: {reason}")]
    InvalidVertex {
        /// Why.
        reason: String,
    },

    /// An edge record was rejected.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        /// Citing endpoint.
        from: String,
        /// Cited endpoint.
        to: String,
        /// Why.
        reason: String,
    },

    /// A command argument was out of range.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why.
        reason: String,
    },

    /// The graph is above the ceiling for an O(V·E) metric.
    #[error("graph too large: {vertices} vertices exceeds limit of {limit}")]
    GraphTooLarge {
        /// Current vertex count.
        vertices: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// Configuration was rejected.
    #[error("configuration error: {reason}")]
    Config {
        /// Why.
        reason: String,
    },

    /// A command or output could not be (de)serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Why.
        reason: String,
    },

    /// Unexpected internal state.
    #[error("internal error: {reason}")]
    Internal {
        /// Why.
        reason: String,
    },
}
