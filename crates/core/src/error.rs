//! Error type shared by every citegraph crate.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type CiteResult<T> = std::result::Result<T, CiteError>;

/// Errors surfaced by the graph engine.
///
/// Convergence failures are not errors: PageRank reports them as a warning
/// alongside its best-effort ranks. An empty graph is not an error either.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CiteError {
    /// No vertex with this id exists.
    #[error("vertex not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A vertex record failed validation.
    #[error("invalid vertex: {reason}")]
    InvalidVertex {
        /// What was wrong with the record.
        reason: String,
    },

    /// An edge record failed validation, or referenced an unknown endpoint
    /// while stub creation was disabled.
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        /// Citing endpoint as given.
        from: String,
        /// Cited endpoint as given.
        to: String,
        /// What was wrong with the record.
        reason: String,
    },

    /// A computation parameter was out of range.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// The graph exceeds the vertex ceiling configured for O(V·E) algorithms.
    #[error("graph too large: {vertices} vertices exceeds limit of {limit}")]
    GraphTooLarge {
        /// Current vertex count.
        vertices: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// Configuration could not be parsed or is out of range.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },
}

impl CiteError {
    /// Shorthand for [`CiteError::NotFound`].
    pub fn not_found(id: impl Into<String>) -> Self {
        CiteError::NotFound { id: id.into() }
    }

    /// Shorthand for [`CiteError::InvalidEdge`].
    pub fn invalid_edge(
        from: impl Into<String>,
        to: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CiteError::InvalidEdge {
            from: from.into(),
            to: to.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CiteError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        CiteError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CiteError::Config`].
    pub fn config(reason: impl Into<String>) -> Self {
        CiteError::Config {
            reason: reason.into(),
        }
    }
}
