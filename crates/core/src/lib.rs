//! Core types for citegraph.
//!
//! This crate holds everything the engine and its callers share:
//! - Domain types: [`Vertex`], [`Edge`], [`VertexKind`], [`CitationLabel`]
//! - Ingest records: [`VertexRecord`], [`EdgeRecord`], [`MergeBatch`]
//! - The error type: [`CiteError`] / [`CiteResult`]
//! - Engine configuration: [`EngineConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{EdgePolicy, EngineConfig};
pub use error::{CiteError, CiteResult};
pub use types::{
    CitationLabel, Edge, EdgeRecord, MergeBatch, Vertex, VertexKind, VertexRecord,
};
