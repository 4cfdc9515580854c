//! citegraph: an embedded citation graph accumulator.
//!
//! Search results are merged into one growing directed graph of works and
//! citations. The graph can be queried, exported, scored (density, degree,
//! PageRank, betweenness, closeness) and relabeled by a three-pass
//! self-citation classifier.
//!
//! ```
//! use citegraph::{CiteGraph, EdgeRecord, MergeBatch, VertexRecord};
//!
//! let graph = CiteGraph::new().unwrap();
//! graph
//!     .merge(MergeBatch::new(
//!         vec![VertexRecord::new("W1").title("Citing").authors(["A. Smith"])],
//!         vec![EdgeRecord::new("W1", "W2")],
//!     ))
//!     .unwrap();
//! assert_eq!(graph.statistics().unwrap().num_vertices, 2);
//! ```
//!
//! The layers are also usable directly:
//! - [`GraphStore`], [`MetricsEngine`] and [`CitationClassifier`] from the engine
//! - [`Executor`] and [`Command`] for a serializable command interface

#![warn(missing_docs)]

pub use citegraph_core::{
    CitationLabel, CiteError, CiteResult, Edge, EdgePolicy, EdgeRecord, EngineConfig,
    MergeBatch, Vertex, VertexKind, VertexRecord,
};
pub use citegraph_engine::{
    CitationClassifier, Classification, ClassificationOutcome, ClassificationReport,
    GraphAlgorithm, GraphSnapshot, GraphStatistics, GraphStore, GraphView, MergeStats,
    MetricsEngine, MetricsFlags, MetricsRequest, MetricsResult, MetricsWarning, Page,
    TopEntry, VertexDetail,
};
pub use citegraph_executor::{CiteGraph, Command, Error, Executor, Output};
