//! Graph engine for citegraph.
//!
//! - [`graph`]: the [`GraphStore`] that accumulates merged search results
//! - [`metrics`]: density, degree, PageRank, betweenness and closeness
//! - [`classify`]: the three-pass self-citation classifier
//!
//! Every computation reads an immutable [`GraphSnapshot`]; only the store
//! mutates, and it does so copy-on-write so held snapshots stay consistent.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod graph;
pub mod metrics;

pub use classify::{
    CitationClassifier, Classification, ClassificationOutcome, ClassificationReport,
};
pub use graph::types::{
    GraphAlgorithm, GraphSnapshot, GraphStatistics, GraphView, MergeStats, Page, VertexDetail,
};
pub use graph::GraphStore;
pub use metrics::{
    MetricScores, MetricsEngine, MetricsFlags, MetricsRequest, MetricsResult, MetricsWarning,
    PageRankSummary, TopEntry,
};
