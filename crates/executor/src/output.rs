//! Outputs produced by the [`Executor`](crate::Executor).

use citegraph_core::EngineConfig;
use citegraph_engine::{
    ClassificationReport, GraphStatistics, GraphView, MergeStats, MetricsResult, Page,
    VertexDetail,
};
use serde::Serialize;

/// Result of one [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Output {
    /// No payload.
    Unit,
    /// Counts from a merge.
    MergeStats(MergeStats),
    /// The whole graph.
    Graph(GraphView),
    /// One vertex.
    Vertex(VertexDetail),
    /// A page of vertices.
    VertexPage(Page<VertexDetail>),
    /// Metrics.
    Metrics(Box<MetricsResult>),
    /// Counts and density.
    Statistics(GraphStatistics),
    /// Classification report plus the relabeled graph.
    Classification {
        /// What each pass found.
        report: ClassificationReport,
        /// Graph with the new labels.
        graph: GraphView,
    },
    /// Engine configuration.
    Config(EngineConfig),
}
