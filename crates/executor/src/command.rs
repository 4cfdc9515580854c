//! Commands accepted by the [`Executor`](crate::Executor).

use citegraph_core::MergeBatch;
use citegraph_engine::MetricsRequest;
use serde::{Deserialize, Serialize};

/// Page size used when `ListVertices` omits `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One operation on the citation graph.
///
/// Serialized with a `command` tag, e.g.
/// `{"command": "getVertex", "id": "W123"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Merge a batch of vertex and edge records.
    Merge {
        /// Records to merge.
        batch: MergeBatch,
        /// Reject unknown edge endpoints instead of creating stubs.
        #[serde(default)]
        strict: bool,
    },
    /// Remove every vertex and edge.
    Clear,
    /// Return the whole graph.
    Snapshot,
    /// Look up one vertex with its degrees.
    GetVertex {
        /// Vertex id.
        id: String,
    },
    /// One page of vertices in insertion order.
    ListVertices {
        /// Page size.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
        /// First item.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<usize>,
    },
    /// Density, degree and the requested expensive metrics.
    ComputeMetrics {
        /// Flags and PageRank overrides.
        #[serde(default)]
        request: MetricsRequest,
    },
    /// Counts and density.
    ComputeStatistics,
    /// Run the three-pass self-citation classifier.
    ClassifyCitations,
    /// Current engine configuration.
    ConfigGet,
}

impl Command {
    /// Variant name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Merge { .. } => "Merge",
            Command::Clear => "Clear",
            Command::Snapshot => "Snapshot",
            Command::GetVertex { .. } => "GetVertex",
            Command::ListVertices { .. } => "ListVertices",
            Command::ComputeMetrics { .. } => "ComputeMetrics",
            Command::ComputeStatistics => "ComputeStatistics",
            Command::ClassifyCitations => "ClassifyCitations",
            Command::ConfigGet => "ConfigGet",
        }
    }

    /// Whether the command can change the graph.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Merge { .. } | Command::Clear | Command::ClassifyCitations
        )
    }
}
