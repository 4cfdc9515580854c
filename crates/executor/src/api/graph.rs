//! Graph, metrics and classification operations on the CiteGraph API surface.

use citegraph_core::{EngineConfig, MergeBatch};
use citegraph_engine::{
    ClassificationReport, GraphStatistics, GraphView, MergeStats, MetricsRequest, MetricsResult,
    Page, VertexDetail,
};

use super::CiteGraph;
use crate::{Command, Error, Output, Result};

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}

impl CiteGraph {
    // =========================================================================
    // Ingest
    // =========================================================================

    /// Merge a batch, creating stubs per the configured edge policy.
    pub fn merge(&self, batch: MergeBatch) -> Result<MergeStats> {
        self.merge_with(batch, false)
    }

    /// Merge a batch, rejecting unknown edge endpoints.
    pub fn merge_strict(&self, batch: MergeBatch) -> Result<MergeStats> {
        self.merge_with(batch, true)
    }

    fn merge_with(&self, batch: MergeBatch, strict: bool) -> Result<MergeStats> {
        match self.executor.execute(Command::Merge { batch, strict })? {
            Output::MergeStats(stats) => Ok(stats),
            _ => Err(unexpected("Merge")),
        }
    }

    /// Remove every vertex and edge.
    pub fn clear(&self) -> Result<()> {
        match self.executor.execute(Command::Clear)? {
            Output::Unit => Ok(()),
            _ => Err(unexpected("Clear")),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The whole graph.
    pub fn snapshot(&self) -> Result<GraphView> {
        match self.executor.execute(Command::Snapshot)? {
            Output::Graph(view) => Ok(view),
            _ => Err(unexpected("Snapshot")),
        }
    }

    /// One vertex with its degrees.
    pub fn get_vertex(&self, id: &str) -> Result<VertexDetail> {
        match self.executor.execute(Command::GetVertex { id: id.to_string() })? {
            Output::Vertex(detail) => Ok(detail),
            _ => Err(unexpected("GetVertex")),
        }
    }

    /// One page of vertices in insertion order.
    pub fn list_vertices(&self, limit: usize, offset: usize) -> Result<Page<VertexDetail>> {
        match self.executor.execute(Command::ListVertices {
            limit: Some(limit),
            offset: Some(offset),
        })? {
            Output::VertexPage(page) => Ok(page),
            _ => Err(unexpected("ListVertices")),
        }
    }

    /// Counts and density.
    pub fn statistics(&self) -> Result<GraphStatistics> {
        match self.executor.execute(Command::ComputeStatistics)? {
            Output::Statistics(stats) => Ok(stats),
            _ => Err(unexpected("ComputeStatistics")),
        }
    }

    /// Engine configuration.
    pub fn config(&self) -> Result<EngineConfig> {
        match self.executor.execute(Command::ConfigGet)? {
            Output::Config(cfg) => Ok(cfg),
            _ => Err(unexpected("ConfigGet")),
        }
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Compute metrics over the current graph.
    pub fn compute_metrics(&self, request: MetricsRequest) -> Result<MetricsResult> {
        match self.executor.execute(Command::ComputeMetrics { request })? {
            Output::Metrics(result) => Ok(*result),
            _ => Err(unexpected("ComputeMetrics")),
        }
    }

    /// Classify citations and return the report with the relabeled graph.
    pub fn classify_citations(&self) -> Result<(ClassificationReport, GraphView)> {
        match self.executor.execute(Command::ClassifyCitations)? {
            Output::Classification { report, graph } => Ok((report, graph)),
            _ => Err(unexpected("ClassifyCitations")),
        }
    }
}
