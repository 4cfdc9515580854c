//! Graph module for citegraph.
//!
//! The [`GraphStore`] owns one directed citation graph that grows as search
//! results are merged into it. State lives in an `Arc<GraphSnapshot>` behind a
//! read-write lock: readers clone the `Arc`, writers apply copy-on-write, so a
//! snapshot handed out earlier never observes a later mutation.

pub mod adjacency;
mod merge;
mod snapshot;
pub mod types;

use std::sync::Arc;

use citegraph_core::{CitationLabel, CiteError, CiteResult, EdgePolicy, EngineConfig, MergeBatch};
use parking_lot::RwLock;

use types::*;

/// Shared, mutable citation graph.
#[derive(Debug, Default)]
pub struct GraphStore {
    state: RwLock<Arc<GraphSnapshot>>,
    edge_policy: EdgePolicy,
}

impl GraphStore {
    /// Create an empty store that creates stubs for unknown endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given default edge policy.
    pub fn with_edge_policy(edge_policy: EdgePolicy) -> Self {
        Self {
            state: RwLock::default(),
            edge_policy,
        }
    }

    /// Create an empty store configured from `config`.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_edge_policy(config.edge_policy)
    }

    /// Default policy for unknown edge endpoints.
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Merge a batch using the store's default edge policy.
    pub fn merge(&self, batch: MergeBatch) -> CiteResult<MergeStats> {
        self.merge_with_policy(batch, self.edge_policy)
    }

    /// Merge a batch. Vertices are applied before edges; the whole batch is
    /// validated first and nothing is written if any record is rejected.
    pub fn merge_with_policy(
        &self,
        batch: MergeBatch,
        policy: EdgePolicy,
    ) -> CiteResult<MergeStats> {
        let mut state = self.state.write();
        merge::validate_batch(&state, &batch, policy)?;
        if batch.is_empty() {
            return Ok(MergeStats::default());
        }

        let snapshot = Arc::make_mut(&mut state);
        let stats = merge::apply_batch(snapshot, batch);
        snapshot.bump_generation();

        tracing::debug!(
            target: "citegraph::graph",
            vertices_new = stats.vertices_new,
            vertices_updated = stats.vertices_updated,
            edges_new = stats.edges_new,
            edges_existing = stats.edges_existing,
            stubs_created = stats.stubs_created,
            generation = snapshot.generation,
            "merged batch"
        );
        Ok(stats)
    }

    /// Remove every vertex and edge.
    pub fn clear(&self) {
        let mut state = self.state.write();
        let generation = state.generation + 1;
        let removed = state.vertex_count();
        *state = Arc::new(GraphSnapshot {
            generation,
            ..GraphSnapshot::default()
        });
        tracing::debug!(target: "citegraph::graph", removed, generation, "cleared graph");
    }

    /// Compute labels from the current state and commit them, all under the
    /// write lock. `f` returns one label per vertex in insertion order.
    pub(crate) fn relabel<T>(
        &self,
        f: impl FnOnce(&GraphSnapshot) -> (Vec<CitationLabel>, T),
    ) -> (Arc<GraphSnapshot>, T) {
        let mut state = self.state.write();
        let (labels, extra) = f(&state);
        let snapshot = Arc::make_mut(&mut state);
        snapshot.set_labels(&labels);
        snapshot.bump_generation();
        (Arc::clone(&state), extra)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Immutable view of the current graph.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        Arc::clone(&self.state.read())
    }

    /// Mutation counter, bumped by every merge, clear and label write.
    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Look up one vertex with its degrees.
    pub fn get_vertex(&self, id: &str) -> CiteResult<VertexDetail> {
        self.snapshot()
            .vertex_detail(id.trim())
            .ok_or_else(|| CiteError::not_found(id))
    }

    /// One page of vertices in insertion order.
    pub fn list_vertices(&self, limit: usize, offset: usize) -> Page<VertexDetail> {
        let snap = self.snapshot();
        let items = snap
            .vertices()
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|v| snap.vertex_detail(&v.id))
            .collect();
        Page {
            items,
            total: snap.vertex_count(),
            offset,
            limit,
        }
    }

    /// Number of vertices citing `id`.
    pub fn in_degree(&self, id: &str) -> CiteResult<usize> {
        self.snapshot()
            .in_degree(id.trim())
            .ok_or_else(|| CiteError::not_found(id))
    }

    /// Number of vertices cited by `id`.
    pub fn out_degree(&self, id: &str) -> CiteResult<usize> {
        self.snapshot()
            .out_degree(id.trim())
            .ok_or_else(|| CiteError::not_found(id))
    }

    /// Counts and density of the current graph.
    pub fn statistics(&self) -> GraphStatistics {
        self.snapshot().statistics()
    }
}
