//! Structural metrics over a graph snapshot.
//!
//! Density and degree centrality are always computed. PageRank, betweenness
//! and closeness are toggled per request; the last two are O(V·E) and refuse
//! to run above the configured vertex ceiling.

pub mod centrality;
pub mod pagerank;

use std::collections::BTreeMap;

use citegraph_core::{CiteError, CiteResult, EngineConfig};
use serde::{Deserialize, Serialize};

use crate::graph::types::{GraphAlgorithm, GraphSnapshot};
use centrality::{degree_centrality, Betweenness, Closeness};
use pagerank::PageRank;

/// Number of entries in every top-N view.
pub const TOP_N: usize = 10;

/// Directed density `|E'| / (|V|·(|V|−1))`, self-loops excluded from `E'`.
/// Zero for fewer than two vertices.
pub fn density(snapshot: &GraphSnapshot) -> f64 {
    let n = snapshot.vertex_count();
    if n < 2 {
        return 0.0;
    }
    let edges = snapshot.edges().iter().filter(|e| !e.is_self_loop()).count();
    edges as f64 / (n as f64 * (n - 1) as f64)
}

// =============================================================================
// Request
// =============================================================================

/// Which expensive metrics to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsFlags {
    /// Compute PageRank.
    pub pagerank: bool,
    /// Compute betweenness centrality.
    pub betweenness: bool,
    /// Compute closeness centrality.
    pub closeness: bool,
}

impl Default for MetricsFlags {
    fn default() -> Self {
        Self {
            pagerank: true,
            betweenness: false,
            closeness: false,
        }
    }
}

impl MetricsFlags {
    /// Every metric enabled.
    pub fn all() -> Self {
        Self {
            pagerank: true,
            betweenness: true,
            closeness: true,
        }
    }

    /// Only the always-on metrics.
    pub fn none() -> Self {
        Self {
            pagerank: false,
            betweenness: false,
            closeness: false,
        }
    }
}

/// A metrics request: flags plus optional PageRank overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsRequest {
    /// Metric toggles.
    #[serde(flatten)]
    pub flags: MetricsFlags,
    /// Damping override, within `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    /// Iteration cap override, at least 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl MetricsRequest {
    /// Request with the given flags and no overrides.
    pub fn new(flags: MetricsFlags) -> Self {
        Self {
            flags,
            ..Default::default()
        }
    }

    /// Override the damping factor.
    pub fn damping(mut self, damping: f64) -> Self {
        self.damping = Some(damping);
        self
    }

    /// Override the iteration cap.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    fn validate(&self) -> CiteResult<()> {
        if let Some(d) = self.damping {
            if !(0.0..=1.0).contains(&d) {
                return Err(CiteError::invalid_input(format!(
                    "damping must be within [0, 1], got {}",
                    d
                )));
            }
        }
        if self.max_iterations == Some(0) {
            return Err(CiteError::invalid_input("max_iterations must be at least 1"));
        }
        Ok(())
    }
}

// =============================================================================
// Result
// =============================================================================

/// One entry of a top-N view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEntry {
    /// Vertex id.
    pub id: String,
    /// Title, or the id when the vertex has none.
    pub title: String,
    /// Metric value.
    pub score: f64,
}

/// Per-vertex scores and their top-N view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    /// Score for every vertex id.
    pub scores: BTreeMap<String, f64>,
    /// Highest scores first, ties by id ascending.
    pub top: Vec<TopEntry>,
}

/// PageRank scores plus convergence details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankSummary {
    /// Ranks and top-N view.
    #[serde(flatten)]
    pub ranking: MetricScores,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the ranks converged before the cap.
    pub converged: bool,
}

/// Non-fatal conditions reported alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MetricsWarning {
    /// PageRank stopped at its iteration cap; ranks are best effort.
    Unconverged {
        /// Iterations performed.
        iterations: usize,
    },
}

/// Output of [`MetricsEngine::compute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Vertex count.
    pub num_vertices: usize,
    /// Edge count.
    pub num_edges: usize,
    /// Directed density.
    pub density: f64,
    /// Degree centrality for every vertex.
    pub degree_centrality: BTreeMap<String, f64>,
    /// Top vertices by degree centrality.
    pub top_degree: Vec<TopEntry>,
    /// PageRank, when requested.
    pub pagerank: Option<PageRankSummary>,
    /// Betweenness, when requested.
    pub betweenness: Option<MetricScores>,
    /// Closeness, when requested.
    pub closeness: Option<MetricScores>,
    /// Non-fatal conditions.
    pub warnings: Vec<MetricsWarning>,
}

// =============================================================================
// Engine
// =============================================================================

/// Computes [`MetricsResult`]s from snapshots.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    /// Engine using the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the requested metrics over `snapshot`.
    ///
    /// Fails with `InvalidInput` for out-of-range overrides and with
    /// `GraphTooLarge` when betweenness or closeness is requested above the
    /// vertex ceiling. Both checks run before any computation.
    pub fn compute(
        &self,
        snapshot: &GraphSnapshot,
        request: &MetricsRequest,
    ) -> CiteResult<MetricsResult> {
        request.validate()?;
        let flags = request.flags;
        let n = snapshot.vertex_count();
        let limit = self.config.centrality_vertex_limit;
        if (flags.betweenness || flags.closeness) && n > limit {
            return Err(CiteError::GraphTooLarge { vertices: n, limit });
        }

        let mut warnings = Vec::new();

        let degree = degree_centrality(snapshot);
        let top_degree = top_entries(snapshot, &degree);

        let pagerank = if flags.pagerank {
            let algo = PageRank {
                damping: request.damping.unwrap_or(self.config.pagerank_damping),
                max_iterations: request
                    .max_iterations
                    .unwrap_or(self.config.pagerank_max_iterations),
                epsilon: self.config.pagerank_epsilon,
            };
            let out = algo.execute(snapshot);
            if !out.converged {
                tracing::debug!(
                    target: "citegraph::metrics",
                    iterations = out.iterations,
                    damping = algo.damping,
                    "pagerank hit iteration cap"
                );
                warnings.push(MetricsWarning::Unconverged {
                    iterations: out.iterations,
                });
            }
            Some(PageRankSummary {
                ranking: scores_of(snapshot, &out.scores),
                iterations: out.iterations,
                converged: out.converged,
            })
        } else {
            None
        };

        let betweenness = flags
            .betweenness
            .then(|| scores_of(snapshot, &Betweenness.execute(snapshot)));
        let closeness = flags
            .closeness
            .then(|| scores_of(snapshot, &Closeness.execute(snapshot)));

        tracing::debug!(
            target: "citegraph::metrics",
            vertices = n,
            edges = snapshot.edge_count(),
            pagerank = flags.pagerank,
            betweenness = flags.betweenness,
            closeness = flags.closeness,
            "computed metrics"
        );

        Ok(MetricsResult {
            num_vertices: n,
            num_edges: snapshot.edge_count(),
            density: density(snapshot),
            degree_centrality: score_map(snapshot, &degree),
            top_degree,
            pagerank,
            betweenness,
            closeness,
            warnings,
        })
    }
}

fn score_map(snapshot: &GraphSnapshot, scores: &[f64]) -> BTreeMap<String, f64> {
    snapshot
        .vertices()
        .iter()
        .zip(scores)
        .map(|(v, &s)| (v.id.clone(), s))
        .collect()
}

fn scores_of(snapshot: &GraphSnapshot, scores: &[f64]) -> MetricScores {
    MetricScores {
        scores: score_map(snapshot, scores),
        top: top_entries(snapshot, scores),
    }
}

/// Top [`TOP_N`] vertices by score; ties broken by id ascending.
pub fn top_entries(snapshot: &GraphSnapshot, scores: &[f64]) -> Vec<TopEntry> {
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    let vertices = snapshot.vertices();
    ranked.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| vertices[a.0].id.cmp(&vertices[b.0].id))
    });
    ranked
        .into_iter()
        .take(TOP_N)
        .map(|(i, score)| TopEntry {
            id: vertices[i].id.clone(),
            title: vertices[i].display_title().to_string(),
            score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;
    use citegraph_core::{EdgeRecord, MergeBatch, VertexRecord};
    use std::sync::Arc;

    fn snapshot(edges: &[(&str, &str)]) -> Arc<GraphSnapshot> {
        let gs = GraphStore::new();
        let edges = edges.iter().map(|(f, t)| EdgeRecord::new(*f, *t)).collect();
        gs.merge(MergeBatch::new(vec![], edges)).unwrap();
        gs.snapshot()
    }

    // =========================================================================
    // Density
    // =========================================================================

    #[test]
    fn density_small_graphs_are_zero() {
        assert_eq!(density(&GraphSnapshot::default()), 0.0);
        assert_eq!(density(&snapshot(&[("a", "a")])), 0.0);
    }

    #[test]
    fn density_of_complete_digraph_is_one() {
        let snap = snapshot(&[("a", "b"), ("b", "a"), ("a", "a"), ("b", "b")]);
        assert_eq!(density(&snap), 1.0);
    }

    #[test]
    fn density_of_single_edge() {
        let snap = snapshot(&[("a", "b"), ("c", "c")]);
        assert!((density(&snap) - 1.0 / 6.0).abs() < 1e-12);
    }

    // =========================================================================
    // Engine
    // =========================================================================

    #[test]
    fn empty_graph_yields_zero_results() {
        let result = MetricsEngine::default()
            .compute(&GraphSnapshot::default(), &MetricsRequest::new(MetricsFlags::all()))
            .unwrap();
        assert_eq!(result.num_vertices, 0);
        assert_eq!(result.density, 0.0);
        assert!(result.top_degree.is_empty());
        let pr = result.pagerank.unwrap();
        assert!(pr.ranking.scores.is_empty());
        assert!(pr.converged);
        assert!(result.betweenness.unwrap().scores.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn flags_toggle_expensive_metrics() {
        let snap = snapshot(&[("a", "b")]);
        let result = MetricsEngine::default()
            .compute(&snap, &MetricsRequest::new(MetricsFlags::none()))
            .unwrap();
        assert!(result.pagerank.is_none());
        assert!(result.betweenness.is_none());
        assert!(result.closeness.is_none());
        assert_eq!(result.degree_centrality.len(), 2);
    }

    #[test]
    fn default_request_runs_pagerank_only() {
        let snap = snapshot(&[("a", "b")]);
        let result = MetricsEngine::default()
            .compute(&snap, &MetricsRequest::default())
            .unwrap();
        assert!(result.pagerank.is_some());
        assert!(result.betweenness.is_none());
    }

    #[test]
    fn graph_too_large_checked_first() {
        let snap = snapshot(&[("a", "b"), ("b", "c")]);
        let engine = MetricsEngine::new(EngineConfig::new().centrality_vertex_limit(2));
        let err = engine
            .compute(&snap, &MetricsRequest::new(MetricsFlags::all()))
            .unwrap_err();
        assert_eq!(err, CiteError::GraphTooLarge { vertices: 3, limit: 2 });

        // pagerank alone is not guarded
        assert!(engine.compute(&snap, &MetricsRequest::default()).is_ok());
    }

    #[test]
    fn invalid_overrides_rejected() {
        let snap = snapshot(&[("a", "b")]);
        let engine = MetricsEngine::default();
        let err = engine
            .compute(&snap, &MetricsRequest::default().damping(1.5))
            .unwrap_err();
        assert!(matches!(err, CiteError::InvalidInput { .. }));
        assert!(engine
            .compute(&snap, &MetricsRequest::default().max_iterations(0))
            .is_err());
    }

    #[test]
    fn unconverged_pagerank_is_a_warning() {
        let snap = snapshot(&[("a", "b"), ("b", "c")]);
        let result = MetricsEngine::default()
            .compute(&snap, &MetricsRequest::default().max_iterations(1))
            .unwrap();
        assert_eq!(
            result.warnings,
            vec![MetricsWarning::Unconverged { iterations: 1 }]
        );
        assert!(!result.pagerank.unwrap().converged);
    }

    #[test]
    fn top_entries_break_ties_by_id() {
        let snap = snapshot(&[("d", "c"), ("b", "a")]);
        let top = top_entries(&snap, &degree_centrality(&snap));
        let ids: Vec<&str> = top.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn top_entries_capped_and_titled() {
        let gs = GraphStore::new();
        let vertices = (0..15)
            .map(|i| VertexRecord::new(format!("v{:02}", i)).title(format!("Paper {}", i)))
            .collect();
        let edges = (1..15)
            .map(|i| EdgeRecord::new(format!("v{:02}", i), "v00"))
            .collect();
        gs.merge(MergeBatch::new(vertices, edges)).unwrap();

        let result = MetricsEngine::default()
            .compute(&gs.snapshot(), &MetricsRequest::default())
            .unwrap();
        assert_eq!(result.top_degree.len(), TOP_N);
        assert_eq!(result.top_degree[0].id, "v00");
        assert_eq!(result.top_degree[0].title, "Paper 0");
        let pr = result.pagerank.unwrap();
        assert_eq!(pr.ranking.top[0].id, "v00");
        let sum: f64 = pr.ranking.scores.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn request_deserializes_flat_flags() {
        let req: MetricsRequest =
            serde_json::from_str(r#"{"betweenness": true, "damping": 0.9}"#).unwrap();
        assert!(req.flags.pagerank);
        assert!(req.flags.betweenness);
        assert!(!req.flags.closeness);
        assert_eq!(req.damping, Some(0.9));
    }
}
