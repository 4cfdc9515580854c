//! Engine configuration.
//!
//! [`EngineConfig`] is built with chained setters or loaded from TOML:
//!
//! ```
//! use citegraph_core::{EdgePolicy, EngineConfig};
//!
//! let cfg = EngineConfig::new()
//!     .pagerank_damping(0.9)
//!     .edge_policy(EdgePolicy::Reject);
//! assert!(cfg.validate().is_ok());
//!
//! let cfg = EngineConfig::from_toml_str("centrality_vertex_limit = 100").unwrap();
//! assert_eq!(cfg.centrality_vertex_limit, 100);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CiteError, CiteResult};

/// What a merge does with an edge whose endpoint is not in the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Create a minimal stub vertex for the missing endpoint (default).
    #[default]
    Stubs,
    /// Reject the whole batch with `InvalidEdge`.
    Reject,
}

/// Tunables for the graph engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// PageRank damping factor, in `[0, 1]`.
    pub pagerank_damping: f64,
    /// PageRank iteration cap.
    pub pagerank_max_iterations: usize,
    /// PageRank L1 convergence threshold.
    pub pagerank_epsilon: f64,
    /// Largest graph on which betweenness/closeness will run.
    pub centrality_vertex_limit: usize,
    /// Default policy for unknown edge endpoints.
    pub edge_policy: EdgePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pagerank_damping: 0.85,
            pagerank_max_iterations: 100,
            pagerank_epsilon: 1e-6,
            centrality_vertex_limit: 5_000,
            edge_policy: EdgePolicy::Stubs,
        }
    }
}

impl EngineConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PageRank damping factor.
    pub fn pagerank_damping(mut self, damping: f64) -> Self {
        self.pagerank_damping = damping;
        self
    }

    /// Set the PageRank iteration cap.
    pub fn pagerank_max_iterations(mut self, max_iterations: usize) -> Self {
        self.pagerank_max_iterations = max_iterations;
        self
    }

    /// Set the PageRank convergence threshold.
    pub fn pagerank_epsilon(mut self, epsilon: f64) -> Self {
        self.pagerank_epsilon = epsilon;
        self
    }

    /// Set the vertex ceiling for betweenness/closeness.
    pub fn centrality_vertex_limit(mut self, limit: usize) -> Self {
        self.centrality_vertex_limit = limit;
        self
    }

    /// Set the default edge policy.
    pub fn edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> CiteResult<Self> {
        let cfg: EngineConfig =
            toml::from_str(s).map_err(|e| CiteError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> CiteResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CiteError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Reject out-of-range values.
    pub fn validate(&self) -> CiteResult<()> {
        if !(0.0..=1.0).contains(&self.pagerank_damping) {
            return Err(CiteError::config(format!(
                "pagerank_damping must be within [0, 1], got {}",
                self.pagerank_damping
            )));
        }
        if self.pagerank_max_iterations == 0 {
            return Err(CiteError::config(
                "pagerank_max_iterations must be at least 1",
            ));
        }
        if !self.pagerank_epsilon.is_finite() || self.pagerank_epsilon <= 0.0 {
            return Err(CiteError::config(format!(
                "pagerank_epsilon must be positive, got {}",
                self.pagerank_epsilon
            )));
        }
        Ok(())
    }
}
