//! Engines shared by every handler.

use citegraph_core::EngineConfig;
use citegraph_engine::{GraphStore, MetricsEngine};

/// The store, metrics engine and configuration one executor drives.
#[derive(Debug)]
pub struct Engines {
    /// The shared graph.
    pub store: GraphStore,
    /// Metrics over snapshots of `store`.
    pub metrics: MetricsEngine,
    /// Configuration both were built from.
    pub config: EngineConfig,
}

impl Engines {
    /// Build engines from a validated configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            store: GraphStore::with_config(&config),
            metrics: MetricsEngine::new(config.clone()),
            config,
        }
    }
}
