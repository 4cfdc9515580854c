//! Command dispatch.

use std::sync::Arc;

use citegraph_core::EngineConfig;
use citegraph_engine::GraphStore;

use crate::bridge::Engines;
use crate::convert::convert_result;
use crate::handlers;
use crate::{Command, Output, Result};

/// Executes [`Command`]s against one graph store.
///
/// Cloning is cheap and every clone drives the same store.
#[derive(Debug, Clone)]
pub struct Executor {
    engines: Arc<Engines>,
}

impl Executor {
    /// Executor with a fresh, empty store.
    pub fn new(config: EngineConfig) -> Result<Self> {
        convert_result(config.validate())?;
        Ok(Self {
            engines: Arc::new(Engines::new(config)),
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &GraphStore {
        &self.engines.store
    }

    /// Configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.engines.config
    }

    /// Execute one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        tracing::debug!(
            target: "citegraph::executor",
            command = cmd.name(),
            write = cmd.is_write(),
            "execute"
        );
        let e = &self.engines;
        match cmd {
            Command::Merge { batch, strict } => handlers::graph::merge(e, batch, strict),
            Command::Clear => handlers::graph::clear(e),
            Command::Snapshot => handlers::graph::snapshot(e),
            Command::GetVertex { id } => handlers::graph::get_vertex(e, id),
            Command::ListVertices { limit, offset } => {
                handlers::graph::list_vertices(e, limit, offset)
            }
            Command::ComputeStatistics => handlers::graph::statistics(e),
            Command::ComputeMetrics { request } => handlers::analysis::compute_metrics(e, request),
            Command::ClassifyCitations => handlers::analysis::classify_citations(e),
            Command::ConfigGet => handlers::config::config_get(e),
        }
    }

    /// Execute a JSON-encoded command and return the JSON-encoded output.
    pub fn execute_json(&self, json: &str) -> Result<serde_json::Value> {
        let cmd: Command = serde_json::from_str(json)?;
        let output = self.execute(cmd)?;
        Ok(serde_json::to_value(output)?)
    }
}
