//! Typed, in-process API over the executor.

mod graph;

use citegraph_core::EngineConfig;

use crate::{Executor, Result};

/// Typed handle to one citation graph.
///
/// Each method builds a [`Command`](crate::Command), runs it through the
/// [`Executor`] and unwraps the expected [`Output`](crate::Output) variant.
#[derive(Debug, Clone)]
pub struct CiteGraph {
    executor: Executor,
}

impl CiteGraph {
    /// Empty graph with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Empty graph with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    /// The executor behind this handle.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}
