//! Config command handlers.

use std::sync::Arc;

use crate::bridge::Engines;
use crate::{Output, Result};

/// Handle ConfigGet command: return the engine configuration.
pub fn config_get(e: &Arc<Engines>) -> Result<Output> {
    Ok(Output::Config(e.config.clone()))
}
