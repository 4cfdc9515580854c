//! Graph command handlers.

use std::sync::Arc;

use citegraph_core::{EdgePolicy, MergeBatch};

use crate::bridge::Engines;
use crate::command::DEFAULT_PAGE_SIZE;
use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Largest page a single ListVertices may request.
const MAX_PAGE_SIZE: usize = 10_000;

/// Resolve an optional page size.
fn parse_limit(limit: Option<usize>) -> Result<usize> {
    match limit {
        None => Ok(DEFAULT_PAGE_SIZE),
        Some(0) => Err(Error::InvalidInput {
            reason: "Invalid limit 0. Must be at least 1.".to_string(),
        }),
        Some(n) if n > MAX_PAGE_SIZE => Err(Error::InvalidInput {
            reason: format!("Invalid limit {}. Must be at most {}.", n, MAX_PAGE_SIZE),
        }),
        Some(n) => Ok(n),
    }
}

/// Handle Merge command.
pub fn merge(e: &Arc<Engines>, batch: MergeBatch, strict: bool) -> Result<Output> {
    let policy = if strict {
        EdgePolicy::Reject
    } else {
        e.store.edge_policy()
    };
    let stats = convert_result(e.store.merge_with_policy(batch, policy))?;
    Ok(Output::MergeStats(stats))
}

/// Handle Clear command.
pub fn clear(e: &Arc<Engines>) -> Result<Output> {
    e.store.clear();
    Ok(Output::Unit)
}

/// Handle Snapshot command.
pub fn snapshot(e: &Arc<Engines>) -> Result<Output> {
    Ok(Output::Graph(e.store.snapshot().to_view()))
}

/// Handle GetVertex command.
pub fn get_vertex(e: &Arc<Engines>, id: String) -> Result<Output> {
    let detail = convert_result(e.store.get_vertex(&id))?;
    Ok(Output::Vertex(detail))
}

/// Handle ListVertices command.
pub fn list_vertices(
    e: &Arc<Engines>,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<Output> {
    let limit = parse_limit(limit)?;
    let page = e.store.list_vertices(limit, offset.unwrap_or(0));
    Ok(Output::VertexPage(page))
}

/// Handle ComputeStatistics command.
pub fn statistics(e: &Arc<Engines>) -> Result<Output> {
    Ok(Output::Statistics(e.store.statistics()))
}
