//! Metrics and classification command handlers.

use std::sync::Arc;

use citegraph_engine::MetricsRequest;

use crate::bridge::Engines;
use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle ComputeMetrics command.
pub fn compute_metrics(e: &Arc<Engines>, request: MetricsRequest) -> Result<Output> {
    let snapshot = e.store.snapshot();
    let result = convert_result(e.metrics.compute(&snapshot, &request))?;
    Ok(Output::Metrics(Box::new(result)))
}

/// Handle ClassifyCitations command.
pub fn classify_citations(e: &Arc<Engines>) -> Result<Output> {
    let outcome = e.store.classify_citations();
    Ok(Output::Classification {
        report: outcome.report,
        graph: outcome.snapshot.to_view(),
    })
}
