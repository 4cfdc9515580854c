//! Merge-on-ingest.
//!
//! A batch is validated against the current snapshot first and applied only if
//! every record passes, so a rejected batch leaves the graph untouched.

use citegraph_core::{CiteError, CiteResult, EdgePolicy, MergeBatch, Vertex};
use rustc_hash::FxHashSet;

use super::types::{GraphSnapshot, MergeStats};

/// Check every record of `batch` against `snapshot` without mutating it.
///
/// Under [`EdgePolicy::Reject`] an edge endpoint must either exist already or
/// be introduced by a vertex record of the same batch.
pub(crate) fn validate_batch(
    snapshot: &GraphSnapshot,
    batch: &MergeBatch,
    policy: EdgePolicy,
) -> CiteResult<()> {
    for record in &batch.vertices {
        record.validate()?;
    }
    for record in &batch.edges {
        record.validate()?;
    }

    if policy == EdgePolicy::Reject {
        let incoming: FxHashSet<&str> = batch.vertices.iter().map(|r| r.id.trim()).collect();
        let known = |id: &str| snapshot.index.contains_key(id) || incoming.contains(id);
        for record in &batch.edges {
            for endpoint in [record.from.trim(), record.to.trim()] {
                if !known(endpoint) {
                    return Err(CiteError::invalid_edge(
                        &record.from,
                        &record.to,
                        format!("unknown endpoint '{}'", endpoint),
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Apply an already validated batch. Vertices first, then edges.
pub(crate) fn apply_batch(snapshot: &mut GraphSnapshot, batch: MergeBatch) -> MergeStats {
    let mut stats = MergeStats::default();

    for record in batch.vertices {
        match snapshot.index_of(record.id.trim()) {
            Some(idx) => {
                snapshot.vertices[idx].refresh(record);
                stats.vertices_updated += 1;
            }
            None => {
                snapshot.push_vertex(Vertex::from_record(record));
                stats.vertices_new += 1;
            }
        }
    }

    for record in batch.edges {
        let from = ensure_vertex(snapshot, record.from.trim(), &mut stats);
        let to = ensure_vertex(snapshot, record.to.trim(), &mut stats);
        if snapshot.insert_edge(from, to, record.weight) {
            stats.edges_new += 1;
        } else {
            stats.edges_existing += 1;
        }
    }

    stats
}

/// Index of `id`, creating a stub vertex if it is missing.
fn ensure_vertex(snapshot: &mut GraphSnapshot, id: &str, stats: &mut MergeStats) -> usize {
    if let Some(idx) = snapshot.index_of(id) {
        return idx;
    }
    stats.vertices_new += 1;
    stats.stubs_created += 1;
    snapshot.push_vertex(Vertex::stub(id))
}
