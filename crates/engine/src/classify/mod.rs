//! Self-citation classification ("Citas A/B").
//!
//! Three passes over an explicit label vector:
//!
//! 1. every vertex with at least one author becomes `A`, the rest `S`;
//! 2. every non-self-loop edge whose endpoints share an author marks both
//!    endpoints `B`;
//! 3. in the subgraph of those self-citation edges, the roots of each chain
//!    become `AB`. A root is a `B` vertex with no incoming self-citation
//!    edge. A closed cycle with no way in has no such vertex, so the member
//!    with the lowest id stands in for it.
//!
//! Labels are recomputed from scratch every run and topology is never
//! touched.

mod components;
pub mod report;

use std::sync::Arc;

use citegraph_core::{CitationLabel, Vertex};
use rustc_hash::FxHashSet;

use crate::graph::types::{GraphAlgorithm, GraphSnapshot};
use crate::graph::GraphStore;
pub use report::{
    ClassificationReport, LabelSummary, LegendEntry, PassOneReport, PassThreeReport,
    PassTwoReport, SelfCitationSample,
};

/// Default number of self-citation samples kept in the report.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Labels for every vertex plus the run report.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// One label per vertex, indexed like the snapshot's vertices.
    pub labels: Vec<CitationLabel>,
    /// What each pass found.
    pub report: ClassificationReport,
}

/// Result of [`GraphStore::classify_citations`].
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    /// Graph state with the new labels applied.
    pub snapshot: Arc<GraphSnapshot>,
    /// What each pass found.
    pub report: ClassificationReport,
}

/// The three-pass classifier.
#[derive(Debug, Clone, Copy)]
pub struct CitationClassifier {
    sample_limit: usize,
}

impl Default for CitationClassifier {
    fn default() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

impl CitationClassifier {
    /// Classifier with the default sample limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` self-citation samples in the report.
    pub fn sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }
}

/// Trimmed, lowercased author names.
fn author_set(vertex: &Vertex) -> FxHashSet<String> {
    vertex
        .authors
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect()
}

impl GraphAlgorithm for CitationClassifier {
    type Output = Classification;

    fn execute(&self, snapshot: &GraphSnapshot) -> Classification {
        let n = snapshot.vertex_count();
        let vertices = snapshot.vertices();
        let authors: Vec<FxHashSet<String>> = vertices.iter().map(author_set).collect();

        // Pass 1
        let mut labels: Vec<CitationLabel> = vertices
            .iter()
            .map(|v| {
                if !v.has_authors() {
                    CitationLabel::S
                } else {
                    CitationLabel::A
                }
            })
            .collect();
        let labeled_a = labels.iter().filter(|l| **l == CitationLabel::A).count();
        let pass_one = PassOneReport {
            total_vertices: n,
            labeled_a,
            labeled_s: n - labeled_a,
        };

        // Pass 2
        let mut pass_two = PassTwoReport::default();
        let mut self_citations: Vec<Vec<usize>> = vec![Vec::new(); n];
        let adjacency = snapshot.adjacency();
        for u in 0..n {
            if authors[u].is_empty() {
                continue;
            }
            for &v in adjacency.outgoing(u) {
                if u == v || authors[v].is_empty() {
                    continue;
                }
                pass_two.edges_evaluated += 1;
                if authors[u].is_disjoint(&authors[v]) {
                    continue;
                }
                pass_two.pairs_found += 1;
                self_citations[u].push(v);
                labels[u] = CitationLabel::B;
                labels[v] = CitationLabel::B;
                if pass_two.samples.len() < self.sample_limit {
                    pass_two.samples.push(SelfCitationSample {
                        citer_id: vertices[u].id.clone(),
                        citer_title: vertices[u].display_title().to_string(),
                        cited_id: vertices[v].id.clone(),
                        cited_title: vertices[v].display_title().to_string(),
                    });
                }
            }
        }
        pass_two.labeled_b = labels.iter().filter(|l| **l == CitationLabel::B).count();

        // Pass 3
        let pass_three = mark_roots(snapshot, &self_citations, &mut labels);

        let summary = LabelSummary::from_labels(&labels);
        Classification {
            labels,
            report: ClassificationReport {
                pass_one,
                pass_two,
                pass_three,
                summary,
            },
        }
    }
}

/// Label the source of every self-citation chain `AB`.
///
/// Works on strongly connected components of the self-citation subgraph: a
/// component with no self-citation edge entering it from outside is a source,
/// and its lowest-id member is the root. For a single vertex that is exactly
/// "no incoming self-citation edge".
fn mark_roots(
    snapshot: &GraphSnapshot,
    self_citations: &[Vec<usize>],
    labels: &mut [CitationLabel],
) -> PassThreeReport {
    let vertices = snapshot.vertices();
    let comps = components::strongly_connected(self_citations);

    let mut entered = vec![false; comps.count];
    for (u, targets) in self_citations.iter().enumerate() {
        for &v in targets {
            let (cu, cv) = (comps.component_of[u], comps.component_of[v]);
            if cu != cv {
                entered[cv] = true;
            }
        }
    }

    let mut root_of: Vec<Option<usize>> = vec![None; comps.count];
    let mut size = vec![0usize; comps.count];
    for (idx, label) in labels.iter().enumerate() {
        if *label != CitationLabel::B {
            continue;
        }
        let c = comps.component_of[idx];
        size[c] += 1;
        if entered[c] {
            continue;
        }
        root_of[c] = match root_of[c] {
            Some(best) if vertices[best].id <= vertices[idx].id => Some(best),
            _ => Some(idx),
        };
    }

    let mut report = PassThreeReport::default();
    for (c, root) in root_of.into_iter().enumerate() {
        if let Some(idx) = root {
            labels[idx] = CitationLabel::AB;
            report.roots_detected += 1;
            report.labeled_ab += 1;
            if size[c] > 1 {
                report.cycle_roots += 1;
            }
        }
    }
    report
}

impl GraphStore {
    /// Classify every vertex with the default classifier and commit the
    /// labels atomically.
    pub fn classify_citations(&self) -> ClassificationOutcome {
        self.classify_citations_with(&CitationClassifier::default())
    }

    /// Classify with a custom classifier. Runs under the store's write lock so
    /// no merge can interleave between reading the graph and writing labels.
    pub fn classify_citations_with(&self, classifier: &CitationClassifier) -> ClassificationOutcome {
        let (snapshot, report) = self.relabel(|snap| {
            let Classification { labels, report } = classifier.execute(snap);
            (labels, report)
        });
        let s = &report.summary;
        tracing::debug!(
            target: "citegraph::classify",
            total = s.total,
            a = s.a,
            b = s.b,
            ab = s.ab,
            s = s.s,
            pairs = report.pass_two.pairs_found,
            cycle_roots = report.pass_three.cycle_roots,
            "classified citations"
        );
        ClassificationOutcome { snapshot, report }
    }
}
