//! Structured report of a classification run.

use citegraph_core::CitationLabel;
use serde::{Deserialize, Serialize};

/// Pass 1: split by author data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOneReport {
    /// Vertices considered.
    pub total_vertices: usize,
    /// Vertices labeled `A`.
    pub labeled_a: usize,
    /// Vertices labeled `S` for lack of authors.
    pub labeled_s: usize,
}

/// A citing/cited pair that shares at least one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfCitationSample {
    /// Citing vertex id.
    pub citer_id: String,
    /// Citing vertex display title.
    pub citer_title: String,
    /// Cited vertex id.
    pub cited_id: String,
    /// Cited vertex display title.
    pub cited_title: String,
}

/// Pass 2: self-citation detection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTwoReport {
    /// Edges whose endpoints both have authors, self-loops excluded.
    pub edges_evaluated: usize,
    /// Evaluated edges whose author sets overlap.
    pub pairs_found: usize,
    /// Distinct vertices labeled `B`.
    pub labeled_b: usize,
    /// First few self-citation pairs, in edge order.
    pub samples: Vec<SelfCitationSample>,
}

/// Pass 3: chain roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassThreeReport {
    /// Roots found in the self-citation subgraph.
    pub roots_detected: usize,
    /// Of those, roots chosen as the lowest id of a closed cycle.
    pub cycle_roots: usize,
    /// Vertices labeled `AB`.
    pub labeled_ab: usize,
}

/// Legend line for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Label name.
    pub label: CitationLabel,
    /// Display color.
    pub color: String,
    /// Vertices carrying the label.
    pub count: usize,
    /// Share of all vertices, 0 to 100.
    pub percent: f64,
}

/// Final counts per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelSummary {
    /// `A` count.
    pub a: usize,
    /// `B` count.
    pub b: usize,
    /// `AB` count.
    pub ab: usize,
    /// `S` count.
    pub s: usize,
    /// Total vertices.
    pub total: usize,
    /// Legend in `A, B, AB, S` order.
    pub legend: Vec<LegendEntry>,
}

impl LabelSummary {
    /// Tally final labels.
    pub fn from_labels(labels: &[CitationLabel]) -> Self {
        let mut summary = LabelSummary {
            total: labels.len(),
            ..Default::default()
        };
        for label in labels {
            match label {
                CitationLabel::A => summary.a += 1,
                CitationLabel::B => summary.b += 1,
                CitationLabel::AB => summary.ab += 1,
                CitationLabel::S | CitationLabel::Unset => summary.s += 1,
            }
        }
        summary.legend = [
            (CitationLabel::A, summary.a),
            (CitationLabel::B, summary.b),
            (CitationLabel::AB, summary.ab),
            (CitationLabel::S, summary.s),
        ]
        .into_iter()
        .map(|(label, count)| LegendEntry {
            label,
            color: label.color().unwrap_or_default().to_string(),
            count,
            percent: percent(count, summary.total),
        })
        .collect();
        summary
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Everything a classification run reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Pass 1.
    pub pass_one: PassOneReport,
    /// Pass 2.
    pub pass_two: PassTwoReport,
    /// Pass 3.
    pub pass_three: PassThreeReport,
    /// Final counts.
    pub summary: LabelSummary,
}
