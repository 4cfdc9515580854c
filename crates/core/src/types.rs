//! Domain types for the citation graph.
//!
//! Two families live here:
//! - stored types ([`Vertex`], [`Edge`]) that the graph store owns, and
//! - ingest records ([`VertexRecord`], [`EdgeRecord`], [`MergeBatch`]) that
//!   search orchestrators and import adapters hand to the store.
//!
//! Ingest records use `Option` for every refreshable field so that a merge can
//! tell "absent" apart from "present", which is what fill-don't-erase needs.

use serde::{Deserialize, Serialize};

use crate::error::{CiteError, CiteResult};

// =============================================================================
// Kinds and labels
// =============================================================================

/// Role a vertex played in the search that produced it.
///
/// Set by ingest; unrelated to the self-citation [`CitationLabel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexKind {
    /// The article a search started from.
    Root,
    /// An article that cites something already in the graph.
    Citation,
    /// An article cited by something already in the graph.
    Reference,
    /// No role recorded (stubs, imports without metadata).
    #[default]
    Unclassified,
}

/// Self-citation classification result. Owned by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitationLabel {
    /// Has authors, no self-citation detected.
    A,
    /// Takes part in at least one self-citation pair.
    B,
    /// Root of a self-citation chain.
    AB,
    /// Not enough author data to classify.
    S,
    /// Not classified yet.
    #[default]
    #[serde(rename = "unset")]
    Unset,
}

impl CitationLabel {
    /// Label as shown in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationLabel::A => "A",
            CitationLabel::B => "B",
            CitationLabel::AB => "AB",
            CitationLabel::S => "S",
            CitationLabel::Unset => "unset",
        }
    }

    /// Legend color for this label, `None` while unclassified.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            CitationLabel::A => Some("blue"),
            CitationLabel::B => Some("yellow"),
            CitationLabel::AB => Some("green"),
            CitationLabel::S => Some("red"),
            CitationLabel::Unset => None,
        }
    }
}

impl std::fmt::Display for CitationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Stored types
// =============================================================================

/// One article in the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    /// Stable identifier, unique within the graph.
    pub id: String,
    /// Article title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author names in display order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Journal or conference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Abstract text.
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Citation count as reported by the provider.
    #[serde(default)]
    pub citation_count: u64,
    /// Depth from the originating search root (0 = root).
    #[serde(default)]
    pub layer: u32,
    /// Provider that supplied this vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Ingest role.
    #[serde(default)]
    pub kind: VertexKind,
    /// Classification label.
    #[serde(default)]
    pub label: CitationLabel,
}

impl Vertex {
    /// Minimal vertex carrying only an id. Created for unknown edge endpoints.
    pub fn stub(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Build a new vertex from an ingest record.
    pub fn from_record(record: VertexRecord) -> Self {
        let mut vertex = Vertex::stub(record.id.trim());
        vertex.refresh(record);
        vertex
    }

    /// Fill-don't-erase refresh: present incoming fields overwrite, absent
    /// ones keep the current value. An empty author list counts as absent.
    ///
    /// The classification label is never touched here.
    pub fn refresh(&mut self, record: VertexRecord) {
        let authors = normalize_authors(record.authors);
        if !authors.is_empty() {
            self.authors = authors;
        }
        fill(&mut self.title, record.title);
        fill(&mut self.venue, record.venue);
        fill(&mut self.doi, record.doi);
        fill(&mut self.abstract_text, record.abstract_text);
        fill(&mut self.url, record.url);
        fill(&mut self.origin, record.origin);
        if record.year.is_some() {
            self.year = record.year;
        }
        if let Some(count) = record.citation_count {
            self.citation_count = count;
        }
        if let Some(layer) = record.layer {
            self.layer = layer;
        }
        if let Some(kind) = record.kind {
            self.kind = kind;
        }
    }

    /// Title for display, falling back to the id.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Whether the vertex has at least one author name.
    pub fn has_authors(&self) -> bool {
        !self.authors.is_empty()
    }
}

fn fill(slot: &mut Option<String>, incoming: Option<String>) {
    if let Some(value) = normalize_text(incoming) {
        *slot = Some(value);
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn normalize_authors(authors: Vec<String>) -> Vec<String> {
    authors
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}

/// Directed citation: `from` cites `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Citing vertex id.
    pub from: String,
    /// Cited vertex id.
    pub to: String,
    /// Display/metric hint (default 1.0).
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Edge {
    /// Edge with the default weight.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: default_weight(),
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

// =============================================================================
// Ingest records
// =============================================================================

/// Normalized vertex record produced by a search or import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexRecord {
    /// Vertex id.
    pub id: String,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Authors; empty means "unknown", not "none".
    #[serde(default)]
    pub authors: Vec<String>,
    /// Year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Abstract.
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Provider citation count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_count: Option<u64>,
    /// Search depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<u32>,
    /// Provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Ingest role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VertexKind>,
}

impl VertexRecord {
    /// Record with only an id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the authors.
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the DOI.
    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set the provider citation count.
    pub fn citation_count(mut self, count: u64) -> Self {
        self.citation_count = Some(count);
        self
    }

    /// Set the search depth.
    pub fn layer(mut self, layer: u32) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Set the provider name.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the ingest role.
    pub fn kind(mut self, kind: VertexKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Check the record before it is merged.
    pub fn validate(&self) -> CiteResult<()> {
        if self.id.trim().is_empty() {
            return Err(CiteError::InvalidVertex {
                reason: "vertex id must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Normalized edge record produced by a search or import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Citing vertex id.
    #[serde(alias = "source")]
    pub from: String,
    /// Cited vertex id.
    #[serde(alias = "target")]
    pub to: String,
    /// Optional weight; `None` keeps the stored weight on re-merge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl EdgeRecord {
    /// Record without a weight.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight: None,
        }
    }

    /// Set the weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Check the record before it is merged. Endpoint existence is checked by
    /// the store since it depends on the edge policy.
    pub fn validate(&self) -> CiteResult<()> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(CiteError::invalid_edge(
                &self.from,
                &self.to,
                "endpoint id must not be empty",
            ));
        }
        if let Some(w) = self.weight {
            if !w.is_finite() || w <= 0.0 {
                return Err(CiteError::invalid_edge(
                    &self.from,
                    &self.to,
                    format!("weight must be a positive number, got {}", w),
                ));
            }
        }
        Ok(())
    }
}

/// A batch of records merged atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeBatch {
    /// Vertex records, applied first.
    #[serde(default, alias = "nodes")]
    pub vertices: Vec<VertexRecord>,
    /// Edge records, applied after the vertices.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl MergeBatch {
    /// Batch from vertex and edge records.
    pub fn new(vertices: Vec<VertexRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self { vertices, edges }
    }

    /// Whether the batch carries nothing.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}
