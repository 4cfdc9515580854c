//! Core graph types for the citation graph store.

use citegraph_core::{CitationLabel, Edge, Vertex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::adjacency::AdjacencyIndex;

/// Counts returned by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Vertices that did not exist before, stubs included.
    pub vertices_new: usize,
    /// Existing vertices refreshed by an incoming record.
    pub vertices_updated: usize,
    /// Edges inserted.
    pub edges_new: usize,
    /// Edges that were already present.
    pub edges_existing: usize,
    /// Stub vertices created for unknown edge endpoints.
    pub stubs_created: usize,
}

/// A vertex together with its degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexDetail {
    /// The stored vertex.
    #[serde(flatten)]
    pub vertex: Vertex,
    /// Number of vertices citing this one.
    pub in_degree: usize,
    /// Number of vertices this one cites.
    pub out_degree: usize,
    /// Legend color of the current label.
    pub color: Option<&'static str>,
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: usize,
    /// Offset the page starts at.
    pub offset: usize,
    /// Requested page size.
    pub limit: usize,
}

/// Cheap summary of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Vertex count.
    pub num_vertices: usize,
    /// Edge count.
    pub num_edges: usize,
    /// Directed density.
    pub density: f64,
    /// Whether the graph has no vertices.
    pub is_empty: bool,
}

/// Serializable read model of the whole graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    /// Vertices in insertion order.
    pub vertices: Vec<Vertex>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

/// An immutable, structurally consistent view of the graph.
///
/// Vertices and edges are kept in insertion order. Every edge endpoint is a
/// vertex of the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) index: FxHashMap<String, usize>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) edge_index: FxHashMap<(usize, usize), usize>,
    pub(crate) adjacency: AdjacencyIndex,
    pub(crate) generation: u64,
}

impl GraphSnapshot {
    /// Number of vertices in the snapshot.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges in the snapshot.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the snapshot has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Mutation counter of the store when this snapshot was taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a vertex by id.
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.index.get(id).map(|&i| &self.vertices[i])
    }

    /// Dense index of a vertex id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Adjacency in both directions, addressed by dense index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Whether the edge `from → to` exists.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.edge_index.contains_key(&(f, t)),
            _ => false,
        }
    }

    /// In-degree of a vertex, `None` if it does not exist.
    pub fn in_degree(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|i| self.adjacency.degree_in(i))
    }

    /// Out-degree of a vertex, `None` if it does not exist.
    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|i| self.adjacency.degree_out(i))
    }

    /// Vertex with degrees and legend color.
    pub fn vertex_detail(&self, id: &str) -> Option<VertexDetail> {
        let idx = self.index_of(id)?;
        let vertex = self.vertices[idx].clone();
        let color = vertex.label.color();
        Some(VertexDetail {
            vertex,
            in_degree: self.adjacency.degree_in(idx),
            out_degree: self.adjacency.degree_out(idx),
            color,
        })
    }

    /// Counts and density.
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            num_vertices: self.vertex_count(),
            num_edges: self.edge_count(),
            density: crate::metrics::density(self),
            is_empty: self.is_empty(),
        }
    }

    /// Owned copy of vertices and edges for serialization.
    pub fn to_view(&self) -> GraphView {
        GraphView {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Convert to edge list: (from, to, weight).
    pub fn to_edge_list(&self) -> Vec<(String, String, f64)> {
        self.edges
            .iter()
            .map(|e| (e.from.clone(), e.to.clone(), e.weight))
            .collect()
    }

    /// Export edges to CSV format.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("from,to,weight\n");
        for e in &self.edges {
            let from = csv_escape(&e.from);
            let to = csv_escape(&e.to);
            out.push_str(&format!("{},{},{}\n", from, to, e.weight));
        }
        out
    }

    // =========================================================================
    // Mutation (store-only)
    // =========================================================================

    /// Append a vertex whose id is not yet present.
    pub(crate) fn push_vertex(&mut self, vertex: Vertex) -> usize {
        let idx = self.adjacency.add_node();
        self.index.insert(vertex.id.clone(), idx);
        self.vertices.push(vertex);
        idx
    }

    /// Insert `from → to` unless present. Returns true if inserted.
    pub(crate) fn insert_edge(&mut self, from: usize, to: usize, weight: Option<f64>) -> bool {
        if let Some(&pos) = self.edge_index.get(&(from, to)) {
            if let Some(w) = weight {
                self.edges[pos].weight = w;
            }
            return false;
        }
        let mut edge = Edge::new(self.vertices[from].id.clone(), self.vertices[to].id.clone());
        if let Some(w) = weight {
            edge.weight = w;
        }
        self.edge_index.insert((from, to), self.edges.len());
        self.edges.push(edge);
        self.adjacency.add_edge(from, to);
        true
    }

    /// Overwrite every vertex label. `labels` is indexed like `vertices`.
    pub(crate) fn set_labels(&mut self, labels: &[CitationLabel]) {
        for (vertex, label) in self.vertices.iter_mut().zip(labels) {
            vertex.label = *label;
        }
    }

    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }
}

/// Escape a CSV field value.
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Trait for graph algorithms that operate on a snapshot.
pub trait GraphAlgorithm {
    /// The result type of this algorithm.
    type Output;
    /// Execute the algorithm on the given snapshot.
    fn execute(&self, snapshot: &GraphSnapshot) -> Self::Output;
}
