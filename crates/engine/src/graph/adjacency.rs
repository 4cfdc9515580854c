//! In-memory adjacency index for fast graph traversals.
//!
//! Vertices are addressed by their dense insertion index, which is also their
//! position in the snapshot's vertex list. Degrees are read off the neighbor
//! lists, so they can never drift from the edge collection.

/// Forward and reverse neighbor lists, one slot per vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyIndex {
    /// Forward adjacency: citer → cited.
    outgoing: Vec<Vec<usize>>,
    /// Reverse adjacency: cited → citer.
    incoming: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex slot and return its index.
    pub fn add_node(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    /// Add an edge. The caller guarantees the pair is not already present.
    pub fn add_edge(&mut self, src: usize, dst: usize) {
        self.outgoing[src].push(dst);
        self.incoming[dst].push(src);
    }

    /// Number of vertex slots.
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Vertices cited by `idx`.
    pub fn outgoing(&self, idx: usize) -> &[usize] {
        self.outgoing.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Vertices citing `idx`.
    pub fn incoming(&self, idx: usize) -> &[usize] {
        self.incoming.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Out-degree of `idx`.
    pub fn degree_out(&self, idx: usize) -> usize {
        self.outgoing(idx).len()
    }

    /// In-degree of `idx`.
    pub fn degree_in(&self, idx: usize) -> usize {
        self.incoming(idx).len()
    }
}
