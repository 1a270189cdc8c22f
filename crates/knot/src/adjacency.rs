//! Adjacency lists derived from the edge set.
//!
//! Adjacency is never stored; each call scans the current edges, so the
//! result always reflects the latest mutations.

use crate::graph::Graph;

impl Graph {
    /// Indices of the successors of `vertex`, in edge-insertion order.
    ///
    /// An unknown vertex has no successors; this is not an error.
    pub fn adjacency_list(&self, vertex: &str) -> Vec<usize> {
        self.index_of(vertex)
            .map(|index| self.adjacency_at(index))
            .unwrap_or_default()
    }

    /// Number of vertices `x` such that `has_edge(vertex, x)` holds.
    ///
    /// Computed independently of [`adjacency_list`](Self::adjacency_list) by
    /// probing every vertex.
    pub fn adjacency_list_size(&self, vertex: &str) -> usize {
        self.vertices()
            .filter(|candidate| self.has_edge(vertex, candidate))
            .count()
    }

    /// Successor indices of the vertex at `index`.
    pub(crate) fn adjacency_at(&self, index: usize) -> Vec<usize> {
        let Some(id) = self.vertices.get(index).map(|v| v.id) else {
            return Vec::new();
        };

        self.edges
            .iter()
            .filter(|edge| edge.start == id)
            .filter_map(|edge| self.position(edge.end))
            .collect()
    }
}
