//! Dense square matrices of edge lengths.
//!
//! A [`Matrix`] is an independent value: it copies the vertex labels at build
//! time and never observes later graph mutations.

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use std::collections::HashMap;
use tracing::trace;

/// Sentinel for "no edge" / "no path" in a matrix cell.
///
/// Edges may not carry this length, so a finite cell is never confused with it.
pub const INFINITY: u64 = u64::MAX;

/// A `size x size` grid addressed by vertex index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    labels: Vec<String>,
    rows: Vec<Vec<u64>>,
}

impl Matrix {
    /// Allocate a matrix with every cell set to `value`.
    ///
    /// Every row is reserved fallibly. On failure the rows allocated so far
    /// are dropped with the partially built matrix.
    pub(crate) fn filled(labels: Vec<String>, value: u64) -> Result<Self> {
        let size = labels.len();

        let mut rows = Vec::new();
        rows.try_reserve_exact(size)?;
        for _ in 0..size {
            let mut row = Vec::new();
            row.try_reserve_exact(size)?;
            row.resize(size, value);
            rows.push(row);
        }

        Ok(Self { labels, rows })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` for the matrix of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vertex names in row/column order, as they were when the matrix was built.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Row/column index of a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Finite value of cell `(row, col)`.
    ///
    /// Returns `None` for an infinite cell or out-of-range coordinates.
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|&value| value != INFINITY)
    }

    /// Raw value of cell `(row, col)`, [`INFINITY`] included.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn raw(&self, row: usize, col: usize) -> u64 {
        self.rows[row][col]
    }

    /// Finite value of the cell addressed by labels.
    pub fn distance(&self, from: &str, to: &str) -> Option<u64> {
        self.get(self.index_of(from)?, self.index_of(to)?)
    }

    /// One row of raw values.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[u64] {
        &self.rows[row]
    }

    /// All rows of raw values, in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Rows with infinite cells mapped to `None`.
    pub fn to_options(&self) -> Vec<Vec<Option<u64>>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| (value != INFINITY).then_some(value))
                    .collect()
            })
            .collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u64) {
        self.rows[row][col] = value;
    }
}

impl Graph {
    /// Build the adjacency matrix of the current graph.
    ///
    /// Cell `(i, j)` holds the length of the edge from vertex `i` to vertex
    /// `j`, or [`INFINITY`] if there is none. The diagonal is only finite for
    /// self-loops.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if any part
    /// of the matrix cannot be allocated; nothing is leaked.
    pub fn build_adjacency_matrix(&self) -> Result<Matrix> {
        let mut labels = Vec::new();
        labels.try_reserve_exact(self.vertex_count())?;
        labels.extend(self.vertices().map(str::to_string));

        let mut matrix = Matrix::filled(labels, INFINITY)?;

        let mut index: HashMap<VertexId, usize> = HashMap::new();
        index.try_reserve(self.vertex_count())?;
        index.extend(self.vertices.iter().enumerate().map(|(i, v)| (v.id, i)));

        for edge in &self.edges {
            let (Some(&i), Some(&j)) = (index.get(&edge.start), index.get(&edge.end)) else {
                continue;
            };
            // First matching edge wins.
            if matrix.raw(i, j) == INFINITY {
                matrix.set(i, j, edge.length);
            }
        }

        trace!(
            size = matrix.size(),
            edges = self.edge_count(),
            "Built adjacency matrix"
        );
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_matrix() {
        let mut graph = Graph::new();
        graph.add_vertex("A").unwrap();
        graph.add_vertex("B").unwrap();
        graph.add_vertex("C").unwrap();
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("B", "C", 3).unwrap();

        let matrix = graph.build_adjacency_matrix().unwrap();

        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.labels(), ["A", "B", "C"]);
        for i in 0..3 {
            for j in 0..3 {
                let expected = match (i, j) {
                    (0, 1) => 5,
                    (1, 2) => 3,
                    _ => INFINITY,
                };
                assert_eq!(matrix.raw(i, j), expected, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_empty_graph_matrix() {
        let matrix = Graph::new().build_adjacency_matrix().unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().len(), 0);
    }

    #[test]
    fn test_self_loop_on_diagonal() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 4).unwrap();
        let matrix = graph.build_adjacency_matrix().unwrap();
        assert_eq!(matrix.get(0, 0), Some(4));
    }

    #[test]
    fn test_zero_length_edge_is_finite() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 0).unwrap();
        let matrix = graph.build_adjacency_matrix().unwrap();
        assert_eq!(matrix.get(0, 1), Some(0));
        assert_eq!(matrix.get(1, 0), None);
    }

    #[test]
    fn test_matrix_is_decoupled_from_graph() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5).unwrap();
        let matrix = graph.build_adjacency_matrix().unwrap();

        graph.delete_edge("A", "B").unwrap();
        graph.add_vertex("C").unwrap();

        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.distance("A", "B"), Some(5));
    }

    #[test]
    fn test_accessors() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5).unwrap();
        let matrix = graph.build_adjacency_matrix().unwrap();

        assert_eq!(matrix.get(7, 0), None);
        assert_eq!(matrix.distance("A", "Z"), None);
        assert_eq!(matrix.row(0), &[INFINITY, 5]);
        assert_eq!(
            matrix.to_options(),
            vec![vec![None, Some(5)], vec![None, None]]
        );
    }

    #[test]
    fn test_matrix_after_vertex_delete_uses_new_indices() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        graph.add_edge("A", "C", 9).unwrap();
        graph.delete_vertex("B").unwrap();

        let matrix = graph.build_adjacency_matrix().unwrap();
        assert_eq!(matrix.labels(), ["A", "C"]);
        assert_eq!(matrix.get(0, 1), Some(9));
    }
}
