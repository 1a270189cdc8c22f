//! All-pairs shortest paths.
//!
//! The relaxation is a Floyd-Warshall variant: a pair `(u, v)` is only relaxed
//! through intermediate `i` when the *edges* `u -> i` and `i -> v` both exist.
//! The running distance matrix is not consulted to decide whether a sub-path
//! exists. Consequently only paths whose hops all pass through direct edges
//! around a single intermediate are discovered; multi-hop paths that need a
//! previously relaxed `(u, i)` without a direct edge stay unreachable.
//!
//! A cell holding `0` off the diagonal counts as "no distance yet", so a
//! zero-length edge may be replaced by a longer candidate.

use crate::error::Result;
use crate::graph::Graph;
use crate::matrix::{Matrix, INFINITY};
use tracing::trace;

/// Raw edge existence captured before relaxation starts.
struct EdgeMask {
    size: usize,
    linked: Vec<bool>,
}

impl EdgeMask {
    fn from_matrix(matrix: &Matrix) -> Result<Self> {
        let size = matrix.size();
        let mut linked = Vec::new();
        linked.try_reserve_exact(size * size)?;
        linked.extend(matrix.rows().flatten().map(|&value| value != INFINITY));
        Ok(Self { size, linked })
    }

    fn has(&self, from: usize, to: usize) -> bool {
        self.linked[from * self.size + to]
    }
}

/// Relax `dist` in place, gating every step on `edges`.
fn relax(dist: &mut Matrix, edges: &EdgeMask) {
    let n = dist.size();
    let mut updates = 0usize;

    for i in 0..n {
        for u in 0..n {
            if !edges.has(u, i) {
                continue;
            }
            for v in 0..n {
                if u == v || !edges.has(i, v) {
                    continue;
                }

                let to_mid = dist.raw(u, i);
                let from_mid = dist.raw(i, v);
                let Some(candidate) = to_mid
                    .checked_add(from_mid)
                    .filter(|&sum| sum != INFINITY)
                else {
                    continue;
                };

                let current = dist.raw(u, v);
                if current != INFINITY && current != 0 {
                    if candidate < current {
                        dist.set(u, v, candidate);
                        updates += 1;
                    }
                } else if to_mid != 0 && from_mid != 0 {
                    dist.set(u, v, candidate);
                    updates += 1;
                }
            }
        }
    }

    trace!(size = n, updates, "Relaxed distance matrix");
}

impl Graph {
    /// Shortest distances between every ordered pair of vertices.
    ///
    /// Starts from [`build_adjacency_matrix`](Self::build_adjacency_matrix),
    /// zeroes the diagonal and relaxes through every intermediate vertex (see
    /// the module documentation for the exact gating). Unreachable pairs hold
    /// [`INFINITY`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`](crate::Error::OutOfMemory) if the matrix
    /// or the edge mask cannot be allocated.
    pub fn all_pairs_shortest_paths(&self) -> Result<Matrix> {
        let mut dist = self.build_adjacency_matrix()?;
        let edges = EdgeMask::from_matrix(&dist)?;

        for d in 0..dist.size() {
            dist.set(d, d, 0);
        }

        relax(&mut dist, &edges);
        Ok(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(edges: &[(&str, &str, u64)]) -> Graph {
        let mut graph = Graph::new();
        for &(start, end, length) in edges {
            graph.add_edge(start, end, length).unwrap();
        }
        graph
    }

    #[test]
    fn test_chain_distance() {
        let graph = graph_of(&[("A", "B", 5), ("B", "C", 3)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();

        assert_eq!(dist.distance("A", "C"), Some(8));
        assert_eq!(dist.distance("A", "B"), Some(5));
        assert_eq!(dist.distance("C", "A"), None);
        for i in 0..3 {
            assert_eq!(dist.raw(i, i), 0);
        }
    }

    #[test]
    fn test_shorter_two_hop_path_wins() {
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("A", "C", 10)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "C"), Some(2));
    }

    #[test]
    fn test_direct_edge_kept_when_shorter() {
        let graph = graph_of(&[("A", "B", 4), ("B", "C", 4), ("A", "C", 3)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "C"), Some(3));
    }

    #[test]
    fn test_self_loop_does_not_leak_into_diagonal() {
        let graph = graph_of(&[("A", "A", 7), ("A", "B", 2)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "A"), Some(0));
        assert_eq!(dist.distance("A", "B"), Some(2));
    }

    #[test]
    fn test_cycle_distances() {
        let graph = graph_of(&[("A", "B", 1), ("B", "A", 2)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "B"), Some(1));
        assert_eq!(dist.distance("B", "A"), Some(2));
        assert_eq!(dist.distance("A", "A"), Some(0));
    }

    #[test]
    fn test_three_hop_chain_is_gated_by_raw_edges() {
        // A -> B -> C -> D: A -> D needs (A, C), which has no direct edge.
        let graph = graph_of(&[("A", "B", 1), ("B", "C", 1), ("C", "D", 1)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();

        assert_eq!(dist.distance("A", "C"), Some(2));
        assert_eq!(dist.distance("B", "D"), Some(2));
        assert_eq!(dist.distance("A", "D"), None);
    }

    #[test]
    fn test_zero_length_sub_path_is_not_copied() {
        let graph = graph_of(&[("A", "B", 0), ("B", "C", 4)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "B"), Some(0));
        assert_eq!(dist.distance("A", "C"), None);
    }

    #[test]
    fn test_overflowing_candidate_is_discarded() {
        let graph = graph_of(&[("A", "B", INFINITY - 1), ("B", "C", 5)]);
        let dist = graph.all_pairs_shortest_paths().unwrap();
        assert_eq!(dist.distance("A", "C"), None);
        assert_eq!(dist.distance("B", "C"), Some(5));
    }

    #[test]
    fn test_empty_graph() {
        let dist = Graph::new().all_pairs_shortest_paths().unwrap();
        assert!(dist.is_empty());
    }

    #[test]
    fn test_graph_unchanged_by_computation() {
        let graph = graph_of(&[("A", "B", 5), ("B", "C", 3)]);
        graph.all_pairs_shortest_paths().unwrap();
        assert!(!graph.has_edge("A", "C"));
        assert_eq!(graph.edge_count(), 2);
    }
}
