//! Knot - a labeled directed graph.
//!
//! The graph keeps named vertices in insertion order and weighted, directed
//! edges between them. On top of the two registries it derives:
//!
//! - adjacency lists ([`Graph::adjacency_list`])
//! - a depth-first walk that may rename vertices ([`Graph::depth_first_traverse`])
//! - a dense adjacency matrix ([`Graph::build_adjacency_matrix`])
//! - all-pairs shortest paths ([`Graph::all_pairs_shortest_paths`])
//! - a Graphviz DOT description ([`dot`])
//!
//! # Example
//!
//! ```
//! use knot::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 5).unwrap();
//! graph.add_edge("B", "C", 3).unwrap();
//!
//! let distances = graph.all_pairs_shortest_paths().unwrap();
//! assert_eq!(distances.distance("A", "C"), Some(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adjacency;
pub mod config;
pub mod dot;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod paths;
pub mod traversal;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{EdgeRecord, EdgeView, Graph, VertexId};
pub use matrix::{Matrix, INFINITY};
