//! The graph container: vertex registry and edge set.
//!
//! # Storage
//!
//! - `vertices`: `Vec<Vertex>` in insertion order. A vertex's position in this
//!   vector is its *index*, the address used by adjacency lists, traversal and
//!   matrices.
//! - `edges`: `Vec<Edge>` in insertion order, endpoints stored as [`VertexId`]
//!   handles rather than names.
//!
//! Because edges reference handles, renaming a vertex changes what every
//! incident edge reports without touching the edge set.
//!
//! # Invariants
//!
//! - Vertex names are unique and pass [`GraphConfig::validate_name`].
//! - Every edge endpoint is a handle of a vertex in `vertices`.
//! - No two edges share the same `(start, end)` pair.
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `add_vertex` | O(V) (uniqueness scan) |
//! | `delete_vertex` | O(V + E) |
//! | `add_edge` | O(V + E) |
//! | `delete_edge` | O(V + E) |
//! | `has_vertex` | O(V) |
//! | `has_edge` | O(V + E) |

mod registry;
mod types;

pub use types::{EdgeRecord, EdgeView, VertexId};
use types::{Edge, Vertex};

use crate::config::GraphConfig;

/// A labeled directed graph with weighted edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,
    next_id: u64,
    config: GraphConfig,
}

impl Graph {
    /// Create an empty graph with the default name rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with custom name rules.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The name rules this graph validates against.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if a vertex with this name exists.
    ///
    /// Never fails: empty or malformed names simply report `false`.
    pub fn has_vertex(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns `true` if the edge `start -> end` exists.
    ///
    /// Never fails: unknown or malformed names simply report `false`.
    pub fn has_edge(&self, start: &str, end: &str) -> bool {
        self.edge_position(start, end).is_some()
    }

    /// Length of the edge `start -> end`, if present.
    pub fn edge_length(&self, start: &str, end: &str) -> Option<u64> {
        self.edge_position(start, end)
            .map(|pos| self.edges[pos].length)
    }

    /// Index of the vertex with this name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.name == name)
    }

    /// Handle of the vertex with this name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().find(|v| v.name == name).map(|v| v.id)
    }

    /// Name of the vertex at `index`.
    pub fn vertex_name(&self, index: usize) -> Option<&str> {
        self.vertices.get(index).map(|v| v.name.as_str())
    }

    /// Current name of the vertex with handle `id`.
    pub fn name_of(&self, id: VertexId) -> Option<&str> {
        self.vertices
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.name.as_str())
    }

    /// Vertex names in index order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vertices.iter().map(|v| v.name.as_str())
    }

    /// Edges in insertion order, endpoints resolved to current names.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        self.edges.iter().filter_map(|edge| {
            Some(EdgeView {
                start: self.name_of(edge.start)?,
                end: self.name_of(edge.end)?,
                length: edge.length,
            })
        })
    }

    /// Owned snapshot of the edge set, in insertion order.
    pub fn edge_records(&self) -> Vec<EdgeRecord> {
        self.edges().map(EdgeRecord::from).collect()
    }

    /// Index of the vertex with handle `id`.
    pub(crate) fn position(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|v| v.id == id)
    }

    /// Position of the edge `start -> end` in the edge set.
    pub(crate) fn edge_position(&self, start: &str, end: &str) -> Option<usize> {
        let start = self.vertex_id(start)?;
        let end = self.vertex_id(end)?;
        self.edges
            .iter()
            .position(|e| e.start == start && e.end == end)
    }
}
