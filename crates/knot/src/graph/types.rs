//! Vertex and edge types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a vertex.
///
/// Handles are assigned from a per-graph counter when a vertex is created and
/// are never reused, so they survive renames and the index shifts caused by
/// deleting other vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// The raw handle value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A vertex: stable handle plus its current display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) name: String,
}

/// A directed edge stored by endpoint handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) length: u64,
}

/// Borrowed view of an edge with its endpoints resolved to current names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    /// Name of the start vertex.
    pub start: &'a str,
    /// Name of the end vertex.
    pub end: &'a str,
    /// Edge length.
    pub length: u64,
}

/// Owned snapshot of an edge, detached from the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Name of the start vertex.
    pub start: String,
    /// Name of the end vertex.
    pub end: String,
    /// Edge length.
    pub length: u64,
}

impl From<EdgeView<'_>> for EdgeRecord {
    fn from(view: EdgeView<'_>) -> Self {
        Self {
            start: view.start.to_string(),
            end: view.end.to_string(),
            length: view.length,
        }
    }
}

impl fmt::Display for EdgeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.start, self.end, self.length)
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.start, self.end, self.length)
    }
}
