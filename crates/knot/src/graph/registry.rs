//! Vertex and edge mutations.
//!
//! Every mutation validates and reserves before it touches storage, so an
//! error leaves the graph exactly as it was.

use super::{Edge, Graph, Vertex, VertexId};
use crate::error::{Error, Result};
use crate::matrix::INFINITY;
use tracing::debug;

impl Graph {
    /// Add a vertex at the end of the vertex sequence.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the name fails validation
    /// - [`Error::AlreadyExists`] if a vertex with this name exists
    /// - [`Error::OutOfMemory`] if the vertex sequence cannot grow
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        self.config().validate_name(name)?;

        if self.has_vertex(name) {
            return Err(Error::AlreadyExists(format!("vertex '{name}'")));
        }

        self.vertices.try_reserve(1)?;
        Ok(self.push_vertex(name))
    }

    /// Delete a vertex and every edge that starts or ends at it.
    ///
    /// The remaining vertices keep their relative order (indices above the
    /// deleted one shift down by one).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::NotFound`] if no vertex has this name
    pub fn delete_vertex(&mut self, name: &str) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let index = self
            .index_of(name)
            .ok_or_else(|| Error::NotFound(format!("vertex '{name}'")))?;
        let id = self.vertices[index].id;

        let before = self.edges.len();
        self.edges.retain(|e| e.start != id && e.end != id);
        let removed_edges = before - self.edges.len();

        self.vertices.remove(index);

        debug!(vertex = name, index, removed_edges, "Deleted vertex");
        Ok(())
    }

    /// Add the directed edge `start -> end`.
    ///
    /// The edge is appended to the edge sequence; endpoints that are not yet
    /// vertices are then appended to the vertex sequence, `start` first.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a name fails validation, the names are
    ///   too long combined, or `length` equals [`INFINITY`]
    /// - [`Error::AlreadyExists`] if the pair `(start, end)` already has an edge
    /// - [`Error::OutOfMemory`] if the registries cannot grow
    pub fn add_edge(&mut self, start: &str, end: &str, length: u64) -> Result<()> {
        self.config().validate_edge_names(start, end)?;

        if length == INFINITY {
            return Err(Error::InvalidArgument(format!(
                "edge '{start}' -> '{end}' length {length} is reserved for 'no edge'"
            )));
        }

        if self.has_edge(start, end) {
            return Err(Error::AlreadyExists(format!("edge '{start}' -> '{end}'")));
        }

        let mut missing = usize::from(!self.has_vertex(start));
        if start != end && !self.has_vertex(end) {
            missing += 1;
        }
        self.edges.try_reserve(1)?;
        self.vertices.try_reserve(missing)?;

        let start_id = self.ensure_vertex(start);
        let end_id = self.ensure_vertex(end);
        self.edges.push(Edge {
            start: start_id,
            end: end_id,
            length,
        });

        debug!(start, end, length, new_vertices = missing, "Added edge");
        Ok(())
    }

    /// Delete the edge `start -> end`, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::NotFound`] if the edge does not exist
    pub fn delete_edge(&mut self, start: &str, end: &str) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let pos = self
            .edge_position(start, end)
            .ok_or_else(|| Error::NotFound(format!("edge '{start}' -> '{end}'")))?;
        self.edges.remove(pos);

        debug!(start, end, "Deleted edge");
        Ok(())
    }

    /// Rename the vertex at `index`.
    ///
    /// Edges follow automatically since they store handles.
    pub(crate) fn rename_vertex(&mut self, index: usize, new_name: String) -> Result<()> {
        let Some(current) = self.vertex_name(index) else {
            return Err(Error::NotFound(format!("vertex index {index}")));
        };
        if current == new_name {
            return Ok(());
        }

        self.config().validate_name(&new_name)?;
        if self.has_vertex(&new_name) {
            return Err(Error::AlreadyExists(format!("vertex '{new_name}'")));
        }

        let vertex = &mut self.vertices[index];
        debug!(from = %vertex.name, to = %new_name, index, "Renamed vertex");
        vertex.name = new_name;
        Ok(())
    }

    /// Handle of `name`, appending it as a new vertex if missing.
    ///
    /// Callers must have reserved room in the vertex sequence.
    fn ensure_vertex(&mut self, name: &str) -> VertexId {
        match self.vertex_id(name) {
            Some(id) => id,
            None => self.push_vertex(name),
        }
    }

    fn push_vertex(&mut self, name: &str) -> VertexId {
        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.vertices.push(Vertex {
            id,
            name: name.to_string(),
        });

        debug!(vertex = name, index = self.vertices.len() - 1, "Added vertex");
        id
    }
}
