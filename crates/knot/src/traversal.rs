//! Depth-first traversal with in-place renaming.
//!
//! The walk starts a new tree from every vertex (in index order) that has not
//! been visited yet. Entering a vertex runs three steps in this order:
//!
//! 1. capture its adjacency list (successor *indices*)
//! 2. call the visitor, which may return a new name
//! 3. apply the rename
//!
//! after which the captured successors are descended into in order. Indices
//! are positions, so they stay valid across renames. Edges store vertex
//! handles and need no rewrite.
//!
//! The walk keeps its own frame stack instead of recursing, so long chains do
//! not exhaust the thread stack; the visiting order is the recursive one.

use crate::error::Result;
use crate::graph::Graph;
use std::convert::Infallible;

/// One suspended vertex: its captured successors and how far we got.
struct Frame {
    successors: Vec<usize>,
    next: usize,
}

/// Walk `count` vertices depth-first.
///
/// `enter` is called exactly once per vertex, before its successors, and
/// returns the successors to descend into. The first error it returns stops
/// the walk.
fn walk<E, F>(count: usize, mut enter: F) -> std::result::Result<(), E>
where
    F: FnMut(usize) -> std::result::Result<Vec<usize>, E>,
{
    let mut visited = vec![false; count];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..count {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(Frame {
            successors: enter(root)?,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let Some(&successor) = frame.successors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if successor < count && !visited[successor] {
                visited[successor] = true;
                stack.push(Frame {
                    successors: enter(successor)?,
                    next: 0,
                });
            }
        }
    }

    Ok(())
}

impl Graph {
    /// Visit every vertex once, depth-first, letting `visitor` rename it.
    ///
    /// The visitor receives the vertex index and its current name and returns
    /// `Some(new_name)` to rename the vertex or `None` to keep it. Every edge
    /// incident to a renamed vertex reports the new name afterwards.
    ///
    /// An empty graph is a no-op.
    ///
    /// # Errors
    ///
    /// A rename that fails validation ([`Error::InvalidArgument`]) or collides
    /// with another vertex ([`Error::AlreadyExists`]) stops the traversal.
    /// Renames applied before the failing one are kept.
    ///
    /// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
    /// [`Error::AlreadyExists`]: crate::Error::AlreadyExists
    pub fn depth_first_traverse<V>(&mut self, mut visitor: V) -> Result<()>
    where
        V: FnMut(usize, &str) -> Option<String>,
    {
        let count = self.vertex_count();
        walk(count, |index| {
            let successors = self.adjacency_at(index);
            let current = self.vertex_name(index).unwrap_or_default();
            if let Some(new_name) = visitor(index, current) {
                self.rename_vertex(index, new_name)?;
            }
            Ok(successors)
        })
    }

    /// Vertex indices in depth-first visiting order.
    pub fn dfs_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.vertex_count());
        let Ok(()) = walk::<Infallible, _>(self.vertex_count(), |index| {
            order.push(index);
            Ok(self.adjacency_at(index))
        });
        order
    }
}
