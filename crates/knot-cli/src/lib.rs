//! Knot CLI - build a graph from the command line and inspect it.
//!
//! The binary assembles a [`knot::Graph`] from `--vertex`/`--edge` options and
//! runs one read-only view over it (summary, adjacency, matrices, traversal
//! or DOT export).

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
