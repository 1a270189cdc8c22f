//! CLI argument structs.
//!
//! [`GraphArgs`] describes the graph to build; the remaining structs belong to
//! individual commands.

use clap::{Args, Parser};
use std::path::PathBuf;

use super::validators::{EdgePair, EdgeSpec, parse_edge_pair, parse_edge_spec, validate_vertex};

/// Options that assemble the graph, applied in a fixed order: vertices,
/// edges, edge removals, vertex removals.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Add a vertex (repeatable)
    #[arg(short = 'n', long = "vertex", value_name = "NAME", value_parser = validate_vertex)]
    pub vertices: Vec<String>,

    /// Add an edge as start:end:length (repeatable)
    ///
    /// Missing endpoints are created as vertices.
    #[arg(short, long = "edge", value_name = "START:END:LEN", value_parser = parse_edge_spec)]
    pub edges: Vec<EdgeSpec>,

    /// Remove an edge as start:end after all additions (repeatable)
    #[arg(long = "remove-edge", value_name = "START:END", value_parser = parse_edge_pair)]
    pub remove_edges: Vec<EdgePair>,

    /// Remove a vertex and its incident edges after all additions (repeatable)
    #[arg(long = "remove-vertex", value_name = "NAME", value_parser = validate_vertex)]
    pub remove_vertices: Vec<String>,

    /// YAML file with vertex name rules
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `adjacency` command
#[derive(Parser, Debug, Clone)]
pub struct AdjacencyArgs {
    /// Vertex whose successors to list
    pub vertex: String,
}

/// Arguments for the `dfs` command
#[derive(Parser, Debug, Clone)]
pub struct DfsArgs {
    /// Rename every visited vertex to `name + SUFFIX`
    #[arg(short, long)]
    pub suffix: Option<String>,
}

/// Arguments for the `dot` command
#[derive(Parser, Debug, Clone)]
pub struct DotArgs {
    /// Write the description to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
