//! CLI argument parsing and command dispatch.
//!
//! The graph is described entirely by options; each invocation builds it,
//! runs one command over it and exits.
//!
//! # Commands
//!
//! - `summary`: Vertex and edge lists (the default)
//! - `adjacency`: Successors of one vertex
//! - `matrix`: Adjacency matrix
//! - `paths`: All-pairs shortest distances
//! - `dfs`: Depth-first visiting order, optionally renaming vertices
//! - `dot`: Graphviz DOT description
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//!
//! # Example
//!
//! ```bash
//! knot -e A:B:5 -e B:C:3 paths
//! knot -e A:B:1 -e C:A:2 dfs --suffix _x
//! knot --json -n lonely -e A:B:5 summary
//! knot -e A:B:5 dot --output graph.dot
//! ```

mod args;
mod execute;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;

pub use args::{AdjacencyArgs, DfsArgs, DotArgs, GraphArgs};
pub use execute::build_graph;
pub use validators::{EdgePair, EdgeSpec, parse_edge_pair, parse_edge_spec, validate_vertex};

use crate::output::{OutputConfig, OutputMode};

/// Knot - build a directed graph and inspect it
///
/// Vertices and weighted edges are given as options; the command then prints
/// a view of the resulting graph.
#[derive(Parser, Debug)]
#[command(name = "knot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Graph description
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show vertices and edges
    ///
    /// This is the default when no command is given.
    Summary,

    /// List the successors of a vertex
    ///
    /// Successors are reported with their vertex index, in index order.
    Adjacency(AdjacencyArgs),

    /// Show the adjacency matrix
    ///
    /// Cell (i, j) is the length of the edge from vertex i to vertex j.
    Matrix,

    /// Show all-pairs shortest distances
    Paths,

    /// Walk the graph depth-first
    ///
    /// Prints the visiting order. With `--suffix`, every visited vertex is
    /// renamed and the resulting edges are printed.
    Dfs(DfsArgs),

    /// Export the graph as a Graphviz DOT description
    Dot(DotArgs),
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Output mode selected by `--json`.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the CLI command, writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be built or the command fails.
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.execute_to(&mut handle, &OutputConfig::from_env())
    }

    /// Execute the CLI command, writing to `w`.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph cannot be built or the command fails.
    pub fn execute_to<W: io::Write>(&self, w: &mut W, config: &OutputConfig) -> Result<()> {
        let mut graph = build_graph(&self.graph)?;
        let mode = self.output_mode();

        match &self.command {
            None | Some(Commands::Summary) => execute::execute_summary(w, &graph, mode, config),
            Some(Commands::Adjacency(args)) => {
                execute::execute_adjacency(w, &graph, args, mode, config)
            }
            Some(Commands::Matrix) => execute::execute_matrix(w, &graph, mode, config),
            Some(Commands::Paths) => execute::execute_paths(w, &graph, mode, config),
            Some(Commands::Dfs(args)) => execute::execute_dfs(w, &mut graph, args, mode, config),
            Some(Commands::Dot(args)) => execute::execute_dot(w, &graph, args, mode, config),
        }
    }
}
