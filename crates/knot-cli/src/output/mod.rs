//! Output formatting for CLI commands.
//!
//! Every view is rendered either as human-readable text or as a JSON document
//! for programmatic use. Renderers write into any [`Write`] so they can be
//! tested without a terminal.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use knot::{EdgeRecord, Graph, Matrix};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

use color::{bold, dimmed, infinity_symbol, info};

// ============================================================================
// Output Configuration
// ============================================================================

/// Configuration for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to print `inf` instead of `∞`.
    pub use_ascii: bool,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(use_ascii: bool, use_colors: bool) -> Self {
        Self {
            use_ascii,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `KNOT_ASCII`: Set to "1" or "true" for ASCII-only symbols (default: false)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `KNOT_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let use_ascii = match lookup("KNOT_ASCII") {
            Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
            Some(v) if v == "0" || v.eq_ignore_ascii_case("false") || v.is_empty() => false,
            Some(v) => {
                tracing::warn!(
                    env_var = "KNOT_ASCII",
                    value = %v,
                    "Invalid value (expected '1', 'true', '0', or 'false'), using default"
                );
                false
            }
            None => false,
        };

        // Respect NO_COLOR (https://no-color.org/), KNOT_COLOR for explicit control
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("KNOT_COLOR")
                .is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            use_ascii,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_ascii: false,
            use_colors: true,
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// JSON
// ============================================================================

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// Vertex and edge sets of a graph.
#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    /// Vertex names in index order.
    pub vertices: Vec<&'a str>,
    /// Edges in insertion order.
    pub edges: Vec<EdgeRecord>,
}

impl<'a> SummaryJson<'a> {
    /// Snapshot `graph`.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            vertices: graph.vertices().collect(),
            edges: graph.edge_records(),
        }
    }
}

/// A matrix with infinite cells as `null`.
#[derive(Debug, Serialize)]
pub struct MatrixJson<'a> {
    /// Row and column labels.
    pub labels: &'a [String],
    /// Cell values, `None` for infinity.
    pub rows: Vec<Vec<Option<u64>>>,
}

impl<'a> From<&'a Matrix> for MatrixJson<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        Self {
            labels: matrix.labels(),
            rows: matrix.to_options(),
        }
    }
}

/// A vertex addressed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedVertex {
    /// Position in the vertex registry.
    pub index: usize,
    /// Vertex name.
    pub name: String,
}

/// One step of a depth-first walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitJson {
    /// Vertex index.
    pub index: usize,
    /// Name when visited.
    pub name: String,
    /// New name, if the vertex was renamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed: Option<String>,
}

// ============================================================================
// Text Formatting
// ============================================================================

/// Write the vertex list and edge list of `graph`.
pub fn write_summary<W: Write>(w: &mut W, graph: &Graph, config: &OutputConfig) -> io::Result<()> {
    if graph.is_empty() {
        return writeln!(w, "Graph is empty");
    }

    let names: Vec<String> = graph.vertices().map(|name| info(name, config)).collect();
    let header = format!("Vertices ({}):", graph.vertex_count());
    writeln!(w, "{} {}", bold(&header, config), names.join(", "))?;

    let header = format!("Edges ({}):", graph.edge_count());
    writeln!(w, "{}", bold(&header, config))?;
    for edge in graph.edges() {
        writeln!(
            w,
            "  {} -> {} ({})",
            info(edge.start, config),
            info(edge.end, config),
            edge.length
        )?;
    }
    Ok(())
}

/// Write the successors of `vertex`.
pub fn write_adjacency<W: Write>(
    w: &mut W,
    vertex: &str,
    successors: &[IndexedVertex],
    config: &OutputConfig,
) -> io::Result<()> {
    let header = format!("Successors of {vertex} ({}):", successors.len());
    writeln!(w, "{}", bold(&header, config))?;
    for successor in successors {
        let index = format!("[{}]", successor.index);
        writeln!(
            w,
            "  {} {}",
            dimmed(&index, config),
            info(&successor.name, config)
        )?;
    }
    Ok(())
}

/// Write a matrix as a labeled grid.
///
/// All value columns share one width so the grid lines up; the row label
/// column is as wide as the longest label.
pub fn write_grid<W: Write>(w: &mut W, matrix: &Matrix, config: &OutputConfig) -> io::Result<()> {
    if matrix.is_empty() {
        return writeln!(w, "(empty)");
    }

    let infinity = infinity_symbol(config);
    let cells: Vec<Vec<String>> = matrix
        .to_options()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map_or_else(|| infinity.to_string(), |v| v.to_string()))
                .collect()
        })
        .collect();

    let label_width = matrix
        .labels()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let cell_width = cells
        .iter()
        .flatten()
        .map(|c| c.chars().count())
        .chain(std::iter::once(label_width))
        .max()
        .unwrap_or(0);

    write!(w, "{:label_width$}", "")?;
    for label in matrix.labels() {
        write!(w, " {}", bold(&format!("{label:>cell_width$}"), config))?;
    }
    writeln!(w)?;

    for (label, row) in matrix.labels().iter().zip(&cells) {
        write!(w, "{}", bold(&format!("{label:<label_width$}"), config))?;
        for cell in row {
            let padded = format!("{cell:>cell_width$}");
            if cell == infinity {
                write!(w, " {}", dimmed(&padded, config))?;
            } else {
                write!(w, " {padded}")?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Write a depth-first visiting order, and the edges after renaming if any
/// vertex was renamed.
pub fn write_visits<W: Write>(
    w: &mut W,
    visits: &[VisitJson],
    edges: Option<&[EdgeRecord]>,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(w, "{}", bold("Visit order:", config))?;
    for (step, visit) in visits.iter().enumerate() {
        let position = format!("{:>3}.", step + 1);
        write!(w, "{} {}", dimmed(&position, config), info(&visit.name, config))?;
        if let Some(renamed) = &visit.renamed {
            write!(w, " -> {}", info(renamed, config))?;
        }
        writeln!(w)?;
    }

    if let Some(edges) = edges {
        writeln!(w, "{}", bold("Edges after rename:", config))?;
        for edge in edges {
            writeln!(w, "  {edge}")?;
        }
    }
    Ok(())
}
