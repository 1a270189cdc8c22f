//! Command execution logic.
//!
//! Each command renders into a caller-supplied writer so it can be tested
//! without capturing stdout.

use anyhow::{Context, Result, bail};
use knot::{Graph, GraphConfig, dot};
use std::fs;
use std::io::Write;
use tracing::{debug, info};

use super::args::{AdjacencyArgs, DfsArgs, DotArgs, GraphArgs};
use crate::output::{
    self, IndexedVertex, MatrixJson, OutputConfig, OutputMode, SummaryJson, VisitJson,
};

/// Assemble the graph described by the global options.
pub fn build_graph(args: &GraphArgs) -> Result<Graph> {
    let config = match &args.config {
        Some(path) => crate::config::load(path)?,
        None => GraphConfig::default(),
    };
    let mut graph = Graph::with_config(config);

    for name in &args.vertices {
        graph
            .add_vertex(name)
            .with_context(|| format!("Failed to add vertex '{name}'"))?;
    }
    for edge in &args.edges {
        graph
            .add_edge(&edge.start, &edge.end, edge.length)
            .with_context(|| format!("Failed to add edge {edge}"))?;
    }
    for pair in &args.remove_edges {
        graph
            .delete_edge(&pair.start, &pair.end)
            .with_context(|| format!("Failed to remove edge {pair}"))?;
    }
    for name in &args.remove_vertices {
        graph
            .delete_vertex(name)
            .with_context(|| format!("Failed to remove vertex '{name}'"))?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Built graph from arguments"
    );
    Ok(graph)
}

/// Execute the summary command
pub fn execute_summary<W: Write>(
    w: &mut W,
    graph: &Graph,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    match mode {
        OutputMode::Json => output::write_json(w, &SummaryJson::new(graph))?,
        OutputMode::Text => output::write_summary(w, graph, config)?,
    }
    Ok(())
}

/// Execute the adjacency command
pub fn execute_adjacency<W: Write>(
    w: &mut W,
    graph: &Graph,
    args: &AdjacencyArgs,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    if !graph.has_vertex(&args.vertex) {
        bail!("Vertex '{}' not found", args.vertex);
    }

    let successors: Vec<IndexedVertex> = graph
        .adjacency_list(&args.vertex)
        .into_iter()
        .filter_map(|index| {
            graph.vertex_name(index).map(|name| IndexedVertex {
                index,
                name: name.to_string(),
            })
        })
        .collect();

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &serde_json::json!({
                "vertex": args.vertex,
                "successors": successors,
            }),
        )?,
        OutputMode::Text => output::write_adjacency(w, &args.vertex, &successors, config)?,
    }
    Ok(())
}

/// Execute the matrix command
pub fn execute_matrix<W: Write>(
    w: &mut W,
    graph: &Graph,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let matrix = graph
        .build_adjacency_matrix()
        .context("Failed to build adjacency matrix")?;

    match mode {
        OutputMode::Json => output::write_json(w, &MatrixJson::from(&matrix))?,
        OutputMode::Text => output::write_grid(w, &matrix, config)?,
    }
    Ok(())
}

/// Execute the paths command
pub fn execute_paths<W: Write>(
    w: &mut W,
    graph: &Graph,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let distances = graph
        .all_pairs_shortest_paths()
        .context("Failed to compute shortest paths")?;

    match mode {
        OutputMode::Json => output::write_json(w, &MatrixJson::from(&distances))?,
        OutputMode::Text => output::write_grid(w, &distances, config)?,
    }
    Ok(())
}

/// Execute the dfs command
pub fn execute_dfs<W: Write>(
    w: &mut W,
    graph: &mut Graph,
    args: &DfsArgs,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let suffix = args.suffix.as_deref();
    let mut visits = Vec::with_capacity(graph.vertex_count());

    graph
        .depth_first_traverse(|index, name| {
            let renamed = suffix.map(|s| format!("{name}{s}"));
            visits.push(VisitJson {
                index,
                name: name.to_string(),
                renamed: renamed.clone(),
            });
            renamed
        })
        .context("Depth-first traversal stopped")?;

    let edges = suffix.map(|_| graph.edge_records());

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &serde_json::json!({
                "order": visits,
                "edges": edges,
            }),
        )?,
        OutputMode::Text => output::write_visits(w, &visits, edges.as_deref(), config)?,
    }
    Ok(())
}

/// Execute the dot command
pub fn execute_dot<W: Write>(
    w: &mut W,
    graph: &Graph,
    args: &DotArgs,
    mode: OutputMode,
    config: &OutputConfig,
) -> Result<()> {
    let description = dot::to_dot(graph);

    let Some(path) = &args.output else {
        match mode {
            OutputMode::Json => {
                output::write_json(w, &serde_json::json!({ "dot": description }))?;
            }
            OutputMode::Text => write!(w, "{description}")?,
        }
        return Ok(());
    };

    fs::write(path, &description)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "Wrote DOT description");

    match mode {
        OutputMode::Json => output::write_json(
            w,
            &serde_json::json!({ "path": path.display().to_string() }),
        )?,
        OutputMode::Text => {
            let message = format!("Wrote DOT description to {}", path.display());
            writeln!(w, "{}", output::color::success(&message, config))?;
        }
    }
    Ok(())
}
