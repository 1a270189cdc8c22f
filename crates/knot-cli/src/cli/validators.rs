//! CLI input validation functions.
//!
//! These are used by clap's `value_parser` attribute so malformed edge
//! specifications fail at parse time. Vertex name rules are left to the graph,
//! since they depend on the loaded configuration. Names are taken verbatim,
//! surrounding whitespace included; only edge lengths are trimmed.

use std::fmt;

/// An edge given as `start:end:length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Start vertex name.
    pub start: String,
    /// End vertex name.
    pub end: String,
    /// Edge length.
    pub length: u64,
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.end, self.length)
    }
}

/// An edge endpoint pair given as `start:end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgePair {
    /// Start vertex name.
    pub start: String,
    /// End vertex name.
    pub end: String,
}

impl fmt::Display for EdgePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Split `s` on `:` into exactly `N` non-empty parts.
fn split_fields<const N: usize>(s: &str, format: &str) -> Result<[String; N], String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != N {
        return Err(format!("Invalid edge '{s}'. Expected format: {format}"));
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err(format!("Edge '{s}' has an empty field. Expected format: {format}"));
    }

    let mut fields: [String; N] = std::array::from_fn(|_| String::new());
    for (field, part) in fields.iter_mut().zip(parts) {
        *field = part.to_string();
    }
    Ok(fields)
}

/// Parse an edge specification.
///
/// Expected format: `start:end:length` where length is a non-negative
/// integer. The default name rules forbid `:`, so the split is unambiguous;
/// names containing `:` cannot be given on the command line.
///
/// Examples: `A:B:5`, `home:work:12`
pub fn parse_edge_spec(s: &str) -> Result<EdgeSpec, String> {
    let [start, end, length] = split_fields::<3>(s, "start:end:length")?;
    let length = length
        .trim()
        .parse()
        .map_err(|_| format!("Edge length '{length}' must be a non-negative integer"))?;
    Ok(EdgeSpec { start, end, length })
}

/// Parse an edge endpoint pair.
///
/// Expected format: `start:end`.
pub fn parse_edge_pair(s: &str) -> Result<EdgePair, String> {
    let [start, end] = split_fields::<2>(s, "start:end")?;
    Ok(EdgePair { start, end })
}

/// Validate a vertex name argument.
///
/// Only rejects empty input; the graph applies the remaining name rules.
pub fn validate_vertex(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Vertex name cannot be empty".to_string());
    }
    Ok(s.to_string())
}
