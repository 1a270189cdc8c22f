//! Loading graph name rules from a YAML file.
//!
//! The file uses the kebab-case keys of [`GraphConfig`]; omitted keys keep
//! their defaults:
//!
//! ```yaml
//! max-name-len: 32
//! forbidden-chars: "-:;"
//! ```

use crate::error::{Error, Result};
use knot::GraphConfig;
use std::fs;
use std::path::Path;

/// Load a [`GraphConfig`] from a YAML file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not a valid configuration.
pub fn load(path: &Path) -> Result<GraphConfig> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content).map_err(|message| Error::Config {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse YAML text into a [`GraphConfig`].
///
/// An empty document yields the defaults.
fn parse(content: &str) -> std::result::Result<GraphConfig, String> {
    if content.trim().is_empty() {
        return Ok(GraphConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}
