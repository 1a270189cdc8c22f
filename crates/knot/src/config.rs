//! Name validation rules for a graph.
//!
//! The rules are plain data so a host can load them from a configuration file.
//! Every field has a default, so a partial file only overrides what it names.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default maximum vertex name length in bytes.
pub const DEFAULT_MAX_NAME_LEN: usize = 256;

/// Default maximum combined length of an edge's two endpoint names.
pub const DEFAULT_MAX_EDGE_NAMES_LEN: usize = 256;

/// Characters that may never appear in a vertex name.
///
/// These are the separators used by graph description formats (quotes,
/// braces, arrows, statement terminators).
pub const DEFAULT_FORBIDDEN_CHARS: &str = "\"'#%()><{}-/\\|:;,";

/// Validation rules applied to vertex names and edge endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GraphConfig {
    /// Maximum vertex name length in bytes.
    pub max_name_len: usize,

    /// Maximum `start.len() + end.len()` accepted by `add_edge`.
    pub max_edge_names_len: usize,

    /// Characters rejected anywhere in a name.
    ///
    /// May be empty. DOT export escapes names, so it does not depend on this
    /// set.
    pub forbidden_chars: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_edge_names_len: DEFAULT_MAX_EDGE_NAMES_LEN,
            forbidden_chars: DEFAULT_FORBIDDEN_CHARS.to_string(),
        }
    }
}

impl GraphConfig {
    /// Validate a single vertex name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the name is empty, longer than
    /// `max_name_len` bytes, or contains a forbidden character.
    pub fn validate_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "vertex name cannot be empty".to_string(),
            ));
        }

        if name.len() > self.max_name_len {
            return Err(Error::InvalidArgument(format!(
                "vertex name cannot exceed {} bytes, got {}",
                self.max_name_len,
                name.len()
            )));
        }

        if let Some(c) = name.chars().find(|c| self.forbidden_chars.contains(*c)) {
            return Err(Error::InvalidArgument(format!(
                "vertex name '{name}' contains forbidden character '{c}'"
            )));
        }

        Ok(())
    }

    /// Validate both endpoint names of an edge and their combined length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either name fails
    /// [`validate_name`](Self::validate_name) or the two names together exceed
    /// `max_edge_names_len` bytes.
    pub fn validate_edge_names(&self, start: &str, end: &str) -> Result<()> {
        self.validate_name(start)?;
        self.validate_name(end)?;

        let combined = start.len() + end.len();
        if combined > self.max_edge_names_len {
            return Err(Error::InvalidArgument(format!(
                "edge '{start}' -> '{end}' names cannot exceed {} bytes combined, got {combined}",
                self.max_edge_names_len
            )));
        }

        Ok(())
    }

    /// Returns `true` if `name` passes [`validate_name`](Self::validate_name).
    pub fn is_valid_name(&self, name: &str) -> bool {
        self.validate_name(name).is_ok()
    }
}
