//! Error types for knot graph operations.

use std::collections::TryReserveError;
use thiserror::Error;

/// The error type for knot graph operations.
///
/// `NotFound` and `AlreadyExists` are ordinary control-flow signals for
/// callers (see [`Error::is_control_flow`]); the remaining variants abort the
/// attempted operation and leave the graph unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// A name or length was rejected by validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs at least one vertex.
    #[error("Graph is empty")]
    EmptyGraph,

    /// The referenced vertex or edge does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The vertex or edge is already present.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Growing a registry or allocating a matrix failed.
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    /// A graph description could not be parsed.
    #[error("Invalid format at line {line}: {message}")]
    InvalidFormat {
        /// 1-based line number of the offending statement.
        line: usize,
        /// What was wrong with it.
        message: String,
    },
}

impl Error {
    /// Returns `true` for errors callers are expected to branch on rather
    /// than treat as failures.
    pub fn is_control_flow(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::AlreadyExists(_))
    }
}

/// A specialized Result type for knot operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_classification() {
        assert!(Error::NotFound("A".into()).is_control_flow());
        assert!(Error::AlreadyExists("A".into()).is_control_flow());
        assert!(!Error::EmptyGraph.is_control_flow());
        assert!(!Error::InvalidArgument("bad".into()).is_control_flow());
    }

    #[test]
    fn test_out_of_memory_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err: Error = v.try_reserve(usize::MAX).unwrap_err().into();
        assert!(matches!(err, Error::OutOfMemory(_)));
        assert!(err.to_string().starts_with("Out of memory"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = Error::InvalidFormat {
            line: 3,
            message: "expected ';'".into(),
        };
        assert_eq!(err.to_string(), "Invalid format at line 3: expected ';'");
    }
}
