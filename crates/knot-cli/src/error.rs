//! Error types for knot CLI operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for knot CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Configuration file is malformed.
    #[error("Configuration error in {}: {message}", path.display())]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// A specialized Result type for knot CLI operations.
pub type Result<T> = std::result::Result<T, Error>;
