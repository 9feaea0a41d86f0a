//! Error types for the docsearch-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading the document index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The snapshot file could not be read.
    #[error("failed to read index snapshot at {path}: {source}")]
    ReadSnapshot {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The snapshot file is not valid JSON or has the wrong shape.
    #[error("failed to parse index snapshot at {path}: {message}")]
    ParseSnapshot {
        /// Path to the snapshot file.
        path: PathBuf,
        /// Error message from the JSON parser.
        message: String,
    },
}
