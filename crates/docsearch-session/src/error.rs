//! Error types for the docsearch-session crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading or writing durable session state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading or writing a store file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A store file exists but could not be parsed.
    #[error("failed to parse store file at {path}: {message}")]
    Parse {
        /// Path to the store file.
        path: PathBuf,
        /// Error message from the JSON parser.
        message: String,
    },
}
