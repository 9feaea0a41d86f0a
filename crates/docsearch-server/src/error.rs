//! Error types for the docsearch-server crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while serving or shaping search responses.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve on the configured address.
    #[error("server error on {addr}: {source}")]
    Serve {
        /// Address the server was bound (or binding) to.
        addr: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The metadata file could not be read.
    #[error("failed to read metadata at {path}: {source}")]
    ReadMeta {
        /// Path to the metadata file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The metadata file is not valid JSON or has the wrong shape.
    #[error("failed to parse metadata at {path}: {message}")]
    ParseMeta {
        /// Path to the metadata file.
        path: PathBuf,
        /// Error message from the JSON parser.
        message: String,
    },

    /// A result could not be shaped for the response.
    ///
    /// Fatal for the whole request: partial results are never returned.
    #[error("failed to shape result: {0}")]
    Shape(String),
}
