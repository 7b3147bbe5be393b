//! Error types for the converter
//!
//! Only I/O-layer failures are fatal. Record-level problems flow through
//! [`crate::diagnostics::Report`] and never abort a run.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal converter errors
#[derive(Debug, Error)]
pub enum Error {
    /// Input file or logo image could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Records file is not the expected JSON shape
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Dataset could not be serialized
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for converter operations
pub type Result<T> = std::result::Result<T, Error>;
