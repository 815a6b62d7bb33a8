//! Dataset-specific error types
//!
//! Errors that can occur while reading play, library and clip datasets from
//! disk. Each variant carries the offending path for context.

use std::path::PathBuf;
use thiserror::Error;

/// Dataset loading errors
#[derive(Debug, Error)]
pub enum DataError {
    /// Dataset file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON for the expected shape
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No path given on the command line and none configured
    #[error("No {0} dataset given and none configured")]
    MissingPath(&'static str),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
