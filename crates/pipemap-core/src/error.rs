//! Error types for descriptor loading.
//!
//! Graph assembly itself cannot fail; only reading descriptor files off
//! disk can. [`LoadError`] keeps the offending path so callers can report
//! which descriptor was at fault.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced when loading JSON descriptors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The descriptor file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor file is not valid JSON for the expected shape.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The path of the descriptor that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } => path,
            LoadError::Parse { path, .. } => path,
        }
    }
}
