//! Error types for taxonomy loading
//!
//! Validation findings are not errors; only failing to read or decode the
//! document is.

use std::path::PathBuf;

/// Errors while loading a taxonomy document
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid taxonomy JSON
    #[error("invalid taxonomy json: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaxonomyError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for taxonomy loading
pub type TaxonomyResult<T> = Result<T, TaxonomyError>;
