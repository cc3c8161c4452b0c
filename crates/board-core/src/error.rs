//! Error types for the board shell
//!
//! Wraps the member crates' errors so the shell and CLI deal in one type.

use board_location::SelectionError;
use board_taxonomy::TaxonomyError;
use std::path::PathBuf;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values are inconsistent
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Combined board error
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("taxonomy error: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
