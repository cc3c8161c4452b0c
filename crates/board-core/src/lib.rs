//! Board Core - landing page shell
//!
//! Ties the location and taxonomy crates together:
//! - Holds page state (selection, radius, search query)
//! - Re-derives the header label and the visible sections on demand
//! - Loads configuration
//! - Renders reports for the `board` CLI
//!
//! # Example
//!
//! ```rust
//! use board_core::{BoardConfig, HomePage};
//! use board_location::FixedAdvance;
//! use board_taxonomy::TaxonomySnapshot;
//!
//! let taxonomy = TaxonomySnapshot::from_json_str(r#"{"sections": []}"#).unwrap();
//! let mut page = HomePage::new(BoardConfig::new(), taxonomy);
//!
//! page.select_city("city_boston").unwrap();
//! page.set_radius(25.0).unwrap();
//! assert_eq!(page.location_label(&FixedAdvance(8.0)), "Boston ± 25 mi");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod page;
pub mod report;

// Re-exports for convenience
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult, ConfigError};
pub use page::HomePage;
pub use report::{search_text, validation_text, ValidationSummary};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the board shell
    pub use crate::{BoardConfig, BoardError, HomePage};
    pub use board_location::{CellWidth, City, FixedAdvance, LocationSelection, MeasureText};
    pub use board_taxonomy::{SectionFilter, TaxonomySnapshot};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
