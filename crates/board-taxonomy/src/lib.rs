//! Board Taxonomy
//!
//! Category taxonomy for the landing page: data model, search filter and
//! load-time validation.
//!
//! # Architecture
//!
//! ```text
//! JSON → TaxonomyData → validate → TaxonomySnapshot → filter_sections(query) → SectionFilter
//!                          ↓
//!               TaxonomyReport / CoherenceReport (advisory, logged)
//! ```
//!
//! # Example
//!
//! ```rust
//! use board_taxonomy::TaxonomySnapshot;
//!
//! let snapshot = TaxonomySnapshot::from_json_str(r#"{
//!     "sections": [{"id": "housing", "title": "housing", "items": [
//!         {"id": "housing_apts", "label": "apts / housing"},
//!         {"id": "housing_swap", "label": "housing swap"}
//!     ]}],
//!     "left_rail_categories": [{"id": "nav_housing", "label": "housing", "section_id": "housing"}]
//! }"#).unwrap();
//!
//! assert!(snapshot.is_clean());
//! assert_eq!(snapshot.search("swap").match_count(), Some(1));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod model;
pub mod search;
pub mod snapshot;
pub mod validation;

// Re-exports for convenience
pub use error::{TaxonomyError, TaxonomyResult};
pub use model::{derive_left_rail, LeftRailCategory, TaxonomyData, TaxonomyItem, TaxonomyMeta, TaxonomySection};
pub use search::{filter_sections, item_matches, normalize_query, SectionFilter};
pub use snapshot::TaxonomySnapshot;
pub use validation::{
    collect_all_ids, find_duplicate_ids, find_shape_issues, validate_left_rail_coherence, validate_taxonomy,
    CoherenceReport, CoherenceWarning, ShapeIssue, TaxonomyReport,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the taxonomy
    pub use crate::{
        filter_sections, LeftRailCategory, SectionFilter, TaxonomyData, TaxonomyError, TaxonomyItem,
        TaxonomySection, TaxonomySnapshot,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
