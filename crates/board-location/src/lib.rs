//! Board Location
//!
//! City selection and the header location label.
//!
//! # Overview
//!
//! - **City**: selectable city fixture with a stable id
//! - **LocationSelection**: ordered, capacity-bounded selection plus radius state
//! - **compute_label**: bounded-width label with a deterministic overflow form
//! - **MeasureText**: injected width measurement (closures, fixed advance, terminal cells)
//!
//! # Example
//!
//! ```rust
//! use board_location::{catalog, FixedAdvance, LocationSelection};
//!
//! let cities = catalog();
//! let mut selection = LocationSelection::new();
//! selection.add_by_id(&cities, "city_boston").unwrap();
//! selection.set_radius(25.0);
//!
//! assert_eq!(selection.label(240.0, &FixedAdvance(8.0)), "Boston ± 25 mi");
//! ```

#![warn(missing_docs)]

pub mod city;
pub mod label;
pub mod measure;
pub mod selection;

// Re-exports
pub use city::{catalog, find_city, City, DEFAULT_RADIUS_MILES, MAX_SELECTED_CITIES, RADIUS_OPTIONS_MILES};
pub use label::{compute_label, radius_suffix, DEFAULT_LOCATION_LABEL};
pub use measure::{CellWidth, FixedAdvance, MeasureText};
pub use selection::{LocationSelection, SelectionError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for location handling
    pub use crate::{compute_label, CellWidth, City, FixedAdvance, LocationSelection, MeasureText, SelectionError};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
