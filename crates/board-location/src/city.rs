//! Selectable cities and radius presets
//!
//! The city list is fixture data: ids are stable and never derived from
//! display names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of cities a selection may hold
pub const MAX_SELECTED_CITIES: usize = 3;

/// Radius presets offered by the picker, in miles
pub const RADIUS_OPTIONS_MILES: [u32; 6] = [5, 8, 10, 25, 50, 100];

/// Radius applied before the user touches the radius control
pub const DEFAULT_RADIUS_MILES: f64 = 10.0;

/// A selectable city
///
/// Identity is `id`; `name` is only the display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// Stable identifier (e.g. `city_sf`)
    pub id: String,
    /// Display name
    pub name: String,
}

impl City {
    /// Create a city from id and display name
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The built-in city catalog
#[must_use]
pub fn catalog() -> Vec<City> {
    vec![
        City::new("city_sf", "San Francisco"),
        City::new("city_boston", "Boston"),
        City::new("city_nyc", "New York City"),
    ]
}

/// Look up a catalog city by id
#[must_use]
pub fn find_city<'a>(cities: &'a [City], id: &str) -> Option<&'a City> {
    cities.iter().find(|c| c.id == id)
}
