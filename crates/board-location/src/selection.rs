//! Committed location selection
//!
//! Holds the ordered city list and radius state the header label is derived
//! from. Capacity and duplicate checks live here, not in the formatter.

use crate::city::{find_city, City, DEFAULT_RADIUS_MILES, MAX_SELECTED_CITIES};
use crate::label::compute_label;
use crate::measure::MeasureText;
use serde::{Deserialize, Serialize};

/// Errors from selection mutations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// City is already part of the selection
    #[error("city already selected: {0}")]
    AlreadySelected(String),

    /// Selection is full
    #[error("selection is full ({capacity} cities)")]
    AtCapacity { capacity: usize },

    /// City id is not in the catalog
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Radius is not one of the offered presets
    #[error("unsupported radius: {radius_miles} mi")]
    UnsupportedRadius { radius_miles: f64 },
}

/// Ordered set of selected cities plus radius state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSelection {
    cities: Vec<City>,
    radius_miles: f64,
    has_edited_radius: bool,
    capacity: usize,
}

impl LocationSelection {
    /// Empty selection with the default radius and capacity
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_SELECTED_CITIES, DEFAULT_RADIUS_MILES)
    }

    /// Empty selection with explicit limits
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize, default_radius_miles: f64) -> Self {
        Self {
            cities: Vec::with_capacity(capacity),
            radius_miles: default_radius_miles,
            has_edited_radius: false,
            capacity,
        }
    }

    /// Selected cities in selection order
    #[inline]
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Current radius in miles
    #[inline]
    #[must_use]
    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    /// Whether the user explicitly changed the radius
    #[inline]
    #[must_use]
    pub fn has_edited_radius(&self) -> bool {
        self.has_edited_radius
    }

    /// Maximum number of cities
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// No more cities can be added
    #[inline]
    #[must_use]
    pub fn is_at_capacity(&self) -> bool {
        self.cities.len() >= self.capacity
    }

    /// Check whether a city id is selected
    #[must_use]
    pub fn contains(&self, city_id: &str) -> bool {
        self.cities.iter().any(|c| c.id == city_id)
    }

    /// Append a city to the selection
    ///
    /// # Errors
    /// `AlreadySelected` for a repeated id, `AtCapacity` when full.
    pub fn add(&mut self, city: City) -> Result<(), SelectionError> {
        if self.contains(&city.id) {
            return Err(SelectionError::AlreadySelected(city.id));
        }
        if self.is_at_capacity() {
            return Err(SelectionError::AtCapacity {
                capacity: self.capacity,
            });
        }
        self.cities.push(city);
        Ok(())
    }

    /// Add a city by id, looked up in `catalog`
    ///
    /// # Errors
    /// `UnknownCity` if the id is not in the catalog, otherwise as [`Self::add`].
    pub fn add_by_id(&mut self, catalog: &[City], city_id: &str) -> Result<(), SelectionError> {
        let city = find_city(catalog, city_id).ok_or_else(|| SelectionError::UnknownCity(city_id.to_string()))?;
        self.add(city.clone())
    }

    /// Remove a city, keeping the order of the rest
    ///
    /// Returns `false` if the city was not selected.
    pub fn remove(&mut self, city_id: &str) -> bool {
        let before = self.cities.len();
        self.cities.retain(|c| c.id != city_id);
        self.cities.len() != before
    }

    /// Set the radius and mark it as user-edited
    pub fn set_radius(&mut self, radius_miles: f64) {
        self.radius_miles = radius_miles;
        self.has_edited_radius = true;
    }

    /// Restore the default radius and clear the edited flag
    pub fn reset_radius(&mut self, default_radius_miles: f64) {
        self.radius_miles = default_radius_miles;
        self.has_edited_radius = false;
    }

    /// Catalog cities still offered by the picker
    ///
    /// Excludes selected cities; filters by case-insensitive substring of
    /// the trimmed query. A blank query offers every unselected city.
    #[must_use]
    pub fn available_cities<'a>(&self, catalog: &'a [City], query: &str) -> Vec<&'a City> {
        let needle = query.trim().to_lowercase();
        catalog
            .iter()
            .filter(|c| !self.contains(&c.id))
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Header label for this selection
    pub fn label<M>(&self, max_width: f64, measure: &M) -> String
    where
        M: MeasureText + ?Sized,
    {
        compute_label(
            &self.cities,
            self.radius_miles,
            self.has_edited_radius,
            max_width,
            measure,
        )
    }
}

impl Default for LocationSelection {
    fn default() -> Self {
        Self::new()
    }
}
