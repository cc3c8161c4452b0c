//! Landing page state
//!
//! Owns the committed location selection and the header search query, and
//! re-derives display state from them on demand. Nothing is cached: the
//! label and filtered sections are recomputed on every call.

use crate::config::BoardConfig;
use crate::error::BoardResult;
use board_location::{catalog, City, LocationSelection, MeasureText, SelectionError};
use board_taxonomy::{LeftRailCategory, SectionFilter, TaxonomySnapshot};

/// Page-level state for the landing page
#[derive(Debug, Clone)]
pub struct HomePage {
    config: BoardConfig,
    taxonomy: TaxonomySnapshot,
    cities: Vec<City>,
    selection: LocationSelection,
    query: String,
}

impl HomePage {
    /// Create page state over a validated taxonomy
    #[must_use]
    pub fn new(config: BoardConfig, taxonomy: TaxonomySnapshot) -> Self {
        let selection = LocationSelection::with_capacity(config.max_selected_cities, config.default_radius_miles);
        Self {
            config,
            taxonomy,
            cities: catalog(),
            selection,
            query: String::new(),
        }
    }

    /// Replace the city catalog
    #[must_use]
    pub fn with_cities(mut self, cities: Vec<City>) -> Self {
        self.cities = cities;
        self
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The taxonomy snapshot
    #[inline]
    #[must_use]
    pub fn taxonomy(&self) -> &TaxonomySnapshot {
        &self.taxonomy
    }

    /// Swap in a freshly loaded snapshot
    pub fn replace_taxonomy(&mut self, taxonomy: TaxonomySnapshot) {
        self.taxonomy = taxonomy;
    }

    /// City catalog offered by the picker
    #[inline]
    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Committed selection
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    /// Add a catalog city to the selection
    ///
    /// # Errors
    /// Unknown, duplicate, or over-capacity selections.
    pub fn select_city(&mut self, city_id: &str) -> BoardResult<()> {
        self.selection.add_by_id(&self.cities, city_id)?;
        tracing::debug!(city_id, selected = self.selection.cities().len(), "city selected");
        Ok(())
    }

    /// Remove a city from the selection
    pub fn deselect_city(&mut self, city_id: &str) -> bool {
        self.selection.remove(city_id)
    }

    /// Set the radius (marks it as edited)
    ///
    /// # Errors
    /// `UnsupportedRadius` unless the value is one of the configured presets.
    pub fn set_radius(&mut self, radius_miles: f64) -> BoardResult<()> {
        if !self.config.is_radius_option(radius_miles) {
            return Err(SelectionError::UnsupportedRadius { radius_miles }.into());
        }
        self.selection.set_radius(radius_miles);
        Ok(())
    }

    /// Restore the configured default radius
    pub fn reset_radius(&mut self) {
        self.selection.reset_radius(self.config.default_radius_miles);
    }

    /// Picker candidates for the city search box
    ///
    /// Unselected catalog cities whose name contains the trimmed query.
    #[must_use]
    pub fn available_cities(&self, query: &str) -> Vec<&City> {
        self.selection.available_cities(&self.cities, query)
    }

    /// Current header search text
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update header search text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Header location label within the configured width
    pub fn location_label<M>(&self, measure: &M) -> String
    where
        M: MeasureText + ?Sized,
    {
        self.selection.label(self.config.label_max_width_px, measure)
    }

    /// Sections to render for the current query
    #[must_use]
    pub fn content(&self) -> SectionFilter<'_> {
        self.taxonomy.search(&self.query)
    }

    /// Left rail entries
    #[inline]
    #[must_use]
    pub fn left_rail(&self) -> &[LeftRailCategory] {
        self.taxonomy.left_rail()
    }
}
