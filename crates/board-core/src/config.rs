//! Board configuration
//!
//! Defaults match the landing page design; a TOML file may override any
//! subset of fields.

use crate::error::ConfigError;
use board_location::{DEFAULT_RADIUS_MILES, MAX_SELECTED_CITIES, RADIUS_OPTIONS_MILES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Landing page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Maximum selected cities
    pub max_selected_cities: usize,
    /// Radius before the user edits it, in miles
    pub default_radius_miles: f64,
    /// Radius presets, in miles
    pub radius_options_miles: Vec<u32>,
    /// Pixel budget for the header location label
    pub label_max_width_px: f64,
    /// Pixels per terminal cell for the cell-width measurer
    pub px_per_cell: f64,
}

impl BoardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With label width budget
    #[inline]
    #[must_use]
    pub fn with_label_max_width(mut self, px: f64) -> Self {
        self.label_max_width_px = px;
        self
    }

    /// With selection capacity
    #[inline]
    #[must_use]
    pub fn with_max_selected_cities(mut self, max: usize) -> Self {
        self.max_selected_cities = max;
        self
    }

    /// With default radius
    #[inline]
    #[must_use]
    pub fn with_default_radius(mut self, miles: f64) -> Self {
        self.default_radius_miles = miles;
        self
    }

    /// Whether `miles` is one of the radius presets
    #[must_use]
    pub fn is_radius_option(&self, miles: f64) -> bool {
        self.radius_options_miles.iter().any(|&r| f64::from(r) == miles)
    }

    /// Parse TOML and validate
    ///
    /// # Errors
    /// `ConfigError::Parse` for bad TOML, `ConfigError::Invalid` when
    /// [`Self::validate`] fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` when unreadable, otherwise as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check internal consistency
    ///
    /// # Errors
    /// `ConfigError::Invalid` describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_selected_cities == 0 {
            return Err(ConfigError::Invalid("max_selected_cities must be at least 1".into()));
        }
        if self.max_selected_cities > MAX_SELECTED_CITIES {
            return Err(ConfigError::Invalid(format!(
                "max_selected_cities {} exceeds the limit of {MAX_SELECTED_CITIES}",
                self.max_selected_cities
            )));
        }
        if self.radius_options_miles.is_empty() {
            return Err(ConfigError::Invalid("radius_options_miles is empty".into()));
        }
        if !self.is_radius_option(self.default_radius_miles) {
            return Err(ConfigError::Invalid(format!(
                "default_radius_miles {} is not one of radius_options_miles",
                self.default_radius_miles
            )));
        }
        if self.label_max_width_px.is_nan() || self.label_max_width_px <= 0.0 {
            return Err(ConfigError::Invalid("label_max_width_px must be positive".into()));
        }
        if self.px_per_cell.is_nan() || self.px_per_cell <= 0.0 {
            return Err(ConfigError::Invalid("px_per_cell must be positive".into()));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_selected_cities: MAX_SELECTED_CITIES,
            default_radius_miles: DEFAULT_RADIUS_MILES,
            radius_options_miles: RADIUS_OPTIONS_MILES.to_vec(),
            label_max_width_px: 240.0,
            px_per_cell: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_selected_cities, 3);
        assert_eq!(config.radius_options_miles, [5, 8, 10, 25, 50, 100]);
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config = BoardConfig::from_toml_str("label_max_width_px = 320.0\n").unwrap();
        assert_eq!(config, BoardConfig::new().with_label_max_width(320.0));
    }

    #[test]
    fn rejects_default_radius_outside_options() {
        let err = BoardConfig::from_toml_str("default_radius_miles = 7.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_capacity() {
        assert!(BoardConfig::new().with_max_selected_cities(0).validate().is_err());
    }

    #[test]
    fn rejects_capacity_above_three() {
        let err = BoardConfig::from_toml_str("max_selected_cities = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.contains("exceeds")));
        assert!(BoardConfig::new().with_max_selected_cities(3).validate().is_ok());
    }

    #[test]
    fn radius_options_lookup() {
        let config = BoardConfig::default();
        assert!(config.is_radius_option(25.0));
        assert!(!config.is_radius_option(7.0));
        assert!(!config.is_radius_option(-5.0));
        assert!(!config.is_radius_option(f64::NAN));
    }

    #[test]
    fn rejects_non_positive_width() {
        assert!(BoardConfig::new().with_label_max_width(0.0).validate().is_err());
        assert!(BoardConfig::new().with_label_max_width(f64::NAN).validate().is_err());
    }

    #[test]
    fn bad_toml_is_parse_error() {
        assert!(matches!(
            BoardConfig::from_toml_str("max_selected_cities = \"three\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, "default_radius_miles = 25.0\nmax_selected_cities = 2\n").unwrap();

        let config = BoardConfig::load(&path).unwrap();
        assert_eq!(config.default_radius_miles, 25.0);
        assert_eq!(config.max_selected_cities, 2);
    }
}
