//! Validated, immutable taxonomy snapshot
//!
//! Load, validate, then freeze. Consumers receive a snapshot explicitly;
//! a reload builds a new one and validates from scratch.

use crate::error::{TaxonomyError, TaxonomyResult};
use crate::model::{derive_left_rail, LeftRailCategory, TaxonomyData, TaxonomySection};
use crate::search::{filter_sections, SectionFilter};
use crate::validation::{validate_left_rail_coherence, validate_taxonomy, CoherenceReport, TaxonomyReport};
use std::path::Path;

/// Taxonomy ready for rendering
///
/// Holds the validation findings alongside the data. If the supplied left
/// rail is incoherent it is replaced by one entry per section.
#[derive(Debug, Clone)]
pub struct TaxonomySnapshot {
    sections: Vec<TaxonomySection>,
    left_rail: Vec<LeftRailCategory>,
    notes: Vec<String>,
    report: TaxonomyReport,
    coherence: CoherenceReport,
    used_fallback_rail: bool,
}

impl TaxonomySnapshot {
    /// Validate `data` and build the snapshot
    ///
    /// Never fails: findings are logged and kept in [`Self::report`] and
    /// [`Self::coherence`].
    #[must_use]
    pub fn from_data(data: TaxonomyData) -> Self {
        let TaxonomyData {
            sections,
            left_rail_categories,
            meta,
        } = data;

        let report = validate_taxonomy(&sections);
        for id in &report.duplicates {
            tracing::warn!(id = %id, "duplicate taxonomy id");
        }
        for issue in &report.shape_issues {
            tracing::warn!(%issue, "taxonomy shape issue");
        }

        let coherence = validate_left_rail_coherence(&sections, &left_rail_categories);
        for warning in &coherence.warnings {
            tracing::warn!(%warning, "left rail incoherent");
        }

        let used_fallback_rail = !coherence.is_coherent();
        let left_rail = if used_fallback_rail {
            tracing::warn!(sections = sections.len(), "deriving left rail from sections");
            derive_left_rail(&sections)
        } else {
            left_rail_categories
        };

        let item_count: usize = sections.iter().map(|s| s.items().len()).sum();
        tracing::info!(
            sections = sections.len(),
            items = item_count,
            clean = report.is_clean(),
            fallback_rail = used_fallback_rail,
            "taxonomy snapshot ready"
        );

        Self {
            sections,
            left_rail,
            notes: meta.notes,
            report,
            coherence,
            used_fallback_rail,
        }
    }

    /// Decode a JSON document and build the snapshot
    ///
    /// # Errors
    /// `TaxonomyError::Json` when the document does not decode.
    pub fn from_json_str(json: &str) -> TaxonomyResult<Self> {
        let data: TaxonomyData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    /// Read, decode and validate a taxonomy file
    ///
    /// # Errors
    /// `TaxonomyError::Io` when the file cannot be read, otherwise as
    /// [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> TaxonomyResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| TaxonomyError::io_error(path, e))?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "loading taxonomy");
        Self::from_json_str(&json)
    }

    /// Sections in display order
    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[TaxonomySection] {
        &self.sections
    }

    /// Navigation entries (supplied, or derived when incoherent)
    #[inline]
    #[must_use]
    pub fn left_rail(&self) -> &[LeftRailCategory] {
        &self.left_rail
    }

    /// Document notes
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Id and shape findings
    #[inline]
    #[must_use]
    pub fn report(&self) -> &TaxonomyReport {
        &self.report
    }

    /// Left-rail findings for the supplied rail
    #[inline]
    #[must_use]
    pub fn coherence(&self) -> &CoherenceReport {
        &self.coherence
    }

    /// The supplied rail was replaced
    #[inline]
    #[must_use]
    pub fn used_fallback_rail(&self) -> bool {
        self.used_fallback_rail
    }

    /// No findings of any kind
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.report.is_clean() && self.coherence.is_coherent()
    }

    /// Section by id
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&TaxonomySection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Filter this snapshot's sections
    #[must_use]
    pub fn search(&self, query: &str) -> SectionFilter<'_> {
        filter_sections(&self.sections, query)
    }
}

impl Default for TaxonomySnapshot {
    fn default() -> Self {
        Self::from_data(TaxonomyData::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const COHERENT: &str = r#"{
        "sections": [
            {"id": "community", "title": "community", "items": [
                {"id": "community_activities", "label": "activities"},
                {"id": "community_artists", "label": "artists"}
            ]},
            {"id": "jobs", "title": "jobs", "items": [
                {"id": "jobs_accounting", "label": "accounting+finance"}
            ]}
        ],
        "left_rail_categories": [
            {"id": "nav_community", "label": "community", "section_id": "community"},
            {"id": "nav_jobs", "label": "jobs", "section_id": "jobs"}
        ],
        "meta": {"notes": ["fixture"]}
    }"#;

    #[test]
    fn coherent_document_keeps_supplied_rail() {
        let snapshot = TaxonomySnapshot::from_json_str(COHERENT).unwrap();
        assert!(snapshot.is_clean());
        assert!(!snapshot.used_fallback_rail());
        assert_eq!(snapshot.left_rail()[0].id, "nav_community");
        assert_eq!(snapshot.notes(), ["fixture".to_string()]);
    }

    #[test]
    fn incoherent_rail_is_derived_from_sections() {
        let json = r#"{
            "sections": [
                {"id": "community", "title": "community", "items": []},
                {"id": "for_sale", "title": "for sale", "items": []}
            ],
            "left_rail_categories": [
                {"id": "nav_x", "label": "x", "section_id": "missing"}
            ]
        }"#;
        let snapshot = TaxonomySnapshot::from_json_str(json).unwrap();
        assert!(snapshot.used_fallback_rail());
        assert_eq!(snapshot.coherence().warnings.len(), 2);
        assert_eq!(
            snapshot.left_rail(),
            [
                LeftRailCategory::new("nav_community", "community", "community"),
                LeftRailCategory::new("nav_for_sale", "for sale", "for_sale"),
            ]
        );
    }

    #[test]
    fn malformed_sections_still_load() {
        let json = r#"{"sections": [{"id": "a", "items": [{"id": "a"}]}, {"title": "b"}]}"#;
        let snapshot = TaxonomySnapshot::from_json_str(json).unwrap();
        assert!(snapshot.report().has_duplicates());
        assert!(snapshot.report().has_shape_issues());
        assert_eq!(snapshot.sections().len(), 2);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            TaxonomySnapshot::from_json_str("[1, 2"),
            Err(TaxonomyError::Json(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(COHERENT.as_bytes()).unwrap();

        let snapshot = TaxonomySnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.sections().len(), 2);
        assert_eq!(snapshot.section("jobs").map(|s| s.items().len()), Some(1));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TaxonomySnapshot::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TaxonomyError::Io { .. }));
    }

    #[test]
    fn search_delegates_to_filter() {
        let snapshot = TaxonomySnapshot::from_json_str(COHERENT).unwrap();
        assert_eq!(snapshot.search("ART").match_count(), Some(1));
        assert!(std::ptr::eq(snapshot.search(" ").sections(), snapshot.sections()));
    }

    #[test]
    fn empty_snapshot_is_clean() {
        let snapshot = TaxonomySnapshot::default();
        assert!(snapshot.is_clean());
        assert!(snapshot.left_rail().is_empty());
    }
}
