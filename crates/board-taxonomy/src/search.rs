//! Taxonomy search filter
//!
//! Case-insensitive substring matching over item labels. The result type
//! keeps "no search" apart from "search with zero matches", since the two
//! drive different UI states (full taxonomy vs. empty-state message).

use crate::model::TaxonomySection;
use serde::Serialize;

/// Trim surrounding whitespace and lowercase
#[inline]
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring test
///
/// An empty query matches everything.
#[must_use]
pub fn item_matches(label: &str, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    label
        .to_lowercase()
        .contains(&normalized_query.to_lowercase())
}

/// Outcome of [`filter_sections`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionFilter<'a> {
    /// Blank query: the input sections, untouched and not copied
    Inactive {
        /// The caller's slice
        sections: &'a [TaxonomySection],
    },

    /// Active search
    Active {
        /// New sections holding only matching items; sections without
        /// matches are omitted
        sections: Vec<TaxonomySection>,
        /// Total matching items across `sections`
        match_count: usize,
    },
}

impl SectionFilter<'_> {
    /// Sections to render
    #[must_use]
    pub fn sections(&self) -> &[TaxonomySection] {
        match self {
            Self::Inactive { sections } => sections,
            Self::Active { sections, .. } => sections,
        }
    }

    /// Whether a search is in effect
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Match count, `None` when no search is active
    #[inline]
    #[must_use]
    pub fn match_count(&self) -> Option<usize> {
        match self {
            Self::Inactive { .. } => None,
            Self::Active { match_count, .. } => Some(*match_count),
        }
    }

    /// Match count with `-1` standing for "no search"
    ///
    /// For consumers that still speak the numeric sentinel.
    #[must_use]
    pub fn legacy_match_count(&self) -> i64 {
        self.match_count()
            .map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX))
    }

    /// Active search that found nothing
    #[inline]
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.match_count() == Some(0)
    }
}

/// Filter sections by a free-text query
///
/// Never mutates `sections`. A blank query returns
/// [`SectionFilter::Inactive`] borrowing the original slice.
///
/// # Example
///
/// ```rust
/// use board_taxonomy::{filter_sections, TaxonomyItem, TaxonomySection};
///
/// let sections = vec![TaxonomySection::new(
///     "community",
///     "community",
///     vec![TaxonomyItem::new("community_artists", "artists"), TaxonomyItem::new("community_pets", "pets")],
/// )];
///
/// let result = filter_sections(&sections, " ART ");
/// assert_eq!(result.match_count(), Some(1));
/// assert_eq!(result.sections()[0].items()[0].label, "artists");
///
/// assert_eq!(filter_sections(&sections, "").match_count(), None);
/// ```
pub fn filter_sections<'a>(sections: &'a [TaxonomySection], query: &str) -> SectionFilter<'a> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return SectionFilter::Inactive { sections };
    }

    let mut match_count = 0;
    let mut filtered = Vec::new();

    for section in sections {
        let matching: Vec<_> = section
            .items()
            .iter()
            .filter(|item| item_matches(&item.label, &normalized))
            .cloned()
            .collect();

        if !matching.is_empty() {
            match_count += matching.len();
            filtered.push(section.with_items(matching));
        }
    }

    tracing::debug!(query = %normalized, sections = filtered.len(), match_count, "filtered taxonomy");

    SectionFilter::Active {
        sections: filtered,
        match_count,
    }
}
