//! Load-time taxonomy validation
//!
//! Checks id uniqueness, field shape, and left-rail coherence. Every check
//! is advisory: findings are returned as data and never abort loading.

use crate::model::{LeftRailCategory, TaxonomySection};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Every id in structural order: each section id followed by its item ids
#[must_use]
pub fn collect_all_ids(sections: &[TaxonomySection]) -> Vec<&str> {
    let mut ids = Vec::with_capacity(sections.len() * 8);
    for section in sections {
        ids.push(section.id.as_str());
        ids.extend(section.items().iter().map(|item| item.id.as_str()));
    }
    ids
}

/// Ids seen more than once, each reported once
///
/// Order is the order in which the first repeat of each id was seen.
#[must_use]
pub fn find_duplicate_ids<'a, I>(ids: I) -> IndexSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut duplicates = IndexSet::new();
    for id in ids {
        if !seen.insert(id) && !duplicates.contains(id) {
            duplicates.insert(id.to_string());
        }
    }
    duplicates
}

/// A structural defect at an index path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeIssue {
    /// Section id is empty
    SectionMissingId { section: usize },
    /// Section title is empty
    SectionMissingTitle { section: usize },
    /// Section has no items collection
    SectionMissingItems { section: usize },
    /// Item id is empty
    ItemMissingId { section: usize, item: usize },
    /// Item label is empty
    ItemMissingLabel { section: usize, item: usize },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionMissingId { section } => write!(f, "sections[{section}] missing id"),
            Self::SectionMissingTitle { section } => write!(f, "sections[{section}] missing title"),
            Self::SectionMissingItems { section } => {
                write!(f, "sections[{section}] missing items array")
            }
            Self::ItemMissingId { section, item } => {
                write!(f, "sections[{section}].items[{item}] missing id")
            }
            Self::ItemMissingLabel { section, item } => {
                write!(f, "sections[{section}].items[{item}] missing label")
            }
        }
    }
}

/// Scan for empty ids, titles, labels and missing item collections
#[must_use]
pub fn find_shape_issues(sections: &[TaxonomySection]) -> Vec<ShapeIssue> {
    let mut issues = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if section.id.is_empty() {
            issues.push(ShapeIssue::SectionMissingId { section: i });
        }
        if section.title.is_empty() {
            issues.push(ShapeIssue::SectionMissingTitle { section: i });
        }
        let Some(items) = &section.items else {
            issues.push(ShapeIssue::SectionMissingItems { section: i });
            continue;
        };
        for (j, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                issues.push(ShapeIssue::ItemMissingId { section: i, item: j });
            }
            if item.label.is_empty() {
                issues.push(ShapeIssue::ItemMissingLabel { section: i, item: j });
            }
        }
    }
    issues
}

/// Result of [`validate_taxonomy`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxonomyReport {
    /// Repeated ids
    pub duplicates: IndexSet<String>,
    /// Structural defects
    pub shape_issues: Vec<ShapeIssue>,
}

impl TaxonomyReport {
    /// Some id repeats
    #[inline]
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Some field or collection is missing
    #[inline]
    #[must_use]
    pub fn has_shape_issues(&self) -> bool {
        !self.shape_issues.is_empty()
    }

    /// Nothing to report
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_duplicates() && !self.has_shape_issues()
    }
}

/// Id uniqueness plus shape scan
#[must_use]
pub fn validate_taxonomy(sections: &[TaxonomySection]) -> TaxonomyReport {
    TaxonomyReport {
        duplicates: find_duplicate_ids(collect_all_ids(sections)),
        shape_issues: find_shape_issues(sections),
    }
}

/// A left-rail coherence problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoherenceWarning {
    /// Rail and section counts differ
    LengthMismatch { rail: usize, sections: usize },
    /// Rail entry points at a section that does not exist
    DanglingSection { entry_id: String, section_id: String },
}

impl fmt::Display for CoherenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { rail, sections } => write!(
                f,
                "left_rail_categories length ({rail}) does not match sections length ({sections})"
            ),
            Self::DanglingSection {
                entry_id,
                section_id,
            } => write!(
                f,
                "left_rail_categories entry \"{entry_id}\" references section_id \"{section_id}\" which does not exist in sections"
            ),
        }
    }
}

/// Result of [`validate_left_rail_coherence`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoherenceReport {
    /// Problems found, length check first
    pub warnings: Vec<CoherenceWarning>,
}

impl CoherenceReport {
    /// Rail is a complete, valid mapping onto the sections
    #[inline]
    #[must_use]
    pub fn is_coherent(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Check the navigation list against the sections
///
/// Reports a length mismatch once, and each entry whose `section_id` is not
/// a section id.
#[must_use]
pub fn validate_left_rail_coherence(
    sections: &[TaxonomySection],
    rail: &[LeftRailCategory],
) -> CoherenceReport {
    let section_ids: HashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();
    let mut warnings = Vec::new();

    if rail.len() != sections.len() {
        warnings.push(CoherenceWarning::LengthMismatch {
            rail: rail.len(),
            sections: sections.len(),
        });
    }

    warnings.extend(
        rail.iter()
            .filter(|entry| !section_ids.contains(entry.section_id.as_str()))
            .map(|entry| CoherenceWarning::DanglingSection {
                entry_id: entry.id.clone(),
                section_id: entry.section_id.clone(),
            }),
    );

    CoherenceReport { warnings }
}
