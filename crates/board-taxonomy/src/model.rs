//! Taxonomy data model
//!
//! Mirrors the taxonomy document shape. Text fields default to empty when
//! absent so malformed documents still decode; the validator reports them.

use serde::{Deserialize, Serialize};

/// A leaf category entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyItem {
    /// Globally unique id
    #[serde(default)]
    pub id: String,
    /// Display label, also the search target
    #[serde(default)]
    pub label: String,
}

impl TaxonomyItem {
    /// Create item
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A top-level grouping of items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomySection {
    /// Globally unique id (shared namespace with item ids)
    #[serde(default)]
    pub id: String,
    /// Section heading
    #[serde(default)]
    pub title: String,
    /// Items in display order; `None` when the document omitted them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TaxonomyItem>>,
}

impl TaxonomySection {
    /// Create section with items
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<TaxonomyItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Some(items),
        }
    }

    /// Items, empty when the collection is missing
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[TaxonomyItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Copy of this section carrying only `items`
    #[must_use]
    pub fn with_items(&self, items: Vec<TaxonomyItem>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            items: Some(items),
        }
    }
}

/// A left-rail navigation entry pointing at a section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeftRailCategory {
    /// Entry id
    #[serde(default)]
    pub id: String,
    /// Label shown in the rail
    #[serde(default)]
    pub label: String,
    /// Referenced [`TaxonomySection::id`]
    #[serde(default)]
    pub section_id: String,
}

impl LeftRailCategory {
    /// Create entry
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            section_id: section_id.into(),
        }
    }

    /// Rail entry synthesized from a section
    #[must_use]
    pub fn derived_from(section: &TaxonomySection) -> Self {
        Self {
            id: format!("nav_{}", section.id),
            label: section.title.clone(),
            section_id: section.id.clone(),
        }
    }
}

/// Free-form document metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyMeta {
    /// Authoring notes
    #[serde(default)]
    pub notes: Vec<String>,
}

/// The full taxonomy document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyData {
    /// Sections in display order
    #[serde(default)]
    pub sections: Vec<TaxonomySection>,
    /// Navigation entries in display order
    #[serde(default)]
    pub left_rail_categories: Vec<LeftRailCategory>,
    /// Metadata
    #[serde(default)]
    pub meta: TaxonomyMeta,
}

/// One rail entry per section, in section order
#[must_use]
pub fn derive_left_rail(sections: &[TaxonomySection]) -> Vec<LeftRailCategory> {
    sections.iter().map(LeftRailCategory::derived_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_empty() {
        let section: TaxonomySection = serde_json::from_str(r#"{"title": "Jobs"}"#).unwrap();
        assert_eq!(section.id, "");
        assert!(section.items.is_none());
        assert!(section.items().is_empty());
    }

    #[test]
    fn with_items_keeps_identity() {
        let section = TaxonomySection::new("jobs", "jobs", vec![TaxonomyItem::new("jobs_a", "accounting")]);
        let empty = section.with_items(Vec::new());
        assert_eq!(empty.id, "jobs");
        assert_eq!(empty.title, "jobs");
        assert_eq!(section.items().len(), 1);
    }

    #[test]
    fn derived_rail_follows_sections() {
        let sections = vec![
            TaxonomySection::new("community", "community", vec![]),
            TaxonomySection::new("for_sale", "for sale", vec![]),
        ];
        let rail = derive_left_rail(&sections);
        assert_eq!(rail.len(), 2);
        assert_eq!(rail[1], LeftRailCategory::new("nav_for_sale", "for sale", "for_sale"));
    }
}
