//! Testing utilities for the board workspace
//!
//! Shared fixtures and deterministic measurers.

#![allow(missing_docs)]

use board_location::City;
use board_taxonomy::{LeftRailCategory, TaxonomyItem, TaxonomySection, TaxonomySnapshot};

/// A small, coherent taxonomy document
pub const SAMPLE_TAXONOMY_JSON: &str = r#"{
  "sections": [
    {
      "id": "community",
      "title": "community",
      "items": [
        {"id": "community_activities", "label": "activities"},
        {"id": "community_artists", "label": "artists"},
        {"id": "community_childcare", "label": "childcare"},
        {"id": "community_lost_found", "label": "lost+found"}
      ]
    },
    {
      "id": "housing",
      "title": "housing",
      "items": [
        {"id": "housing_apts", "label": "apts / housing"},
        {"id": "housing_swap", "label": "housing swap"},
        {"id": "housing_rooms", "label": "rooms / shared"}
      ]
    },
    {
      "id": "for_sale",
      "title": "for sale",
      "items": [
        {"id": "forsale_antiques", "label": "antiques"},
        {"id": "forsale_auto_parts", "label": "auto parts"},
        {"id": "forsale_books", "label": "books"}
      ]
    },
    {
      "id": "jobs",
      "title": "jobs",
      "items": [
        {"id": "jobs_accounting", "label": "accounting+finance"},
        {"id": "jobs_art_media", "label": "art/media/design"}
      ]
    }
  ],
  "left_rail_categories": [
    {"id": "nav_community", "label": "community", "section_id": "community"},
    {"id": "nav_housing", "label": "housing", "section_id": "housing"},
    {"id": "nav_for_sale", "label": "for sale", "section_id": "for_sale"},
    {"id": "nav_jobs", "label": "jobs", "section_id": "jobs"}
  ],
  "meta": {"notes": ["sample fixture"]}
}"#;

pub fn sample_snapshot() -> TaxonomySnapshot {
    TaxonomySnapshot::from_json_str(SAMPLE_TAXONOMY_JSON).expect("sample taxonomy decodes")
}

pub fn section(id: &str, title: &str, items: &[(&str, &str)]) -> TaxonomySection {
    TaxonomySection::new(
        id,
        title,
        items.iter().map(|(id, label)| TaxonomyItem::new(*id, *label)).collect(),
    )
}

pub fn rail_for(sections: &[TaxonomySection]) -> Vec<LeftRailCategory> {
    sections
        .iter()
        .map(|s| LeftRailCategory::new(format!("nav_{}", s.id), s.title.clone(), s.id.clone()))
        .collect()
}

pub fn sf() -> City {
    City::new("city_sf", "San Francisco")
}

pub fn boston() -> City {
    City::new("city_boston", "Boston")
}

pub fn nyc() -> City {
    City::new("city_nyc", "New York City")
}

/// Measurer charging `px` per character
pub fn px_per_char(px: f64) -> impl Fn(&str) -> f64 {
    move |text: &str| text.chars().count() as f64 * px
}
