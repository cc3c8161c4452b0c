//! Text and JSON renderings for the CLI

use board_taxonomy::{CoherenceWarning, SectionFilter, ShapeIssue, TaxonomySnapshot};
use serde::Serialize;
use std::fmt::Write;

/// Machine-readable validation summary
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary<'a> {
    pub sections: usize,
    pub items: usize,
    pub clean: bool,
    pub duplicates: Vec<&'a str>,
    pub shape_issues: Vec<String>,
    pub coherence_warnings: Vec<String>,
    pub used_fallback_rail: bool,
}

impl<'a> ValidationSummary<'a> {
    /// Summarize a snapshot's findings
    #[must_use]
    pub fn new(snapshot: &'a TaxonomySnapshot) -> Self {
        let report = snapshot.report();
        Self {
            sections: snapshot.sections().len(),
            items: snapshot.sections().iter().map(|s| s.items().len()).sum(),
            clean: snapshot.is_clean(),
            duplicates: report.duplicates.iter().map(String::as_str).collect(),
            shape_issues: report.shape_issues.iter().map(ShapeIssue::to_string).collect(),
            coherence_warnings: snapshot
                .coherence()
                .warnings
                .iter()
                .map(CoherenceWarning::to_string)
                .collect(),
            used_fallback_rail: snapshot.used_fallback_rail(),
        }
    }
}

/// Human-readable validation report
#[must_use]
pub fn validation_text(snapshot: &TaxonomySnapshot) -> String {
    let summary = ValidationSummary::new(snapshot);
    let mut out = String::new();

    let _ = writeln!(out, "Taxonomy Validation Report");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(out, "Sections: {}", summary.sections);
    let _ = writeln!(out, "Items: {}", summary.items);
    let _ = writeln!(out);

    if summary.duplicates.is_empty() {
        let _ = writeln!(out, "Duplicate ids: none");
    } else {
        let _ = writeln!(out, "Duplicate ids: {}", summary.duplicates.join(", "));
    }

    let _ = writeln!(out, "Shape issues: {}", summary.shape_issues.len());
    for issue in &summary.shape_issues {
        let _ = writeln!(out, "  - {issue}");
    }

    let _ = writeln!(out, "Left rail warnings: {}", summary.coherence_warnings.len());
    for warning in &summary.coherence_warnings {
        let _ = writeln!(out, "  - {warning}");
    }
    if summary.used_fallback_rail {
        let _ = writeln!(out, "Left rail: derived from sections");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Status: {}", if summary.clean { "CLEAN" } else { "ISSUES FOUND" });
    out
}

/// Human-readable search result
#[must_use]
pub fn search_text(result: &SectionFilter<'_>) -> String {
    let mut out = String::new();
    match result.match_count() {
        None => {
            let _ = writeln!(out, "No search active: {} sections", result.sections().len());
        }
        Some(0) => {
            let _ = writeln!(out, "No matching categories");
            return out;
        }
        Some(n) => {
            let _ = writeln!(out, "{n} matching categories");
        }
    }

    for section in result.sections() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.title);
        for item in section.items() {
            let _ = writeln!(out, "  {}", item.label);
        }
    }
    out
}
