use board_taxonomy::{
    filter_sections, find_duplicate_ids, validate_left_rail_coherence, LeftRailCategory, TaxonomyItem,
    TaxonomySection,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn sections_strategy() -> impl Strategy<Value = Vec<TaxonomySection>> {
    proptest::collection::vec(proptest::collection::vec("[a-zA-Z /+]{1,12}", 0..6), 0..6).prop_map(|sections| {
        sections
            .into_iter()
            .enumerate()
            .map(|(i, labels)| {
                let items = labels
                    .into_iter()
                    .enumerate()
                    .map(|(j, label)| TaxonomyItem::new(format!("s{i}_i{j}"), label))
                    .collect();
                TaxonomySection::new(format!("s{i}"), format!("Section {i}"), items)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_blank_query_is_identity(sections in sections_strategy(), blank in "[ \t]{0,4}") {
        let result = filter_sections(&sections, &blank);
        prop_assert!(std::ptr::eq(result.sections(), sections.as_slice()));
        prop_assert_eq!(result.legacy_match_count(), -1);
    }

    #[test]
    fn prop_active_filter_invariants(sections in sections_strategy(), query in "[a-zA-Z]{1,3}") {
        let before = sections.clone();
        let result = filter_sections(&sections, &query);
        let needle = query.to_lowercase();

        let mut total = 0;
        for section in result.sections() {
            prop_assert!(!section.items().is_empty());
            for item in section.items() {
                prop_assert!(item.label.to_lowercase().contains(&needle));
            }
            total += section.items().len();
        }
        prop_assert_eq!(result.match_count(), Some(total));
        prop_assert_eq!(&sections, &before);
    }

    #[test]
    fn prop_filter_preserves_section_order(sections in sections_strategy(), query in "[a-z]{1,2}") {
        let result = filter_sections(&sections, &query);
        let order: Vec<usize> = result
            .sections()
            .iter()
            .map(|s| sections.iter().position(|o| o.id == s.id).unwrap())
            .collect();
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_duplicates_are_exactly_the_repeated_ids(ids in proptest::collection::vec("[a-d]", 0..12)) {
        let dups = find_duplicate_ids(ids.iter().map(String::as_str));
        for id in &ids {
            let count = ids.iter().filter(|other| *other == id).count();
            prop_assert_eq!(dups.contains(id.as_str()), count > 1);
        }
        let unique: HashSet<&String> = dups.iter().collect();
        prop_assert_eq!(unique.len(), dups.len());
    }

    #[test]
    fn prop_derived_rail_is_coherent(sections in sections_strategy()) {
        let rail: Vec<LeftRailCategory> = sections.iter().map(LeftRailCategory::derived_from).collect();
        prop_assert!(validate_left_rail_coherence(&sections, &rail).is_coherent());
    }
}

#[test]
fn nothing_matches_yields_active_zero() {
    let sections = vec![TaxonomySection::new("s", "S", vec![TaxonomyItem::new("i", "apples")])];
    let result = filter_sections(&sections, "zzz");
    assert!(result.sections().is_empty());
    assert_eq!(result.match_count(), Some(0));
}
