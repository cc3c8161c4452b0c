//! Header location label
//!
//! Reduces the selected cities plus radius to one display string that fits
//! a pixel budget. Two tiers only:
//!
//! 1. the full comma-separated list (plus radius suffix)
//! 2. `"{first}, {n} more"` (plus radius suffix) when tier 1 overflows
//!
//! Only tier 1 is measured, so every call costs exactly one measurement.
//! Tier 2 may still overflow; it is a compacted form, not a guaranteed fit.

use crate::city::City;
use crate::measure::MeasureText;

/// Label shown when no city is selected
pub const DEFAULT_LOCATION_LABEL: &str = "select location";

/// Radius suffix, present only once the user has edited the radius
///
/// Whole radii print without a fractional part (`20`, not `20.0`).
#[must_use]
pub fn radius_suffix(radius_miles: f64, has_edited_radius: bool) -> String {
    if has_edited_radius {
        format!(" ± {radius_miles} mi")
    } else {
        String::new()
    }
}

/// Compute the label for the header location trigger
///
/// The radius suffix is gated on `has_edited_radius`, not on the radius
/// value: a default radius the user never touched is not shown. A single
/// city that overflows is returned unmodified.
///
/// # Example
///
/// ```rust
/// use board_location::{compute_label, City};
///
/// let cities = [
///     City::new("city_sf", "San Francisco"),
///     City::new("city_boston", "Boston"),
///     City::new("city_nyc", "New York City"),
/// ];
/// let measure = |text: &str| text.chars().count() as f64 * 10.0;
///
/// assert_eq!(
///     compute_label(&cities, 20.0, true, 200.0, &measure),
///     "San Francisco, 2 more ± 20 mi"
/// );
/// ```
pub fn compute_label<M>(
    selected: &[City],
    radius_miles: f64,
    has_edited_radius: bool,
    max_width: f64,
    measure: &M,
) -> String
where
    M: MeasureText + ?Sized,
{
    let Some(first) = selected.first() else {
        return DEFAULT_LOCATION_LABEL.to_string();
    };

    let suffix = radius_suffix(radius_miles, has_edited_radius);
    let full_list = selected
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let full_label = full_list + &suffix;

    let width = measure.measure(&full_label);
    if width <= max_width {
        return full_label;
    }

    if selected.len() > 1 {
        let remaining = selected.len() - 1;
        tracing::debug!(
            width,
            max_width,
            selected = selected.len(),
            "location label overflows, using compact form"
        );
        return format!("{}, {remaining} more{suffix}", first.name);
    }

    full_label
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn sf() -> City {
        City::new("city_sf", "San Francisco")
    }

    fn boston() -> City {
        City::new("city_boston", "Boston")
    }

    fn nyc() -> City {
        City::new("city_nyc", "New York City")
    }

    fn eight_px(text: &str) -> f64 {
        text.chars().count() as f64 * 8.0
    }

    #[test]
    fn empty_selection_uses_default_label() {
        assert_eq!(compute_label(&[], 10.0, false, 240.0, &eight_px), "select location");
        assert_eq!(compute_label(&[], 50.0, true, 1.0, &eight_px), "select location");
    }

    #[test]
    fn single_city_without_suffix() {
        assert_eq!(compute_label(&[sf()], 10.0, false, 240.0, &eight_px), "San Francisco");
    }

    #[test]
    fn list_in_selection_order_when_it_fits() {
        // 21 chars * 8 = 168px
        assert_eq!(
            compute_label(&[sf(), boston()], 10.0, false, 240.0, &eight_px),
            "San Francisco, Boston"
        );
        assert_eq!(
            compute_label(&[boston(), sf()], 10.0, false, 240.0, &eight_px),
            "Boston, San Francisco"
        );
    }

    #[test]
    fn overflow_collapses_to_first_and_count() {
        // 36 chars * 8 = 288px > 240px
        assert_eq!(
            compute_label(&[sf(), boston(), nyc()], 10.0, false, 240.0, &eight_px),
            "San Francisco, 2 more"
        );
    }

    #[test]
    fn overflow_keeps_radius_suffix() {
        assert_eq!(
            compute_label(&[sf(), boston(), nyc()], 20.0, true, 240.0, &eight_px),
            "San Francisco, 2 more ± 20 mi"
        );
    }

    #[test]
    fn full_list_with_suffix_when_it_fits() {
        // 29 chars * 8 = 232px
        assert_eq!(
            compute_label(&[sf(), boston()], 10.0, true, 240.0, &eight_px),
            "San Francisco, Boston ± 10 mi"
        );
    }

    #[test]
    fn suffix_counts_toward_budget() {
        // list alone is 168px, with " ± 10 mi" it is 232px
        assert_eq!(
            compute_label(&[sf(), boston()], 10.0, false, 200.0, &eight_px),
            "San Francisco, Boston"
        );
        assert_eq!(
            compute_label(&[sf(), boston()], 10.0, true, 200.0, &eight_px),
            "San Francisco, 1 more ± 10 mi"
        );
    }

    #[test]
    fn single_city_with_suffix() {
        assert_eq!(compute_label(&[boston()], 25.0, true, 240.0, &eight_px), "Boston ± 25 mi");
    }

    #[test]
    fn fractional_radius_is_printed_as_is() {
        assert_eq!(compute_label(&[boston()], 2.5, true, 240.0, &eight_px), "Boston ± 2.5 mi");
    }

    #[test]
    fn single_overflowing_city_is_not_truncated() {
        assert_eq!(compute_label(&[sf()], 10.0, true, 16.0, &eight_px), "San Francisco ± 10 mi");
    }

    #[test]
    fn ten_px_examples() {
        let ten_px = |text: &str| text.chars().count() as f64 * 10.0;
        let cities = [sf(), boston(), nyc()];
        assert_eq!(compute_label(&cities, 20.0, true, 200.0, &ten_px), "San Francisco, 2 more ± 20 mi");
        assert_eq!(
            compute_label(&cities, 20.0, false, 400.0, &ten_px),
            "San Francisco, Boston, New York City"
        );
    }

    #[test]
    fn exactly_at_budget_fits() {
        // "Boston" = 6 chars * 8 = 48px
        assert_eq!(compute_label(&[boston()], 10.0, false, 48.0, &eight_px), "Boston");
        assert_eq!(
            compute_label(&[boston(), sf()], 10.0, false, 167.9, &eight_px),
            "Boston, 1 more"
        );
    }

    #[test]
    fn measures_exactly_once() {
        let calls = Cell::new(0);
        let counting = |text: &str| {
            calls.set(calls.get() + 1);
            text.chars().count() as f64 * 8.0
        };
        compute_label(&[sf(), boston(), nyc()], 10.0, true, 10.0, &counting);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn non_finite_width_takes_overflow_path() {
        let nan = |_: &str| f64::NAN;
        assert_eq!(compute_label(&[sf(), boston()], 10.0, false, 240.0, &nan), "San Francisco, 1 more");
    }

    #[test]
    fn suffix_gated_on_flag() {
        assert_eq!(radius_suffix(10.0, false), "");
        assert_eq!(radius_suffix(10.0, true), " ± 10 mi");
    }
}
