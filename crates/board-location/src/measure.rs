//! Text measurement for width-bounded labels
//!
//! The label formatter never measures text itself; it is handed a
//! [`MeasureText`] implementation. Production code picks one backed by the
//! rendering surface, tests pass a deterministic closure.

use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a string, in pixels
pub trait MeasureText {
    /// Width of `text` when rendered
    fn measure(&self, text: &str) -> f64;
}

impl<F> MeasureText for F
where
    F: Fn(&str) -> f64,
{
    #[inline]
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Fixed advance per character
///
/// Rough estimate used when no font metrics are available: every `char`
/// is assumed to be the same width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance(pub f64);

impl Default for FixedAdvance {
    fn default() -> Self {
        Self(8.0)
    }
}

impl MeasureText for FixedAdvance {
    #[inline]
    fn measure(&self, text: &str) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let chars = text.chars().count() as f64;
        chars * self.0
    }
}

/// Terminal cell measurement
///
/// Uses Unicode display width, so wide glyphs count as two cells and
/// combining marks as zero, then scales by `px_per_cell`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellWidth {
    /// Pixels represented by a single terminal cell
    pub px_per_cell: f64,
}

impl CellWidth {
    /// Create a measurer with the given cell size
    #[inline]
    #[must_use]
    pub fn new(px_per_cell: f64) -> Self {
        Self { px_per_cell }
    }

    /// Display width in cells
    #[inline]
    #[must_use]
    pub fn cells(text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

impl Default for CellWidth {
    fn default() -> Self {
        Self::new(8.0)
    }
}

impl MeasureText for CellWidth {
    fn measure(&self, text: &str) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let cells = Self::cells(text) as f64;
        cells * self.px_per_cell
    }
}
