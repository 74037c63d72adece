//! Text measurement capability.
//!
//! Measuring text is owned by the host toolkit. Widgets only see the
//! [`TextMeasurer`] trait, so their sizing logic stays independent of any
//! particular shaping engine.

use unicode_segmentation::UnicodeSegmentation;

use super::font::Font;
use crate::types::Size;

/// Options controlling how a string is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureOptions {
    /// Include the font's leading in the measured line height.
    pub uses_font_leading: bool,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            uses_font_leading: true,
        }
    }
}

/// Measures the bounding size of a single-line string rendered in a font.
pub trait TextMeasurer {
    /// Return the bounding size of `text` rendered with `font`.
    fn measure(&mut self, text: &str, font: &Font, options: MeasureOptions) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &mut T {
    fn measure(&mut self, text: &str, font: &Font, options: MeasureOptions) -> Size {
        (**self).measure(text, font, options)
    }
}

/// Deterministic measurer that gives every grapheme the same advance.
///
/// Widths scale with the font size and weight; heights are one line of the
/// font, with or without leading. Used by headless hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Advance of one grapheme as a fraction of the font size.
    pub advance: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given per-grapheme advance ratio.
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn weight_scale(font: &Font) -> f32 {
        // Heavier weights render wider; 700 is 15% wider than 400.
        1.0 + (font.weight().value() as f32 - 400.0) / 2000.0
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&mut self, text: &str, font: &Font, options: MeasureOptions) -> Size {
        let graphemes = text.graphemes(true).count() as f32;
        let width = graphemes * font.size() * self.advance * Self::weight_scale(font);
        let height = if options.uses_font_leading {
            font.size() * font.line_height().max(1.0)
        } else {
            font.size()
        };
        Size::new(width, height)
    }
}
