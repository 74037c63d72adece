//! Intrinsic size calculation for label bar buttons.

use horizon_tabstrip_core::text::{Font, MeasureOptions, TextMeasurer};
use horizon_tabstrip_core::{EdgeInsets, Size};

use crate::logging::targets;

/// Computes and caches the intrinsic size of a label bar button.
///
/// The size fits the label in whichever of the normal and selected fonts
/// renders larger, so the button does not resize when its font swaps.
#[derive(Debug, Clone, Default)]
pub struct SizeCalculator {
    cached: Size,
}

impl SizeCalculator {
    /// Create a calculator with a zero cached size.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently computed size.
    #[inline]
    pub fn cached(&self) -> Size {
        self.cached
    }

    /// Recompute the intrinsic size.
    ///
    /// Without text (absent or empty) the cached size is returned unchanged.
    /// `selected_font` falls back to `font` when absent.
    pub fn compute(
        &mut self,
        measurer: &mut dyn TextMeasurer,
        text: Option<&str>,
        font: &Font,
        selected_font: Option<&Font>,
        insets: EdgeInsets,
    ) -> Size {
        let Some(text) = text.filter(|text| !text.is_empty()) else {
            tracing::trace!(target: targets::SIZE, "no label text, keeping cached size");
            return self.cached;
        };

        let options = MeasureOptions {
            uses_font_leading: true,
        };
        let normal = measurer.measure(text, font, options);
        let selected = match selected_font {
            Some(selected_font) => measurer.measure(text, selected_font, options),
            None => normal,
        };

        let size = insets.outset_size(normal.max(selected));
        tracing::debug!(
            target: targets::SIZE,
            width = size.width,
            height = size.height,
            "intrinsic size recomputed"
        );
        self.cached = size;
        size
    }
}
