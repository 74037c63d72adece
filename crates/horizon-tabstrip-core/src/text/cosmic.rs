//! Text measurement backed by cosmic-text shaping.

use cosmic_text::{Buffer, FontSystem, Metrics, Shaping};

use super::font::Font;
use super::measure::{MeasureOptions, TextMeasurer};
use crate::types::Size;

/// Measures text by shaping it with cosmic-text against the system fonts.
pub struct CosmicTextMeasurer {
    font_system: FontSystem,
}

impl CosmicTextMeasurer {
    /// Create a measurer with system fonts loaded.
    pub fn new() -> Self {
        Self::with_font_system(FontSystem::new())
    }

    /// Create a measurer around an existing font system.
    pub fn with_font_system(font_system: FontSystem) -> Self {
        Self { font_system }
    }
}

impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&mut self, text: &str, font: &Font, options: MeasureOptions) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let line_height = if options.uses_font_leading {
            font.size() * font.line_height().max(1.0)
        } else {
            font.size()
        };
        let metrics = Metrics::new(font.size(), line_height);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut size = Size::ZERO;
        for run in buffer.layout_runs() {
            size.width = size.width.max(run.line_w);
            size.height = size.height.max(run.line_top + run.line_height);
        }

        tracing::trace!(
            target: "horizon_tabstrip_core::text",
            text,
            width = size.width,
            height = size.height,
            "shaped text measured"
        );
        size
    }
}
