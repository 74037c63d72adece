//! Font representation and configuration.

use super::types::{FontFamily, FontStyle, FontWeight};

/// Default line height as a multiple of the font size.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// A font specification: family, size and styling.
///
/// `Font` describes how a label should be drawn. It does not reference font
/// data; a [`TextMeasurer`] resolves it when text is measured.
///
/// # Example
///
/// ```
/// use horizon_tabstrip_core::text::{Font, FontFamily, FontWeight};
///
/// let font = Font::new(FontFamily::SansSerif, 17.0);
///
/// let selected = Font::builder()
///     .family(FontFamily::name("Inter"))
///     .size(17.0)
///     .weight(FontWeight::BOLD)
///     .build();
/// assert_ne!(font, selected);
/// ```
///
/// [`TextMeasurer`]: super::TextMeasurer
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    /// Font size in pixels.
    size: f32,
    weight: FontWeight,
    style: FontStyle,
    /// Line height multiplier; the part above 1.0 is the font's leading.
    line_height: f32,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Create a font builder for more complex font specifications.
    pub fn builder() -> FontBuilder {
        FontBuilder::new()
    }

    /// Get the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Get the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Get the font style.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Get the line height multiplier.
    pub fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Extra vertical space between lines, in pixels.
    pub fn leading(&self) -> f32 {
        (self.line_height - 1.0).max(0.0) * self.size
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Convert to cosmic-text Attrs for text shaping.
    #[cfg(feature = "cosmic-text")]
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
            .style(self.style.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 17.0)
    }
}

/// Builder for creating `Font` instances.
#[derive(Debug, Clone, Default)]
pub struct FontBuilder {
    family: FontFamily,
    size: Option<f32>,
    weight: FontWeight,
    style: FontStyle,
    line_height: Option<f32>,
}

impl FontBuilder {
    /// Create a new font builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family.
    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Set the font size in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the font weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the font style.
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the line height multiplier.
    pub fn line_height(mut self, multiplier: f32) -> Self {
        self.line_height = Some(multiplier);
        self
    }

    /// Build the font specification.
    ///
    /// If no size was specified, uses 17.0.
    pub fn build(self) -> Font {
        Font {
            family: self.family,
            size: self.size.unwrap_or(17.0),
            weight: self.weight,
            style: self.style,
            line_height: self.line_height.unwrap_or(DEFAULT_LINE_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_creation() {
        let font = Font::new(FontFamily::SansSerif, 14.0);
        assert_eq!(font.size(), 14.0);
        assert_eq!(font.weight(), FontWeight::NORMAL);
        assert_eq!(font.style(), FontStyle::Normal);
    }

    #[test]
    fn font_builder() {
        let font = Font::builder()
            .family(FontFamily::name("Inter"))
            .size(18.0)
            .weight(FontWeight::BOLD)
            .style(FontStyle::Italic)
            .line_height(1.5)
            .build();

        assert_eq!(font.family(), &FontFamily::name("Inter"));
        assert_eq!(font.size(), 18.0);
        assert_eq!(font.weight(), FontWeight::BOLD);
        assert_eq!(font.style(), FontStyle::Italic);
        assert_eq!(font.leading(), 9.0);
    }

    #[test]
    fn font_with_methods() {
        let font = Font::new(FontFamily::Monospace, 12.0);
        let larger = font.with_size(24.0);
        let bold = font.with_weight(FontWeight::BOLD);

        assert_eq!(larger.size(), 24.0);
        assert_eq!(larger.weight(), FontWeight::NORMAL);
        assert_eq!(bold.size(), 12.0);
        assert_eq!(bold.weight(), FontWeight::BOLD);
        assert_ne!(font, bold);
    }
}
