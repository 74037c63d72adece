//! TOML style descriptions for label bar buttons.
//!
//! A style lists only the properties it changes; everything else keeps the
//! button's current value. Fonts are resolved relative to the font they
//! replace, and the selected font relative to the resolved normal font, so
//! `selected-font = { weight = 700 }` means "the normal font, bold".
//!
//! ```toml
//! color = "#8E8E93"
//! selected-color = "#FF2D55"
//! vertical-alignment = "bottom"
//!
//! [font]
//! family = "sans-serif"
//! size = 15
//! weight = 500
//!
//! [selected-font]
//! weight = 700
//!
//! [content-inset]
//! top = 10
//! bottom = 6
//!
//! [transition]
//! duration-ms = 180
//! easing = "ease-out"
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_tabstrip_core::{Color, EdgeInsets, Font, FontFamily, FontStyle, FontWeight};
use serde::Deserialize;

use crate::animation::Easing;
use crate::button::LabelBarButton;
use crate::error::{Error, Result};
use crate::host::VerticalAlignment;
use crate::logging::targets;

/// Font overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FontSpec {
    /// Family name or one of `serif`, `sans-serif`, `monospace`.
    pub family: Option<String>,
    /// Size in pixels.
    pub size: Option<f32>,
    /// Numeric weight, 100 to 900.
    pub weight: Option<u16>,
    /// Italic style.
    pub italic: Option<bool>,
}

impl FontSpec {
    /// Resolve against `base`, validating every value.
    fn resolve(&self, property: &str, base: &Font) -> Result<Font> {
        let mut builder = Font::builder()
            .family(base.family().clone())
            .size(base.size())
            .weight(base.weight())
            .style(base.style())
            .line_height(base.line_height());

        if let Some(family) = &self.family {
            if family.trim().is_empty() {
                return Err(Error::invalid_value(
                    format!("{property}.family"),
                    "family must not be empty",
                ));
            }
            builder = builder.family(FontFamily::parse(family));
        }
        if let Some(size) = self.size {
            if !size.is_finite() || size <= 0.0 {
                return Err(Error::invalid_value(
                    format!("{property}.size"),
                    format!("expected a positive size, got {size}"),
                ));
            }
            builder = builder.size(size);
        }
        if let Some(weight) = self.weight {
            if !(100..=900).contains(&weight) {
                return Err(Error::invalid_value(
                    format!("{property}.weight"),
                    format!("expected a weight between 100 and 900, got {weight}"),
                ));
            }
            builder = builder.weight(FontWeight::new(weight));
        }
        if let Some(italic) = self.italic {
            builder = builder.style(if italic { FontStyle::Italic } else { FontStyle::Normal });
        }

        Ok(builder.build())
    }
}

/// Content inset overrides, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InsetsSpec {
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub bottom: Option<f32>,
    pub right: Option<f32>,
}

impl InsetsSpec {
    fn resolve(&self, base: EdgeInsets) -> Result<EdgeInsets> {
        let edge = |name: &str, value: Option<f32>, current: f32| -> Result<f32> {
            match value {
                None => Ok(current),
                Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
                Some(v) => Err(Error::invalid_value(
                    format!("content-inset.{name}"),
                    format!("expected a non-negative inset, got {v}"),
                )),
            }
        };

        Ok(EdgeInsets::new(
            edge("top", self.top, base.top)?,
            edge("left", self.left, base.left)?,
            edge("bottom", self.bottom, base.bottom)?,
            edge("right", self.right, base.right)?,
        ))
    }
}

/// Font crossfade overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TransitionSpec {
    /// Crossfade length in milliseconds.
    pub duration_ms: Option<u64>,
    /// Easing name, such as `linear` or `ease-in-out`.
    pub easing: Option<String>,
}

/// A partial label bar button style.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BarButtonStyle {
    /// Unselected text color, `#RRGGBB` or `#RRGGBBAA`.
    pub color: Option<String>,
    /// Selected text color.
    pub selected_color: Option<String>,
    /// Unselected font.
    pub font: Option<FontSpec>,
    /// Selected font, resolved against the normal font.
    pub selected_font: Option<FontSpec>,
    /// Drop the selected font so the label keeps one font in every state.
    pub clear_selected_font: bool,
    pub content_inset: Option<InsetsSpec>,
    /// `top`, `center` or `bottom`.
    pub vertical_alignment: Option<String>,
    pub transition: Option<TransitionSpec>,
}

/// Every property of a style, validated and resolved against a button.
struct Resolved {
    color: Color,
    selected_color: Color,
    font: Font,
    selected_font: Option<Font>,
    content_inset: EdgeInsets,
    vertical_alignment: VerticalAlignment,
    transition_duration: Duration,
    transition_easing: Easing,
}

impl BarButtonStyle {
    /// Parse a style from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a style from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let style = Self::from_toml_str(&content)?;
        tracing::debug!(target: targets::STYLE, path = %path.display(), "loaded bar button style");
        Ok(style)
    }

    /// Apply the style to `button`.
    ///
    /// All values are validated first; on error the button is left untouched.
    /// Call [`LabelBarButton::recompute`] afterwards.
    pub fn apply(&self, button: &mut LabelBarButton) -> Result<()> {
        let resolved = self.resolve(button)?;

        button.set_color(resolved.color);
        button.set_selected_color(resolved.selected_color);
        button.set_font(resolved.font);
        button.set_selected_font(resolved.selected_font);
        button.set_content_inset(resolved.content_inset);
        button.set_vertical_alignment(resolved.vertical_alignment);
        button.set_transition_duration(resolved.transition_duration);
        button.set_transition_easing(resolved.transition_easing);

        tracing::debug!(
            target: targets::STYLE,
            needs_recompute = button.needs_recompute(),
            "applied bar button style"
        );
        Ok(())
    }

    fn resolve(&self, button: &LabelBarButton) -> Result<Resolved> {
        let color = match &self.color {
            Some(value) => parse_color("color", value)?,
            None => button.color(),
        };
        let selected_color = match &self.selected_color {
            Some(value) => parse_color("selected-color", value)?,
            None => button.selected_color(),
        };

        let font = match &self.font {
            Some(spec) => spec.resolve("font", button.font())?,
            None => button.font().clone(),
        };
        let selected_font = match (&self.selected_font, self.clear_selected_font) {
            (Some(_), true) => {
                return Err(Error::invalid_value(
                    "clear-selected-font",
                    "cannot be combined with a selected-font table",
                ));
            }
            (Some(spec), false) => Some(spec.resolve("selected-font", &font)?),
            (None, true) => None,
            (None, false) => button.selected_font().cloned(),
        };

        let content_inset = match &self.content_inset {
            Some(spec) => spec.resolve(button.content_inset())?,
            None => button.content_inset(),
        };

        let vertical_alignment = match &self.vertical_alignment {
            Some(name) => VerticalAlignment::from_name(name).ok_or_else(|| {
                Error::invalid_value(
                    "vertical-alignment",
                    format!("expected top, center or bottom, got '{name}'"),
                )
            })?,
            None => button.vertical_alignment(),
        };

        let mut transition_duration = button.transition_duration();
        let mut transition_easing = button.transition_easing();
        if let Some(transition) = &self.transition {
            if let Some(ms) = transition.duration_ms {
                transition_duration = Duration::from_millis(ms);
            }
            if let Some(name) = &transition.easing {
                transition_easing = Easing::from_name(name).ok_or_else(|| {
                    Error::invalid_value(
                        "transition.easing",
                        format!("unknown easing '{name}'"),
                    )
                })?;
            }
        }

        Ok(Resolved {
            color,
            selected_color,
            font,
            selected_font,
            content_inset,
            vertical_alignment,
            transition_duration,
            transition_easing,
        })
    }
}

fn parse_color(property: &str, value: &str) -> Result<Color> {
    if !value.trim().starts_with('#') {
        return Err(Error::invalid_color(property, value));
    }
    Color::from_hex(value.trim()).ok_or_else(|| Error::invalid_color(property, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_changes_nothing() {
        let style = BarButtonStyle::from_toml_str("").unwrap();
        let mut button = LabelBarButton::new();
        let before = button.config().clone();
        style.apply(&mut button).unwrap();
        assert_eq!(button.config(), &before);
    }

    #[test]
    fn test_full_style() {
        let style = BarButtonStyle::from_toml_str(
            r##"
            color = "#8E8E93"
            selected-color = "#FF2D55"
            vertical-alignment = "bottom"

            [font]
            family = "Inter"
            size = 15
            weight = 500

            [selected-font]
            weight = 700
            italic = true

            [content-inset]
            top = 10
            bottom = 6

            [transition]
            duration-ms = 180
            easing = "ease-out"
            "##,
        )
        .unwrap();

        let mut button = LabelBarButton::new();
        style.apply(&mut button).unwrap();

        assert_eq!(button.color(), Color::from_rgb8(0x8E, 0x8E, 0x93));
        assert_eq!(button.selected_color(), Color::from_rgb8(0xFF, 0x2D, 0x55));
        assert_eq!(button.font().family(), &FontFamily::name("Inter"));
        assert_eq!(button.font().size(), 15.0);
        assert_eq!(button.font().weight(), FontWeight::MEDIUM);

        let selected = button.selected_font().unwrap();
        assert_eq!(selected.family(), &FontFamily::name("Inter"));
        assert_eq!(selected.size(), 15.0);
        assert_eq!(selected.weight(), FontWeight::BOLD);
        assert_eq!(selected.style(), FontStyle::Italic);

        assert_eq!(button.content_inset(), EdgeInsets::new(10.0, 0.0, 6.0, 0.0));
        assert_eq!(button.vertical_alignment(), VerticalAlignment::Bottom);
        assert_eq!(button.transition_duration(), Duration::from_millis(180));
        assert_eq!(button.transition_easing(), Easing::EaseOut);
        assert!(button.needs_recompute());
    }

    #[test]
    fn test_invalid_values_leave_button_untouched() {
        let cases = [
            r##"color = "red""##,
            r##"selected-color = "#12345""##,
            r##"color = "#+F+F+F""##,
            "[font]\nsize = -2",
            "[selected-font]\nweight = 2000",
            "[content-inset]\nleft = -1",
            r#"vertical-alignment = "middle""#,
            "[transition]\neasing = \"bounce\"",
        ];

        for source in cases {
            let style = BarButtonStyle::from_toml_str(source).unwrap();
            let mut button = LabelBarButton::new();
            let before = button.config().clone();
            assert!(style.apply(&mut button).is_err(), "accepted: {source}");
            assert_eq!(button.config(), &before);
        }
    }

    #[test]
    fn test_error_kinds() {
        let style = BarButtonStyle::from_toml_str(r#"color = "blue""#).unwrap();
        let err = style.apply(&mut LabelBarButton::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidColor { ref property, .. } if property == "color"));

        let err = BarButtonStyle::from_toml_str("unknown = 1").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_clear_selected_font() {
        let mut button = LabelBarButton::new()
            .with_selected_font(Some(Font::default().with_weight(FontWeight::BOLD)));

        BarButtonStyle::from_toml_str("clear-selected-font = true")
            .unwrap()
            .apply(&mut button)
            .unwrap();
        assert!(button.selected_font().is_none());

        let conflicting =
            BarButtonStyle::from_toml_str("clear-selected-font = true\n[selected-font]\nsize = 20")
                .unwrap();
        assert!(conflicting.apply(&mut button).is_err());
    }
}
