//! Configuration of a label bar button.

use std::time::Duration;

use horizon_tabstrip_core::{Color, EdgeInsets, Font, FontFamily, FontWeight};

use crate::animation::{DEFAULT_CROSSFADE_DURATION, Easing};
use crate::host::{LabelConstraints, VerticalAlignment};

/// Default padding around the label: 12px above and below.
pub const DEFAULT_CONTENT_INSET: EdgeInsets = EdgeInsets::new(12.0, 0.0, 12.0, 0.0);

/// Everything a label bar button can be configured with.
///
/// Owned by the button; change it through the button's setters so derived
/// state is marked stale.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Label text.
    pub text: Option<String>,
    /// Label color when unselected.
    pub color: Color,
    /// Label color when selected.
    pub selected_color: Color,
    /// Label font when unselected.
    pub font: Font,
    /// Label font when selected; `None` keeps `font` in every state.
    pub selected_font: Option<Font>,
    /// Padding between the button edges and the label.
    pub content_inset: EdgeInsets,
    /// Vertical placement of the label.
    pub vertical_alignment: VerticalAlignment,
    /// Length of the font crossfade.
    pub transition_duration: Duration,
    /// Timing curve of the font crossfade.
    pub transition_easing: Easing,
}

impl ButtonConfig {
    /// Constraints that place the label for this configuration.
    pub fn label_constraints(&self) -> LabelConstraints {
        LabelConstraints {
            insets: self.content_inset,
            vertical_alignment: self.vertical_alignment,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: None,
            color: Color::BLACK,
            selected_color: Color::SYSTEM_BLUE,
            font: Font::new(FontFamily::SansSerif, 17.0).with_weight(FontWeight::SEMI_BOLD),
            selected_font: None,
            content_inset: DEFAULT_CONTENT_INSET,
            vertical_alignment: VerticalAlignment::Center,
            transition_duration: DEFAULT_CROSSFADE_DURATION,
            transition_easing: Easing::EaseInOut,
        }
    }
}
