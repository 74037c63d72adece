//! Host capabilities consumed by bar buttons.
//!
//! A bar button never talks to a rendering toolkit directly. The host passes
//! itself in as a set of small capabilities:
//!
//! - [`TextMeasurer`] measures label text
//! - [`LayoutHost`] pins the label inside the button and re-queries sizes
//! - [`TransitionHost`] schedules font crossfades
//!
//! Anything implementing all three is a [`BarButtonHost`].

pub use horizon_tabstrip_core::text::{MeasureOptions, TextMeasurer};
use horizon_tabstrip_core::EdgeInsets;

use crate::animation::FontTransition;

/// Vertical placement of the label inside the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Pin the label to the top inset.
    Top,
    /// Center the label between the top and bottom insets.
    #[default]
    Center,
    /// Pin the label to the bottom inset.
    Bottom,
}

impl VerticalAlignment {
    /// Parse an alignment name as written in style files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "center" | "centre" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Constraints placing the label inside the button's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelConstraints {
    /// Distance from each button edge to the label.
    pub insets: EdgeInsets,
    /// Vertical placement when the button is taller than the label.
    pub vertical_alignment: VerticalAlignment,
}

/// Layout side of the host.
pub trait LayoutHost {
    /// Apply (or replace) the constraints positioning the label.
    fn apply_label_constraints(&mut self, constraints: &LabelConstraints);

    /// Drop any cached intrinsic size so the container queries it again.
    fn invalidate_intrinsic_size(&mut self);
}

/// Animation side of the host.
pub trait TransitionHost {
    /// Schedule a font crossfade.
    ///
    /// Fire and forget: a newer request may cancel an older one in whatever
    /// way the host chooses.
    fn animate_font_transition(&mut self, transition: &FontTransition);
}

/// Everything a bar button needs from its host.
pub trait BarButtonHost: TextMeasurer + LayoutHost + TransitionHost {}

impl<T: TextMeasurer + LayoutHost + TransitionHost + ?Sized> BarButtonHost for T {}
