//! Horizon Tabstrip - selectable label buttons for tab bars.
//!
//! A [`LabelBarButton`] shows a text label inside a tab bar and follows the
//! bar's selection progress: the label color interpolates between a normal
//! and a selected color, and an optional selected font is swapped in with a
//! crossfade when the tab becomes fully selected.
//!
//! The button is host-agnostic. Text measurement, layout invalidation and
//! animation scheduling are capabilities the host passes in (see [`host`]).
//!
//! # Example
//!
//! ```ignore
//! use horizon_tabstrip::prelude::*;
//!
//! let mut button = LabelBarButton::new()
//!     .with_selected_font(Some(Font::default().with_weight(FontWeight::BOLD)));
//!
//! button.layout(&mut host);
//! button.populate(&BarItem::new("Featured"), &mut host);
//!
//! let output = button.update(1.0, &mut host);
//! assert_eq!(output.color, button.selected_color());
//! ```

pub mod animation;
pub mod host;
pub mod logging;
pub mod render;
pub mod size;
pub mod style;

mod button;
mod config;
mod error;
mod item;
mod selection;

pub use button::LabelBarButton;
pub use config::{ButtonConfig, DEFAULT_CONTENT_INSET};
pub use error::{Error, Result};
pub use item::BarItem;
pub use selection::SelectionState;

pub use horizon_tabstrip_core::{
    Color, EdgeInsets, Font, FontFamily, FontStyle, FontWeight, Size, SizeHint,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::{Easing, FontTransition};
    pub use crate::host::{
        BarButtonHost, LabelConstraints, LayoutHost, MeasureOptions, TextMeasurer,
        TransitionHost, VerticalAlignment,
    };
    pub use crate::render::{AppliedFont, FontState, RenderOutput, StateRenderer};
    pub use crate::size::SizeCalculator;
    pub use crate::style::BarButtonStyle;
    pub use crate::{BarItem, ButtonConfig, LabelBarButton, SelectionState};
    pub use horizon_tabstrip_core::text::FixedAdvanceMeasurer;
    pub use horizon_tabstrip_core::{
        Color, EdgeInsets, Font, FontFamily, FontStyle, FontWeight, Size, SizeHint,
    };
}
