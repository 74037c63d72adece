//! Core primitives for Horizon Tabstrip.
//!
//! This crate holds the host-independent value types that tab bar widgets are
//! built from:
//!
//! - [`Size`] and [`Color`] (with linear interpolation)
//! - [`EdgeInsets`] and [`SizeHint`] for layout negotiation
//! - the [`text`] font model and the [`TextMeasurer`](text::TextMeasurer)
//!   capability

pub mod geometry;
pub mod text;
pub mod types;

pub use geometry::{EdgeInsets, SizeHint};
pub use text::{Font, FontFamily, FontStyle, FontWeight};
pub use types::{Color, Size};
