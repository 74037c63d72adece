//! Font model and text measurement.
//!
//! # Measuring text
//!
//! ```
//! use horizon_tabstrip_core::text::{
//!     FixedAdvanceMeasurer, Font, FontFamily, MeasureOptions, TextMeasurer,
//! };
//!
//! let mut measurer = FixedAdvanceMeasurer::default();
//! let font = Font::new(FontFamily::SansSerif, 16.0);
//! let size = measurer.measure("Home", &font, MeasureOptions::default());
//! assert!(size.width > 0.0);
//! ```
//!
//! With the `cosmic-text` feature enabled, `CosmicTextMeasurer` shapes text
//! against the installed system fonts instead.

#[cfg(feature = "cosmic-text")]
mod cosmic;
mod font;
mod measure;
mod types;

#[cfg(feature = "cosmic-text")]
pub use cosmic::CosmicTextMeasurer;
pub use font::{DEFAULT_LINE_HEIGHT, Font, FontBuilder};
pub use measure::{FixedAdvanceMeasurer, MeasureOptions, TextMeasurer};
pub use types::{FontFamily, FontStyle, FontWeight};
