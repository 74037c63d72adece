//! Animation support for bar buttons.
//!
//! Label colors follow the selection value continuously, while font changes
//! are discrete and presented as a [`FontTransition`] crossfade.

mod crossfade;
mod easing;

pub use crossfade::{DEFAULT_CROSSFADE_DURATION, FontTransition, TransitionKind};
pub use easing::{Easing, ease};
