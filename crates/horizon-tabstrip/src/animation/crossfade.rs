//! Font crossfade transitions.
//!
//! Fonts cannot be interpolated, so a bar button swaps its label font in one
//! step and asks the host to hide the swap behind a timed blend.

use std::time::Duration;

use horizon_tabstrip_core::Font;

use super::easing::{Easing, ease};

/// Default duration of a font crossfade.
pub const DEFAULT_CROSSFADE_DURATION: Duration = Duration::from_millis(250);

/// Visual effect used to present a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionKind {
    /// Dissolve the old rendering into the new one.
    #[default]
    CrossDissolve,
}

/// A request to crossfade a label from one font to another.
///
/// Handed to the host once per font swap; the host owns scheduling and
/// cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct FontTransition {
    /// Font the label is leaving.
    pub from: Font,
    /// Font the label ends up in.
    pub to: Font,
    /// Length of the blend.
    pub duration: Duration,
    /// Timing curve of the blend.
    pub easing: Easing,
    /// Visual effect.
    pub kind: TransitionKind,
}

impl FontTransition {
    /// Create a crossfade between two fonts.
    pub fn new(from: Font, to: Font, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            kind: TransitionKind::CrossDissolve,
        }
    }

    /// Duration in whole milliseconds.
    pub fn duration_ms(&self) -> u128 {
        self.duration.as_millis()
    }

    /// Eased progress after `elapsed` time.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let raw = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease(self.easing, raw)
    }

    /// Opacity of the rendering in the `from` font at eased progress `t`.
    pub fn outgoing_opacity(&self, t: f32) -> f32 {
        1.0 - t.clamp(0.0, 1.0)
    }

    /// Opacity of the rendering in the `to` font at eased progress `t`.
    pub fn incoming_opacity(&self, t: f32) -> f32 {
        t.clamp(0.0, 1.0)
    }
}
