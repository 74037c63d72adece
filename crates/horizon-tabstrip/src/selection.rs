//! Selection state of a bar button.

/// How selected a bar button currently is.
///
/// The containing bar interpolates this while the user swipes between pages:
/// the outgoing button moves from `Selected` towards `Unselected` and the
/// incoming one the other way.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    /// Fully unselected (value 0.0).
    #[default]
    Unselected,
    /// Part way between the two end states, exclusive of both ends.
    Partial(f32),
    /// Fully selected (value 1.0).
    Selected,
}

impl SelectionState {
    /// Build a state from a raw selection value.
    ///
    /// The value is clamped to `0.0..=1.0`; NaN is treated as unselected.
    pub fn from_value(value: f32) -> Self {
        if value.is_nan() || value <= 0.0 {
            Self::Unselected
        } else if value >= 1.0 {
            Self::Selected
        } else {
            Self::Partial(value)
        }
    }

    /// The continuous selection value in `0.0..=1.0`.
    pub fn value(&self) -> f32 {
        match self {
            Self::Unselected => 0.0,
            Self::Partial(value) => *value,
            Self::Selected => 1.0,
        }
    }

    /// True at either end state (value 0 or 1).
    pub fn is_end_state(&self) -> bool {
        !matches!(self, Self::Partial(_))
    }

    /// True only when fully selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected)
    }
}

impl From<f32> for SelectionState {
    fn from(value: f32) -> Self {
        Self::from_value(value)
    }
}

impl From<f64> for SelectionState {
    fn from(value: f64) -> Self {
        Self::from_value(value as f32)
    }
}
