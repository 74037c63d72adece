//! Data items that bar buttons are populated from.

/// The data a bar shows for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BarItem {
    /// Title displayed by label buttons.
    pub title: Option<String>,
    /// Label announced by assistive technology; defaults to the title.
    pub accessibility_label: Option<String>,
}

impl BarItem {
    /// Create an item with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            accessibility_label: None,
        }
    }

    /// Create an item without a title.
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Set the accessibility label using builder pattern.
    pub fn with_accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }
}
