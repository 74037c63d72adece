//! LabelBarButton widget implementation.
//!
//! This module provides [`LabelBarButton`], a tab bar button that shows a text
//! label and follows the bar's selection progress with its color and font.
//!
//! # Example
//!
//! ```ignore
//! use horizon_tabstrip::prelude::*;
//!
//! let mut button = LabelBarButton::new()
//!     .with_selected_color(Color::from_rgb8(255, 45, 85))
//!     .with_selected_font(Some(Font::default().with_weight(FontWeight::BOLD)));
//!
//! button.layout(&mut host);
//! button.populate(&BarItem::new("Library"), &mut host);
//!
//! // Driven by the bar while the user swipes.
//! let output = button.update(0.5, &mut host);
//! host.draw_label(output.color, output.font());
//! ```
//!
//! # Recomputation
//!
//! Setters only record the change. Call [`LabelBarButton::recompute`] once a
//! batch of configuration changes is done; it re-measures the label,
//! invalidates the host layout, refreshes the label constraints and snaps the
//! applied font to the new configuration.

use std::time::Duration;

use horizon_tabstrip_core::{Color, EdgeInsets, Font, Size, SizeHint};

use crate::animation::Easing;
use crate::config::ButtonConfig;
use crate::host::{LayoutHost, TextMeasurer, TransitionHost, VerticalAlignment};
use crate::item::BarItem;
use crate::logging::targets;
use crate::render::{AppliedFont, FontState, RenderOutput, StateRenderer};
use crate::selection::SelectionState;
use crate::size::SizeCalculator;

/// Derived state waiting for the next [`LabelBarButton::recompute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stale {
    size: bool,
    constraints: bool,
    font: bool,
}

impl Stale {
    const ALL: Self = Self {
        size: true,
        constraints: true,
        font: true,
    };
    const NONE: Self = Self {
        size: false,
        constraints: false,
        font: false,
    };

    fn any(&self) -> bool {
        self.size || self.constraints || self.font
    }
}

/// A bar button displaying a text label.
///
/// The label color interpolates between `color` and `selected_color` with the
/// selection value. When a `selected_font` is set the label swaps to it on
/// reaching full selection and back on leaving it, each swap handed to the
/// host as a crossfade.
///
/// The intrinsic size always fits the label in the larger of the two fonts.
#[derive(Debug, Clone)]
pub struct LabelBarButton {
    config: ButtonConfig,

    size: SizeCalculator,
    renderer: StateRenderer,

    /// Selection from the last update.
    selection: SelectionState,

    /// Font currently applied to the label.
    applied: AppliedFont,

    /// Explicit accessibility label from the populated item.
    accessibility_label: Option<String>,

    /// Whether `layout` has run.
    attached: bool,

    stale: Stale,
}

impl LabelBarButton {
    /// Create a new label bar button with default styling.
    pub fn new() -> Self {
        Self::with_config(ButtonConfig::default())
    }

    /// Create a button from a complete configuration.
    pub fn with_config(config: ButtonConfig) -> Self {
        let applied = AppliedFont::normal(&config);
        Self {
            config,
            size: SizeCalculator::new(),
            renderer: StateRenderer,
            selection: SelectionState::Unselected,
            applied,
            accessibility_label: None,
            attached: false,
            stale: Stale::ALL,
        }
    }

    // =========================================================================
    // Host Contract
    // =========================================================================

    /// Attach the button: pin the label inside it.
    ///
    /// Runs once; later calls are ignored.
    pub fn layout<H: LayoutHost + ?Sized>(&mut self, host: &mut H) {
        if self.attached {
            tracing::debug!(target: targets::LAYOUT, "bar button already attached, ignoring layout");
            return;
        }
        host.apply_label_constraints(&self.config.label_constraints());
        self.attached = true;
        self.stale.constraints = false;
        tracing::trace!(target: targets::LAYOUT, "bar button attached");
    }

    /// Bind the button to a bar item and recompute derived state.
    pub fn populate<H: TextMeasurer + LayoutHost>(&mut self, item: &BarItem, host: &mut H) {
        self.set_text(item.title.clone());
        self.accessibility_label = item.accessibility_label.clone();
        self.recompute(host);
    }

    /// Render a selection update.
    ///
    /// Any font crossfade is scheduled on the host before returning.
    pub fn update<H: TransitionHost + ?Sized>(
        &mut self,
        selection: impl Into<SelectionState>,
        host: &mut H,
    ) -> RenderOutput {
        let selection = selection.into();
        self.selection = selection;

        let output = self.renderer.render(selection, &self.config, &self.applied);
        if let Some(transition) = &output.font_transition {
            host.animate_font_transition(transition);
        }
        self.applied = output.applied.clone();
        output
    }

    /// Recompute all derived state after configuration changes.
    ///
    /// Idempotent: with nothing changed since the last call this does nothing.
    pub fn recompute<H: TextMeasurer + LayoutHost>(&mut self, host: &mut H) {
        if self.stale.size {
            let has_text = self.config.text.as_deref().is_some_and(|text| !text.is_empty());
            self.size.compute(
                &mut *host,
                self.config.text.as_deref(),
                &self.config.font,
                self.config.selected_font.as_ref(),
                self.config.content_inset,
            );
            if has_text {
                host.invalidate_intrinsic_size();
            }
        }

        if self.stale.constraints && self.attached {
            host.apply_label_constraints(&self.config.label_constraints());
        }

        if self.stale.font {
            self.reconcile_font();
        }

        self.stale = Stale::NONE;
    }

    /// Snap the applied font to the current configuration without animating.
    fn reconcile_font(&mut self) {
        let target = match (self.applied.state, &self.config.selected_font) {
            (FontState::Selected, Some(selected_font)) => AppliedFont {
                state: FontState::Selected,
                font: selected_font.clone(),
            },
            _ => AppliedFont::normal(&self.config),
        };

        if target != self.applied {
            tracing::trace!(
                target: targets::RENDER,
                state = ?target.state,
                "applied font reconciled with configuration"
            );
            self.applied = target;
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the label text.
    pub fn text(&self) -> Option<&str> {
        self.config.text.as_deref()
    }

    /// Set the label text.
    pub fn set_text(&mut self, text: Option<String>) {
        if self.config.text != text {
            self.config.text = text;
            self.stale.size = true;
        }
    }

    /// Set the label text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(Some(text.into()));
        self
    }

    /// Get the unselected label color.
    pub fn color(&self) -> Color {
        self.config.color
    }

    /// Set the unselected label color.
    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
    }

    /// Set the unselected label color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    /// Get the selected label color.
    pub fn selected_color(&self) -> Color {
        self.config.selected_color
    }

    /// Set the selected label color.
    pub fn set_selected_color(&mut self, color: Color) {
        self.config.selected_color = color;
    }

    /// Set the selected label color using builder pattern.
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.set_selected_color(color);
        self
    }

    /// Get the unselected font.
    pub fn font(&self) -> &Font {
        &self.config.font
    }

    /// Set the unselected font.
    pub fn set_font(&mut self, font: Font) {
        if self.config.font != font {
            self.config.font = font;
            self.stale.size = true;
            self.stale.font = true;
        }
    }

    /// Set the unselected font using builder pattern.
    pub fn with_font(mut self, font: Font) -> Self {
        self.set_font(font);
        self
    }

    /// Get the selected font, if one is set.
    pub fn selected_font(&self) -> Option<&Font> {
        self.config.selected_font.as_ref()
    }

    /// Set the selected font; `None` keeps the normal font in every state.
    pub fn set_selected_font(&mut self, font: Option<Font>) {
        if self.config.selected_font != font {
            self.config.selected_font = font;
            self.stale.size = true;
            self.stale.font = true;
        }
    }

    /// Set the selected font using builder pattern.
    pub fn with_selected_font(mut self, font: Option<Font>) -> Self {
        self.set_selected_font(font);
        self
    }

    /// Get the content inset.
    pub fn content_inset(&self) -> EdgeInsets {
        self.config.content_inset
    }

    /// Set the padding between the button edges and the label.
    pub fn set_content_inset(&mut self, inset: EdgeInsets) {
        if self.config.content_inset != inset {
            self.config.content_inset = inset;
            self.stale.size = true;
            self.stale.constraints = true;
        }
    }

    /// Set the content inset using builder pattern.
    pub fn with_content_inset(mut self, inset: EdgeInsets) -> Self {
        self.set_content_inset(inset);
        self
    }

    /// Get the vertical label alignment.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.config.vertical_alignment
    }

    /// Set the vertical label alignment.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        if self.config.vertical_alignment != alignment {
            self.config.vertical_alignment = alignment;
            self.stale.constraints = true;
        }
    }

    /// Set the vertical label alignment using builder pattern.
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.set_vertical_alignment(alignment);
        self
    }

    /// Get the font crossfade duration.
    pub fn transition_duration(&self) -> Duration {
        self.config.transition_duration
    }

    /// Set the font crossfade duration.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.config.transition_duration = duration;
    }

    /// Get the font crossfade easing.
    pub fn transition_easing(&self) -> Easing {
        self.config.transition_easing
    }

    /// Set the font crossfade easing.
    pub fn set_transition_easing(&mut self, easing: Easing) {
        self.config.transition_easing = easing;
    }

    /// Get the full configuration.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// The cached intrinsic size.
    pub fn intrinsic_size(&self) -> Size {
        self.size.cached()
    }

    /// Size hint for the containing bar; fixed at the intrinsic size.
    pub fn size_hint(&self) -> SizeHint {
        SizeHint::fixed(self.intrinsic_size())
    }

    /// Selection from the last update.
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    /// Which configured font the label is in.
    pub fn font_state(&self) -> FontState {
        self.applied.state
    }

    /// The font currently applied to the label.
    pub fn applied_font(&self) -> &Font {
        &self.applied.font
    }

    /// Label announced by assistive technology: explicit label, else text.
    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref().or(self.text())
    }

    /// Whether configuration changed since the last recompute.
    pub fn needs_recompute(&self) -> bool {
        self.stale.any()
    }

    /// Whether `layout` has run.
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for LabelBarButton {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure LabelBarButton is Send + Sync
static_assertions::assert_impl_all!(LabelBarButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FontTransition;
    use crate::host::{LabelConstraints, MeasureOptions};
    use horizon_tabstrip_core::text::FixedAdvanceMeasurer;
    use horizon_tabstrip_core::FontWeight;

    #[derive(Default)]
    struct RecordingHost {
        measurer: FixedAdvanceMeasurer,
        constraints: Vec<LabelConstraints>,
        invalidations: usize,
        transitions: Vec<FontTransition>,
    }

    impl TextMeasurer for RecordingHost {
        fn measure(&mut self, text: &str, font: &Font, options: MeasureOptions) -> Size {
            self.measurer.measure(text, font, options)
        }
    }

    impl LayoutHost for RecordingHost {
        fn apply_label_constraints(&mut self, constraints: &LabelConstraints) {
            self.constraints.push(*constraints);
        }

        fn invalidate_intrinsic_size(&mut self) {
            self.invalidations += 1;
        }
    }

    impl TransitionHost for RecordingHost {
        fn animate_font_transition(&mut self, transition: &FontTransition) {
            self.transitions.push(transition.clone());
        }
    }

    fn bold_button() -> LabelBarButton {
        let button = LabelBarButton::new();
        let bold = button.font().with_weight(FontWeight::BOLD);
        button.with_selected_font(Some(bold))
    }

    #[test]
    fn test_button_creation() {
        let button = LabelBarButton::new();
        assert_eq!(button.text(), None);
        assert_eq!(button.intrinsic_size(), Size::ZERO);
        assert_eq!(button.font_state(), FontState::Normal);
        assert!(button.needs_recompute());
        assert!(!button.is_attached());
    }

    #[test]
    fn test_layout_runs_once() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new();
        button.layout(&mut host);
        button.layout(&mut host);
        assert_eq!(host.constraints.len(), 1);
        assert_eq!(host.constraints[0].insets, button.content_inset());
        assert!(button.is_attached());
    }

    #[test]
    fn test_populate_measures_and_invalidates() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new();
        button.populate(&BarItem::new("Home"), &mut host);

        assert_eq!(button.text(), Some("Home"));
        assert_eq!(host.invalidations, 1);
        let size = button.intrinsic_size();
        assert!(size.width > 0.0);
        assert!(size.height >= button.content_inset().vertical());
        assert!(!button.needs_recompute());
        assert_eq!(button.size_hint().preferred, size);
    }

    #[test]
    fn test_untitled_item_keeps_size() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new();
        button.populate(&BarItem::new("Home"), &mut host);
        let size = button.intrinsic_size();

        button.populate(&BarItem::untitled(), &mut host);
        assert_eq!(button.text(), None);
        assert_eq!(button.intrinsic_size(), size);
        assert_eq!(host.invalidations, 1);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new().with_text("Home");
        button.recompute(&mut host);
        button.recompute(&mut host);
        assert_eq!(host.invalidations, 1);

        // Setting an equal value is not a change.
        button.set_font(button.font().clone());
        assert!(!button.needs_recompute());
    }

    #[test]
    fn test_inset_change_reapplies_constraints_when_attached() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new().with_text("Home");
        button.layout(&mut host);
        button.recompute(&mut host);
        assert_eq!(host.constraints.len(), 1);

        button.set_content_inset(EdgeInsets::uniform(4.0));
        button.set_vertical_alignment(VerticalAlignment::Bottom);
        button.recompute(&mut host);
        assert_eq!(host.constraints.len(), 2);
        assert_eq!(host.constraints[1].insets, EdgeInsets::uniform(4.0));
        assert_eq!(host.constraints[1].vertical_alignment, VerticalAlignment::Bottom);
    }

    #[test]
    fn test_update_schedules_single_crossfade() {
        let mut host = RecordingHost::default();
        let mut button = bold_button().with_text("Home");
        button.recompute(&mut host);

        let first = button.update(1.0, &mut host);
        let second = button.update(1.0, &mut host);
        assert!(first.font_transition.is_some());
        assert!(second.font_transition.is_none());
        assert_eq!(host.transitions.len(), 1);
        assert_eq!(button.font_state(), FontState::Selected);
        assert_eq!(Some(button.applied_font()), button.selected_font());

        button.update(0.6, &mut host);
        button.update(0.2, &mut host);
        assert_eq!(host.transitions.len(), 2);
        assert_eq!(button.font_state(), FontState::Normal);
        assert_eq!(button.applied_font(), button.font());
    }

    #[test]
    fn test_clearing_selected_font_snaps_back() {
        let mut host = RecordingHost::default();
        let mut button = bold_button().with_text("Home");
        button.recompute(&mut host);
        button.update(1.0, &mut host);
        assert_eq!(host.transitions.len(), 1);

        button.set_selected_font(None);
        button.recompute(&mut host);
        assert_eq!(button.font_state(), FontState::Normal);
        assert_eq!(button.applied_font(), button.font());

        button.update(0.0, &mut host);
        button.update(1.0, &mut host);
        assert_eq!(host.transitions.len(), 1);
    }

    #[test]
    fn test_font_change_in_normal_state_snaps() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new().with_text("Home");
        button.recompute(&mut host);

        let larger = button.font().with_size(30.0);
        button.set_font(larger.clone());
        button.recompute(&mut host);
        assert_eq!(button.applied_font(), &larger);
        assert!(host.transitions.is_empty());
    }

    #[test]
    fn test_accessibility_label() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new();
        button.populate(&BarItem::new("Inbox"), &mut host);
        assert_eq!(button.accessibility_label(), Some("Inbox"));

        button.populate(
            &BarItem::new("Inbox").with_accessibility_label("Inbox, 2 unread"),
            &mut host,
        );
        assert_eq!(button.accessibility_label(), Some("Inbox, 2 unread"));
    }

    #[test]
    fn test_update_tracks_selection() {
        let mut host = RecordingHost::default();
        let mut button = LabelBarButton::new();
        let output = button.update(SelectionState::Partial(0.5), &mut host);
        assert_eq!(button.selection_state(), SelectionState::Partial(0.5));
        assert_eq!(output.font(), button.font());
    }
}
