//! Selection rendering: label color and font state.
//!
//! Color follows the selection value continuously. The font is a two-state
//! machine, [`FontState::Normal`] and [`FontState::Selected`], that only moves
//! on edges and reports each move as a crossfade.

use horizon_tabstrip_core::{Color, Font};

use crate::animation::FontTransition;
use crate::config::ButtonConfig;
use crate::logging::targets;
use crate::selection::SelectionState;

/// Which configured font the label is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontState {
    /// The normal font.
    #[default]
    Normal,
    /// The selected font.
    Selected,
}

/// The font currently applied to the label, with the state it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedFont {
    /// State the font was applied for.
    pub state: FontState,
    /// The concrete font.
    pub font: Font,
}

impl AppliedFont {
    /// The normal font of `config`.
    pub fn normal(config: &ButtonConfig) -> Self {
        Self {
            state: FontState::Normal,
            font: config.font.clone(),
        }
    }
}

/// Result of rendering one selection update.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Label color for this selection value.
    pub color: Color,
    /// Font applied after this update.
    pub applied: AppliedFont,
    /// Crossfade to schedule, if the font changed on this update.
    pub font_transition: Option<FontTransition>,
}

impl RenderOutput {
    /// The font the label should be drawn in.
    pub fn font(&self) -> &Font {
        &self.applied.font
    }
}

/// Label color for a selection value.
///
/// Returns exactly `color` when unselected and exactly `selected_color` when
/// selected; partial values interpolate linearly.
pub fn interpolate_color(selection: SelectionState, color: Color, selected_color: Color) -> Color {
    match selection {
        SelectionState::Unselected => color,
        SelectionState::Selected => selected_color,
        SelectionState::Partial(t) => color.lerp(selected_color, t),
    }
}

/// Computes label color and font transitions for selection updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateRenderer;

impl StateRenderer {
    /// Render `selection` for `config`, given the font currently applied.
    ///
    /// A transition is emitted only when the applied font actually changes, so
    /// repeated calls with the same input are idempotent.
    pub fn render(
        &self,
        selection: SelectionState,
        config: &ButtonConfig,
        applied: &AppliedFont,
    ) -> RenderOutput {
        let color = interpolate_color(selection, config.color, config.selected_color);

        let target = if selection.is_selected() {
            config.selected_font.as_ref().map(|font| AppliedFont {
                state: FontState::Selected,
                font: font.clone(),
            })
        } else if applied.state == FontState::Selected {
            Some(AppliedFont::normal(config))
        } else {
            None
        };

        let Some(target) = target else {
            return RenderOutput {
                color,
                applied: applied.clone(),
                font_transition: None,
            };
        };

        let animate = target.font != applied.font && config.selected_font.is_some();
        let font_transition = animate.then(|| {
            FontTransition::new(
                applied.font.clone(),
                target.font.clone(),
                config.transition_duration,
                config.transition_easing,
            )
        });

        if target.state != applied.state || font_transition.is_some() {
            tracing::debug!(
                target: targets::RENDER,
                from = ?applied.state,
                to = ?target.state,
                animated = font_transition.is_some(),
                "label font state changed"
            );
        }

        RenderOutput {
            color,
            applied: target,
            font_transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_tabstrip_core::FontWeight;

    fn config_with_selected_font() -> ButtonConfig {
        let mut config = ButtonConfig {
            color: Color::from_rgb(0.3, 0.3, 0.3),
            selected_color: Color::from_rgb(0.7, 0.1, 0.9),
            ..ButtonConfig::default()
        };
        config.selected_font = Some(config.font.with_weight(FontWeight::BOLD));
        config
    }

    #[test]
    fn test_color_endpoints_exact() {
        let config = config_with_selected_font();
        let applied = AppliedFont::normal(&config);
        let renderer = StateRenderer;

        let out = renderer.render(SelectionState::Unselected, &config, &applied);
        assert_eq!(out.color, config.color);

        let out = renderer.render(SelectionState::Selected, &config, &applied);
        assert_eq!(out.color, config.selected_color);
    }

    #[test]
    fn test_color_midpoint() {
        let color = interpolate_color(
            SelectionState::Partial(0.5),
            Color::BLACK,
            Color::WHITE,
        );
        assert!((color.r - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_selecting_emits_single_transition() {
        let config = config_with_selected_font();
        let renderer = StateRenderer;
        let applied = AppliedFont::normal(&config);

        let first = renderer.render(SelectionState::Selected, &config, &applied);
        let transition = first.font_transition.clone().unwrap();
        assert_eq!(transition.from, config.font);
        assert_eq!(Some(&transition.to), config.selected_font.as_ref());
        assert_eq!(first.applied.state, FontState::Selected);

        let second = renderer.render(SelectionState::Selected, &config, &first.applied);
        assert!(second.font_transition.is_none());
        assert_eq!(second.applied, first.applied);
    }

    #[test]
    fn test_leaving_selected_transitions_back_once() {
        let config = config_with_selected_font();
        let renderer = StateRenderer;
        let selected = renderer
            .render(SelectionState::Selected, &config, &AppliedFont::normal(&config))
            .applied;

        let leaving = renderer.render(SelectionState::Partial(0.9), &config, &selected);
        let transition = leaving.font_transition.clone().unwrap();
        assert_eq!(Some(&transition.from), config.selected_font.as_ref());
        assert_eq!(transition.to, config.font);
        assert_eq!(leaving.applied.state, FontState::Normal);

        let further = renderer.render(SelectionState::Partial(0.4), &config, &leaving.applied);
        assert!(further.font_transition.is_none());
    }

    #[test]
    fn test_partial_values_do_not_swap_font() {
        let config = config_with_selected_font();
        let renderer = StateRenderer;
        let applied = AppliedFont::normal(&config);
        for value in [0.0, 0.1, 0.5, 0.999] {
            let out = renderer.render(SelectionState::from_value(value), &config, &applied);
            assert!(out.font_transition.is_none());
            assert_eq!(out.applied.state, FontState::Normal);
        }
    }

    #[test]
    fn test_no_selected_font_never_transitions() {
        let config = ButtonConfig::default();
        let renderer = StateRenderer;
        let mut applied = AppliedFont::normal(&config);
        for value in [0.0, 1.0, 0.5, 1.0, 0.0] {
            let out = renderer.render(SelectionState::from_value(value), &config, &applied);
            assert!(out.font_transition.is_none());
            applied = out.applied;
        }
        assert_eq!(applied.state, FontState::Normal);
    }

    #[test]
    fn test_identical_fonts_flip_state_silently() {
        let mut config = ButtonConfig::default();
        config.selected_font = Some(config.font.clone());
        let renderer = StateRenderer;

        let out = renderer.render(SelectionState::Selected, &config, &AppliedFont::normal(&config));
        assert!(out.font_transition.is_none());
        assert_eq!(out.applied.state, FontState::Selected);

        let back = renderer.render(SelectionState::Unselected, &config, &out.applied);
        assert!(back.font_transition.is_none());
        assert_eq!(back.applied.state, FontState::Normal);
    }

    #[test]
    fn test_transition_uses_configured_timing() {
        let mut config = config_with_selected_font();
        config.transition_duration = std::time::Duration::from_millis(400);
        config.transition_easing = crate::animation::Easing::Linear;
        let out = StateRenderer.render(
            SelectionState::Selected,
            &config,
            &AppliedFont::normal(&config),
        );
        let transition = out.font_transition.unwrap();
        assert_eq!(transition.duration_ms(), 400);
        assert_eq!(transition.easing, crate::animation::Easing::Linear);
    }
}
