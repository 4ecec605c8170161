//! Onboarding step 3: pick the add-ons to activate.

use crate::catalog::{estimated_cost, format_thousands, total_credits, DEFAULT_FEATURES, FEATURES};
use crate::components::Step;
use crate::keymap::{Action, Keymap};
use crate::navigation::ScreenId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::validation::validate_feature_selection;
use crate::utils::{interpret, stack_rows, FormKey};
use crate::widgets::{Button, Checkbox};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug)]
pub struct OnboardingFeaturesScreen {
    /// Parallel to [`FEATURES`].
    selected: Vec<bool>,
    /// Index of the focused feature; `FEATURES.len()` is the confirm button.
    focus: usize,
    error: Option<String>,
}

impl Default for OnboardingFeaturesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFeaturesScreen {
    pub fn new() -> Self {
        Self {
            selected: FEATURES
                .iter()
                .map(|f| DEFAULT_FEATURES.contains(&f.id))
                .collect(),
            focus: 0,
            error: None,
        }
    }

    /// Ids of the selected features, in catalog order.
    pub fn selected_ids(&self) -> Vec<&'static str> {
        FEATURES
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(f, _)| f.id)
            .collect()
    }

    pub fn total_credits(&self) -> u32 {
        total_credits(self.selected_ids())
    }

    pub fn can_confirm(&self) -> bool {
        validate_feature_selection(self.selected_ids().len()).is_ok()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn toggle_focused(&mut self) {
        if let Some(on) = self.selected.get_mut(self.focus) {
            *on = !*on;
            let on = *on;
            self.error = None;
            debug!(
                feature = FEATURES[self.focus].id,
                selected = on,
                total = self.total_credits(),
                "feature toggled"
            );
        }
    }

    fn confirm(&mut self) -> ScreenAction {
        let ids = self.selected_ids();
        match validate_feature_selection(ids.len()) {
            Ok(()) => {
                info!(features = ?ids, credits = self.total_credits(), "features confirmed");
                ScreenAction::navigate(ScreenId::Dashboard)
            }
            Err(e) => {
                debug!(error = %e, "feature selection rejected");
                self.error = Some(e.to_string());
                ScreenAction::None
            }
        }
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let credits = self.total_credits();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [usage_row, cost_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
        summary_row(
            frame,
            usage_row,
            "Total estimated usage",
            Span::styled(
                format!("{} credits/mo", format_thousands(credits)),
                t.emphasis_style(),
            ),
        );
        summary_row(
            frame,
            cost_row,
            "Estimated cost",
            Span::styled(
                format!("${}/mo", estimated_cost(credits)),
                t.accent_style().add_modifier(Modifier::BOLD),
            ),
        );
    }
}

fn summary_row(frame: &mut Frame, area: Rect, label: &str, value: Span) {
    let [label_area, value_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(24)]).areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(label, theme().muted_style())),
        label_area,
    );
    frame.render_widget(
        Paragraph::new(value).alignment(Alignment::Right),
        value_area,
    );
}

impl Screen for OnboardingFeaturesScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OnboardingFeatures
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Select the features you want to activate".to_string()
    }

    fn step(&self) -> Option<Step> {
        Some(Step::new(3, 3))
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        format!(
            "{}/{}: Navigate | {}: Toggle | {}: Confirm | {}: Help",
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.get_key_display_for_action(Action::ToggleSelect),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::Help),
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let mut heights = vec![2; FEATURES.len()];
        heights.extend([1, 4, 1, 1]);
        let rows = stack_rows(area, &heights);

        for (i, feature) in FEATURES.iter().enumerate() {
            let [check_row, detail_row] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(rows[i]);
            frame.render_widget(
                Checkbox::new(feature.name, self.selected[i]).focused(self.focus == i),
                check_row,
            );
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("      {}", feature.description), t.muted_style()),
                    Span::styled(
                        format!("  ~{} credits/mo", format_thousands(feature.credits)),
                        t.accent_style(),
                    ),
                ])),
                detail_row,
            );
        }

        let base = FEATURES.len();
        self.render_summary(frame, rows[base + 1]);
        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(format!("  {}", error)).style(t.error_style()),
                rows[base + 2],
            );
        }
        frame.render_widget(
            Button::new("Confirm & continue")
                .focused(self.focus == base)
                .enabled(self.can_confirm()),
            rows[base + 3],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };

        let stops = FEATURES.len() + 1;
        let action = match interpret(&key, ctx.keymap(), false) {
            FormKey::NextField => {
                self.focus = (self.focus + 1) % stops;
                ScreenAction::None
            }
            FormKey::PrevField => {
                self.focus = (self.focus + stops - 1) % stops;
                ScreenAction::None
            }
            FormKey::First => {
                self.focus = 0;
                ScreenAction::None
            }
            FormKey::Last => {
                self.focus = FEATURES.len();
                ScreenAction::None
            }
            FormKey::Toggle => {
                self.toggle_focused();
                ScreenAction::None
            }
            FormKey::Submit => self.confirm(),
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}
