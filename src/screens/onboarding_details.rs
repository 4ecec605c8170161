//! Onboarding step 1: who the customer is.

use crate::catalog::{BusinessType, BUSINESS_TYPES, OTHER_BUSINESS_TYPE};
use crate::components::Step;
use crate::keymap::Keymap;
use crate::navigation::ScreenId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::validation::validate_business_details;
use crate::utils::{cycle_next, cycle_prev, edit_text, interpret, stack_rows, FormKey, TextInput};
use crate::widgets::{Button, TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    FullName,
    BusinessName,
    BusinessType,
    CustomType,
    Submit,
}

#[derive(Debug)]
pub struct OnboardingDetailsScreen {
    full_name: TextInput,
    business_name: TextInput,
    /// Index into [`BUSINESS_TYPES`]; `None` until the user picks one.
    business_type: Option<usize>,
    custom_type: TextInput,
    focus: Focus,
    error: Option<String>,
}

impl Default for OnboardingDetailsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingDetailsScreen {
    pub fn new() -> Self {
        Self {
            full_name: TextInput::new(),
            business_name: TextInput::new(),
            business_type: None,
            custom_type: TextInput::new(),
            focus: Focus::FullName,
            error: None,
        }
    }

    pub fn business_type(&self) -> Option<&'static BusinessType> {
        self.business_type.and_then(|i| BUSINESS_TYPES.get(i))
    }

    pub fn custom_type(&self) -> &str {
        self.custom_type.text()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn is_other(&self) -> bool {
        self.business_type()
            .is_some_and(|b| b.value == OTHER_BUSINESS_TYPE)
    }

    /// The custom type field only takes focus while "Other" is selected.
    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::FullName, Focus::BusinessName, Focus::BusinessType];
        if self.is_other() {
            order.push(Focus::CustomType);
        }
        order.push(Focus::Submit);
        order
    }

    fn validate(&self) -> Result<()> {
        validate_business_details(
            self.full_name.text(),
            self.business_name.text(),
            self.business_type().map(|b| b.value),
            self.custom_type.text(),
        )
    }

    fn select_type(&mut self, index: usize) {
        self.business_type = Some(index);
        if !self.is_other() {
            self.custom_type.clear();
        }
        self.error = None;
        debug!(business_type = ?self.business_type().map(|b| b.value), "business type selected");
    }

    fn step_type(&mut self, forward: bool) {
        let last = BUSINESS_TYPES.len() - 1;
        let next = match (self.business_type, forward) {
            (None, true) => 0,
            (None, false) => last,
            (Some(i), true) => (i + 1) % BUSINESS_TYPES.len(),
            (Some(i), false) => i.checked_sub(1).unwrap_or(last),
        };
        self.select_type(next);
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::FullName => Some(&mut self.full_name),
            Focus::BusinessName => Some(&mut self.business_name),
            Focus::CustomType => Some(&mut self.custom_type),
            _ => None,
        }
    }

    fn submit(&mut self) -> ScreenAction {
        match self.validate() {
            Ok(()) => {
                info!(
                    full_name = %self.full_name.text(),
                    business_name = %self.business_name.text(),
                    business_type = ?self.business_type().map(|b| b.value),
                    custom_type = %self.custom_type.text(),
                    "business details submitted"
                );
                ScreenAction::navigate(ScreenId::OnboardingUsage)
            }
            Err(e) => {
                debug!(error = %e, "business details rejected");
                self.error = Some(e.to_string());
                ScreenAction::None
            }
        }
    }

    fn render_type_picker(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.focus == Focus::BusinessType;
        let border = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let title_style = if focused { t.title_style() } else { t.text_style() };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(" Business type ", title_style));

        let value = match self.business_type() {
            Some(b) => Span::styled(b.label, t.text_style()),
            None => Span::styled("Select your business type", t.muted_style()),
        };
        let mut spans = vec![value];
        if focused {
            spans.insert(0, Span::styled("◀ ", t.accent_style()));
            spans.push(Span::styled(" ▶", t.accent_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

impl Screen for OnboardingDetailsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OnboardingDetails
    }

    fn step(&self) -> Option<Step> {
        Some(Step::new(1, 3))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let custom_height = if self.is_other() { FIELD_HEIGHT } else { 0 };
        let rows = stack_rows(
            area,
            &[FIELD_HEIGHT, FIELD_HEIGHT, FIELD_HEIGHT, custom_height, 1, 1, 1],
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.full_name)
                .title("Full name")
                .placeholder("John Doe")
                .focused(self.focus == Focus::FullName),
            rows[0],
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.business_name)
                .title("Business name")
                .placeholder("Acme Inc.")
                .focused(self.focus == Focus::BusinessName),
            rows[1],
        );
        self.render_type_picker(frame, rows[2]);
        if self.is_other() {
            frame.render_text_input_widget(
                TextInputWidget::new(&self.custom_type)
                    .title("Please specify your business type")
                    .placeholder("Enter your business type")
                    .focused(self.focus == Focus::CustomType),
                rows[3],
            );
        }
        if let Some(error) = &self.error {
            frame.render_widget(
                Paragraph::new(format!("  {}", error)).style(t.error_style()),
                rows[4],
            );
        }
        frame.render_widget(
            Button::new("Continue")
                .focused(self.focus == Focus::Submit)
                .enabled(self.validate().is_ok()),
            rows[5],
        );
        Ok(())
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        if self.focus == Focus::BusinessType {
            format!("←/→: Choose type | {}", keymap.footer_form())
        } else {
            keymap.footer_form()
        }
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) => {
                if let Some(input) = self.focused_input_mut() {
                    input.insert_str(&text);
                    self.error = None;
                }
                return Ok(ScreenAction::None);
            }
            _ => return Ok(ScreenAction::None),
        };

        let order = self.focus_order();
        let action = match interpret(&key, ctx.keymap(), self.is_input_focused()) {
            FormKey::NextField => {
                self.focus = cycle_next(&order, self.focus);
                ScreenAction::None
            }
            FormKey::PrevField => {
                self.focus = cycle_prev(&order, self.focus);
                ScreenAction::None
            }
            FormKey::Submit => self.submit(),
            picker if self.focus == Focus::BusinessType => {
                match picker {
                    FormKey::Right | FormKey::Toggle => self.step_type(true),
                    FormKey::Left => self.step_type(false),
                    FormKey::First => self.select_type(0),
                    FormKey::Last => self.select_type(BUSINESS_TYPES.len() - 1),
                    _ => {}
                }
                ScreenAction::None
            }
            other => {
                if let Some(input) = self.focused_input_mut() {
                    if edit_text(input, other) {
                        self.error = None;
                    }
                }
                ScreenAction::None
            }
        };
        Ok(action)
    }

    fn is_input_focused(&self) -> bool {
        matches!(
            self.focus,
            Focus::FullName | Focus::BusinessName | Focus::CustomType
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::NavigationContext;
    use crate::screens::test_support::{press, render_text, type_str};
    use crossterm::event::KeyCode;

    fn with_names(config: &Config) -> OnboardingDetailsScreen {
        let mut screen = OnboardingDetailsScreen::new();
        type_str(&mut screen, config, "Jo Park");
        press(&mut screen, config, KeyCode::Tab);
        type_str(&mut screen, config, "Acme");
        press(&mut screen, config, KeyCode::Tab);
        screen
    }

    #[test]
    fn test_requires_business_type() {
        let config = Config::default();
        let mut screen = with_names(&config);
        assert!(press(&mut screen, &config, KeyCode::Enter).is_none());
        assert_eq!(screen.error(), Some("Select your business type"));

        press(&mut screen, &config, KeyCode::Right);
        assert_eq!(screen.business_type().map(|b| b.value), Some("saas"));
        assert_eq!(
            press(&mut screen, &config, KeyCode::Enter),
            ScreenAction::navigate(ScreenId::OnboardingUsage)
        );
    }

    #[test]
    fn test_other_needs_custom_text() {
        let config = Config::default();
        let mut screen = with_names(&config);
        press(&mut screen, &config, KeyCode::Left);
        assert_eq!(screen.business_type().map(|b| b.value), Some("other"));
        assert!(press(&mut screen, &config, KeyCode::Enter).is_none());
        assert_eq!(screen.error(), Some("Please specify your business type"));

        press(&mut screen, &config, KeyCode::Tab);
        assert!(screen.is_input_focused());
        type_str(&mut screen, &config, "Bakery");
        assert_eq!(
            press(&mut screen, &config, KeyCode::Enter),
            ScreenAction::navigate(ScreenId::OnboardingUsage)
        );
    }

    #[test]
    fn test_leaving_other_clears_custom_text() {
        let config = Config::default();
        let mut screen = with_names(&config);
        press(&mut screen, &config, KeyCode::Left);
        press(&mut screen, &config, KeyCode::Tab);
        type_str(&mut screen, &config, "Bakery");
        press(&mut screen, &config, KeyCode::BackTab);
        press(&mut screen, &config, KeyCode::Right);
        assert_eq!(screen.business_type().map(|b| b.value), Some("saas"));
        assert_eq!(screen.custom_type(), "");
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let config = Config::default();
        let mut screen = OnboardingDetailsScreen::new();
        type_str(&mut screen, &config, "  ");
        press(&mut screen, &config, KeyCode::Enter);
        assert_eq!(screen.error(), Some("Full name is required"));
    }

    #[test]
    fn test_renders_step_fields() {
        let config = Config::default();
        let mut screen = with_names(&config);
        press(&mut screen, &config, KeyCode::Left);
        let text = render_text(&mut screen, &config, &NavigationContext::default());
        assert!(text.contains("Business type"));
        assert!(text.contains("Please specify your business type"));
        assert!(text.contains("Other"));
        assert_eq!(screen.step(), Some(Step::new(1, 3)));
    }
}
