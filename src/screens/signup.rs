//! Signup screen with an advisory password strength meter and a live
//! "passwords match" hint.

use crate::navigation::{NavigateOptions, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::validation::{validate_signup, PasswordStrength};
use crate::utils::{cycle_next, cycle_prev, edit_text, interpret, stack_rows, FormKey, TextInput};
use crate::widgets::{Button, Link, TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
    Confirm,
    Submit,
    LogIn,
}

const FOCUS_ORDER: [Focus; 5] = [
    Focus::Email,
    Focus::Password,
    Focus::Confirm,
    Focus::Submit,
    Focus::LogIn,
];

#[derive(Debug)]
pub struct SignupScreen {
    email: TextInput,
    password: TextInput,
    confirm: TextInput,
    focus: Focus,
    error: Option<(Focus, String)>,
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            confirm: TextInput::new(),
            focus: Focus::Email,
            error: None,
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(self.password.text())
    }

    /// `Some(true)` once the confirmation is non-empty and equal, `Some(false)`
    /// when it differs, `None` while it is still empty.
    pub fn passwords_match(&self) -> Option<bool> {
        if self.confirm.is_empty() {
            None
        } else {
            Some(self.password.text() == self.confirm.text())
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(_, msg)| msg.as_str())
    }

    fn can_submit(&self) -> bool {
        validate_signup(self.password.text(), self.confirm.text()).is_ok()
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Confirm => Some(&mut self.confirm),
            _ => None,
        }
    }

    fn error_for(&self, field: Focus) -> Option<&str> {
        match &self.error {
            Some((f, msg)) if *f == field => Some(msg),
            _ => None,
        }
    }

    fn submit(&mut self) -> ScreenAction {
        match validate_signup(self.password.text(), self.confirm.text()) {
            Ok(()) => {
                info!(email = %self.email.text(), "signup submitted");
                ScreenAction::navigate_with(ScreenId::Otp, NavigateOptions::new().new_user(true))
            }
            Err(e) => {
                let field = if self.password.is_empty() {
                    Focus::Password
                } else {
                    Focus::Confirm
                };
                debug!(error = %e, "signup rejected");
                self.error = Some((field, e.to_string()));
                ScreenAction::None
            }
        }
    }

    fn render_strength(&self, frame: &mut Frame, area: Rect) {
        if self.password.is_empty() {
            return;
        }
        let t = theme();
        let strength = self.strength();
        let style = match strength {
            PasswordStrength::Weak => t.error_style(),
            PasswordStrength::Medium => t.warning_style(),
            PasswordStrength::Strong | PasswordStrength::Empty => t.success_style(),
        };
        let [label_area, gauge_area] =
            Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).areas(area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  Password strength: ", t.muted_style()),
                Span::styled(strength.label(), style),
            ])),
            label_area,
        );
        frame.render_widget(
            LineGauge::default()
                .ratio(f64::from(strength.percent()) / 100.0)
                .label("")
                .filled_style(style)
                .unfilled_style(t.muted_style()),
            gauge_area,
        );
    }

    fn render_match_hint(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let hint = match self.passwords_match() {
            Some(true) => Span::styled("  ✔ Passwords match", t.success_style()),
            Some(false) => Span::styled("  ✘ Passwords don't match", t.error_style()),
            None => return,
        };
        frame.render_widget(Paragraph::new(hint), area);
    }
}

impl Screen for SignupScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Signup
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Get started with Lulu CRM today".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let rows = stack_rows(
            area,
            &[FIELD_HEIGHT, FIELD_HEIGHT, 1, FIELD_HEIGHT, 1, 1, 1, 1, 1],
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title("Email address")
                .placeholder("you@company.com")
                .focused(self.focus == Focus::Email),
            rows[0],
        );
        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("Password")
                .placeholder("••••••••")
                .masked(true)
                .error(self.error_for(Focus::Password))
                .focused(self.focus == Focus::Password),
            rows[1],
        );
        self.render_strength(frame, rows[2]);
        frame.render_text_input_widget(
            TextInputWidget::new(&self.confirm)
                .title("Confirm password")
                .placeholder("••••••••")
                .masked(true)
                .error(self.error_for(Focus::Confirm))
                .focused(self.focus == Focus::Confirm),
            rows[3],
        );
        self.render_match_hint(frame, rows[4]);

        frame.render_widget(
            Button::new("Create account")
                .focused(self.focus == Focus::Submit)
                .enabled(self.can_submit()),
            rows[6],
        );
        frame.render_widget(
            Link::new("Log in")
                .prefix("Already have an account? ")
                .focused(self.focus == Focus::LogIn),
            rows[8],
        );
        Ok(())
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

        let action = match interpret(&key, ctx.keymap(), self.is_input_focused()) {
            FormKey::NextField => {
                self.focus = cycle_next(&FOCUS_ORDER, self.focus);
                ScreenAction::None
            }
            FormKey::PrevField => {
                self.focus = cycle_prev(&FOCUS_ORDER, self.focus);
                ScreenAction::None
            }
            FormKey::Submit if self.focus == Focus::LogIn => {
                ScreenAction::navigate(ScreenId::Login)
            }
            FormKey::Submit => self.submit(),
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
        matches!(self.focus, Focus::Email | Focus::Password | Focus::Confirm)
    }
}
