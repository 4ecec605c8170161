//! Password recovery, step one: ask for the account's email address.
//!
//! Submitting swaps the form for a "Check your email" panel and schedules the
//! move to code entry. The entered address rides along into the navigation
//! context so the next screen can show it.

use crate::components::{MessageBox, MessageKind};
use crate::navigation::deferred::poll_slot;
use crate::navigation::{Deferred, NavigateOptions, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::validation::validate_recovery_email;
use crate::utils::{
    center_popup, cycle_next, cycle_prev, edit_text, interpret, stack_rows, FormKey, TextInput,
};
use crate::widgets::{Button, Link, TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Submit,
    Back,
}

const FOCUS_ORDER: [Focus; 3] = [Focus::Email, Focus::Submit, Focus::Back];

#[derive(Debug)]
pub struct ForgotPasswordScreen {
    email: TextInput,
    focus: Focus,
    error: Option<String>,
    submitted: bool,
    pending: Option<Deferred<String>>,
}

impl Default for ForgotPasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            focus: Focus::Email,
            error: None,
            submitted: false,
            pending: None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn submit(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if let Err(e) = validate_recovery_email(self.email.text()) {
            debug!(error = %e, "reset request rejected");
            self.error = Some(e.to_string());
            self.focus = Focus::Email;
            return ScreenAction::None;
        }
        info!(email = %self.email.text(), "reset link requested");
        self.submitted = true;
        self.pending = Some(Deferred::after(
            ctx.now,
            ctx.simulation().reset_link(),
            self.email.text().to_string(),
        ));
        ScreenAction::None
    }

    fn render_submitted(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let address = if self.email.is_empty() {
            "your email address"
        } else {
            self.email.text()
        };
        let body = vec![Line::from(vec![
            Span::raw("We've sent password reset instructions to "),
            Span::styled(address.to_string(), t.emphasis_style()),
        ])];
        let panel = center_popup(area, 56, MessageBox::height(2) + 2);
        let [box_area, _, button_area] = Layout::vertical([
            Constraint::Length(MessageBox::height(2)),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(panel);
        MessageBox::render(frame, box_area, MessageKind::Info, "Check your email", body);
        frame.render_widget(Button::new("Back to Login").focused(true), button_area);
    }
}

impl Screen for ForgotPasswordScreen {
    fn id(&self) -> ScreenId {
        ScreenId::ForgotPassword
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Enter your email address and we'll send you a link to reset your password".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        if self.submitted {
            self.render_submitted(frame, area);
            return Ok(());
        }

        let rows = stack_rows(area, &[FIELD_HEIGHT, 1, 1, 1, 1]);
        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title("Email address")
                .placeholder("you@company.com")
                .error(self.error.as_deref())
                .focused(self.focus == Focus::Email),
            rows[0],
        );
        frame.render_widget(
            Button::new("Send Reset Link").focused(self.focus == Focus::Submit),
            rows[2],
        );
        frame.render_widget(
            Link::new("← Back to Login").focused(self.focus == Focus::Back),
            rows[4],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) if !self.submitted && self.focus == Focus::Email => {
                self.email.insert_str(&text);
                self.error = None;
                return Ok(ScreenAction::None);
            }
            _ => return Ok(ScreenAction::None),
        };

        let form_key = interpret(&key, ctx.keymap(), self.is_input_focused());
        if self.submitted {
            // Only "Back to Login" is left on the panel.
            return Ok(match form_key {
                FormKey::Submit | FormKey::Back => ScreenAction::navigate(ScreenId::Login),
                _ => ScreenAction::None,
            });
        }

        let action = match form_key {
            FormKey::NextField => {
                self.focus = cycle_next(&FOCUS_ORDER, self.focus);
                ScreenAction::None
            }
            FormKey::PrevField => {
                self.focus = cycle_prev(&FOCUS_ORDER, self.focus);
                ScreenAction::None
            }
            FormKey::Back => ScreenAction::navigate(ScreenId::Login),
            FormKey::Submit => match self.focus {
                Focus::Email | Focus::Submit => self.submit(ctx),
                Focus::Back => ScreenAction::navigate(ScreenId::Login),
            },
            other if self.focus == Focus::Email => {
                if edit_text(&mut self.email, other) {
                    self.error = None;
                }
                ScreenAction::None
            }
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn tick(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match poll_slot(&mut self.pending, ctx.now) {
            Some(email) => ScreenAction::navigate_with(
                ScreenId::ForgotPasswordOtp,
                NavigateOptions::new().recovery_email(email),
            ),
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        !self.submitted && self.focus == Focus::Email
    }
}
