//! Login screen: email, password, "stay logged in" and links to the other
//! entry points of the auth flow.

use crate::navigation::{NavigateOptions, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::utils::validation::validate_login;
use crate::utils::{cycle_next, cycle_prev, edit_text, interpret, stack_rows, FormKey, TextInput};
use crate::widgets::{Button, Checkbox, Link, TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
    StayLoggedIn,
    ForgotPassword,
    Submit,
    SignUp,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Email,
    Focus::Password,
    Focus::StayLoggedIn,
    Focus::ForgotPassword,
    Focus::Submit,
    Focus::SignUp,
];

#[derive(Debug)]
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    stay_logged_in: bool,
    focus: Focus,
    error: Option<(Focus, String)>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            stay_logged_in: false,
            focus: Focus::Email,
            error: None,
        }
    }

    pub fn email(&self) -> &str {
        self.email.text()
    }

    pub fn stay_logged_in(&self) -> bool {
        self.stay_logged_in
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(_, msg)| msg.as_str())
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
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
        match validate_login(self.email.text(), self.password.text()) {
            Ok(()) => {
                info!(
                    email = %self.email.text(),
                    stay_logged_in = self.stay_logged_in,
                    "login submitted"
                );
                ScreenAction::navigate_with(ScreenId::Otp, NavigateOptions::new().new_user(false))
            }
            Err(e) => {
                let field = if self.email.is_empty() {
                    Focus::Email
                } else {
                    Focus::Password
                };
                debug!(error = %e, "login rejected");
                self.focus = field;
                self.error = Some((field, e.to_string()));
                ScreenAction::None
            }
        }
    }

    fn activate(&mut self) -> ScreenAction {
        match self.focus {
            Focus::Email | Focus::Password | Focus::Submit => self.submit(),
            Focus::StayLoggedIn => {
                self.stay_logged_in = !self.stay_logged_in;
                ScreenAction::None
            }
            Focus::ForgotPassword => ScreenAction::navigate(ScreenId::ForgotPassword),
            Focus::SignUp => ScreenAction::navigate(ScreenId::Signup),
        }
    }
}

impl Screen for LoginScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Login
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Sign in to your Lulu CRM account".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let rows = stack_rows(area, &[FIELD_HEIGHT, FIELD_HEIGHT, 1, 1, 1, 1, 1]);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.email)
                .title("Email address")
                .placeholder("you@company.com")
                .error(self.error_for(Focus::Email))
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

        let [check_area, forgot_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(rows[2]);
        frame.render_widget(
            Checkbox::new("Stay logged in", self.stay_logged_in)
                .focused(self.focus == Focus::StayLoggedIn),
            check_area,
        );
        frame.render_widget(
            Link::new("Forgot password?")
                .alignment(Alignment::Right)
                .focused(self.focus == Focus::ForgotPassword),
            forgot_area,
        );

        frame.render_widget(Button::new("Log in").focused(self.focus == Focus::Submit), rows[4]);
        frame.render_widget(
            Link::new("Sign up")
                .prefix("Don't have an account? ")
                .focused(self.focus == Focus::SignUp),
            rows[6],
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
            FormKey::Submit => self.activate(),
            FormKey::Toggle if self.focus == Focus::StayLoggedIn => {
                self.stay_logged_in = !self.stay_logged_in;
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
        matches!(self.focus, Focus::Email | Focus::Password)
    }
}
