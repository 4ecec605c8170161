//! Password recovery, step three: choose a new password.
//!
//! Errors are shown inline under the offending field. A valid submission
//! goes through two timed phases: "Updating..." then the success panel,
//! which redirects to login on its own unless the user leaves first.

use crate::components::{MessageBox, MessageKind};
use crate::navigation::deferred::poll_slot;
use crate::navigation::{Deferred, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::validation::{validate_new_password, MIN_RESET_PASSWORD_LENGTH};
use crate::utils::{
    center_popup, cycle_next, cycle_prev, edit_text, interpret, stack_rows, FormKey, TextInput,
};
use crate::widgets::{Button, Checkbox, Link, TextInputWidget, TextInputWidgetExt, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Password,
    ShowPassword,
    Confirm,
    ShowConfirm,
    Submit,
    Back,
}

const FOCUS_ORDER: [Focus; 6] = [
    Focus::Password,
    Focus::ShowPassword,
    Focus::Confirm,
    Focus::ShowConfirm,
    Focus::Submit,
    Focus::Back,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Updating,
    Success,
}

/// Timed outcome waiting to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Updated,
    Redirect,
}

#[derive(Debug)]
pub struct ResetPasswordScreen {
    password: TextInput,
    confirm: TextInput,
    show_password: bool,
    show_confirm: bool,
    focus: Focus,
    error: Option<(Focus, String)>,
    phase: Phase,
    pending: Option<Deferred<Pending>>,
}

impl Default for ResetPasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetPasswordScreen {
    pub fn new() -> Self {
        Self {
            password: TextInput::new(),
            confirm: TextInput::new(),
            show_password: false,
            show_confirm: false,
            focus: Focus::Password,
            error: None,
            phase: Phase::Editing,
            pending: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|(_, msg)| msg.as_str())
    }

    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    fn can_submit(&self) -> bool {
        self.phase == Phase::Editing && !self.password.is_empty() && !self.confirm.is_empty()
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
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

    fn submit(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if let Err(e) = validate_new_password(self.password.text(), self.confirm.text()) {
            let field = if !self.password.is_empty() && self.password.text() != self.confirm.text()
            {
                Focus::Confirm
            } else {
                Focus::Password
            };
            debug!(error = %e, "new password rejected");
            self.error = Some((field, e.to_string()));
            self.focus = field;
            return ScreenAction::None;
        }
        info!("password update submitted");
        self.error = None;
        self.phase = Phase::Updating;
        self.pending = Some(Deferred::after(
            ctx.now,
            ctx.simulation().password_update(),
            Pending::Updated,
        ));
        ScreenAction::None
    }

    fn toggle(&mut self) {
        match self.focus {
            Focus::ShowPassword => self.show_password = !self.show_password,
            Focus::ShowConfirm => self.show_confirm = !self.show_confirm,
            _ => {}
        }
    }

    fn render_success(&self, frame: &mut Frame, area: Rect) {
        let panel = center_popup(area, 52, MessageBox::height(1) + 2);
        let [box_area, _, button_area] = Layout::vertical([
            Constraint::Length(MessageBox::height(1)),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(panel);
        MessageBox::render(
            frame,
            box_area,
            MessageKind::Success,
            "Password Updated!",
            vec![Line::from("Your password has been successfully reset")],
        );
        frame.render_widget(Button::new("Go to Login").focused(true), button_area);
    }
}

impl Screen for ResetPasswordScreen {
    fn id(&self) -> ScreenId {
        ScreenId::ResetPassword
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Create a strong password for your account".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        if self.phase == Phase::Success {
            self.render_success(frame, area);
            return Ok(());
        }

        let t = theme();
        let updating = self.phase == Phase::Updating;
        let rows = stack_rows(area, &[FIELD_HEIGHT, 1, 1, FIELD_HEIGHT, 1, 1, 1, 1, 1]);

        frame.render_text_input_widget(
            TextInputWidget::new(&self.password)
                .title("New password")
                .placeholder("Enter new password")
                .masked(!self.show_password)
                .disabled(updating)
                .error(self.error_for(Focus::Password))
                .focused(self.focus == Focus::Password),
            rows[0],
        );
        let [toggle_area, hint_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(rows[1]);
        frame.render_widget(
            Checkbox::new("Show password", self.show_password)
                .focused(self.focus == Focus::ShowPassword),
            toggle_area,
        );
        frame.render_widget(
            Paragraph::new(format!("Minimum {} characters", MIN_RESET_PASSWORD_LENGTH))
                .style(t.muted_style())
                .alignment(Alignment::Right),
            hint_area,
        );

        frame.render_text_input_widget(
            TextInputWidget::new(&self.confirm)
                .title("Confirm password")
                .placeholder("Confirm new password")
                .masked(!self.show_confirm)
                .disabled(updating)
                .error(self.error_for(Focus::Confirm))
                .focused(self.focus == Focus::Confirm),
            rows[3],
        );
        frame.render_widget(
            Checkbox::new("Show password", self.show_confirm)
                .focused(self.focus == Focus::ShowConfirm),
            rows[4],
        );

        let label = if updating { "Updating..." } else { "Reset Password" };
        frame.render_widget(
            Button::new(label)
                .focused(self.focus == Focus::Submit)
                .enabled(self.can_submit()),
            rows[6],
        );
        frame.render_widget(
            Link::new("← Back to Verification").focused(self.focus == Focus::Back),
            rows[8],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) if self.phase == Phase::Editing => {
                if let Some(input) = self.focused_input_mut() {
                    input.insert_str(&text);
                    self.error = None;
                }
                return Ok(ScreenAction::None);
            }
            _ => return Ok(ScreenAction::None),
        };

        let form_key = interpret(&key, ctx.keymap(), self.is_input_focused());
        match self.phase {
            Phase::Updating => return Ok(ScreenAction::None),
            Phase::Success => {
                return Ok(match form_key {
                    FormKey::Submit | FormKey::Back => ScreenAction::navigate(ScreenId::Login),
                    _ => ScreenAction::None,
                })
            }
            Phase::Editing => {}
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
            FormKey::Back => ScreenAction::navigate(ScreenId::ForgotPasswordOtp),
            FormKey::Toggle => {
                self.toggle();
                ScreenAction::None
            }
            FormKey::Submit => match self.focus {
                Focus::ShowPassword | Focus::ShowConfirm => {
                    self.toggle();
                    ScreenAction::None
                }
                Focus::Back => ScreenAction::navigate(ScreenId::ForgotPasswordOtp),
                Focus::Password | Focus::Confirm | Focus::Submit => self.submit(ctx),
            },
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

    fn tick(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        match poll_slot(&mut self.pending, ctx.now) {
            Some(Pending::Updated) => {
                info!("password updated");
                self.phase = Phase::Success;
                self.pending = Some(Deferred::after(
                    ctx.now,
                    ctx.simulation().success_redirect(),
                    Pending::Redirect,
                ));
                Ok(ScreenAction::None)
            }
            Some(Pending::Redirect) => Ok(ScreenAction::navigate(ScreenId::Login)),
            None => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.phase == Phase::Editing && matches!(self.focus, Focus::Password | Focus::Confirm)
    }
}
