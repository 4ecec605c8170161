//! Password recovery, step two: enter the code mailed to the recovery address.

use crate::navigation::deferred::poll_slot;
use crate::navigation::{Deferred, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{cycle_next, cycle_prev, interpret, stack_rows, FormKey, OtpCode};
use crate::widgets::{Button, Link, OtpInputWidget, OtpInputWidgetExt, Toast, OTP_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Code,
    Verify,
    Resend,
    Back,
}

const FOCUS_ORDER: [Focus; 4] = [Focus::Code, Focus::Verify, Focus::Resend, Focus::Back];

#[derive(Debug)]
pub struct ForgotPasswordOtpScreen {
    email: String,
    code: OtpCode,
    focus: Focus,
    pending: Option<Deferred<()>>,
}

impl ForgotPasswordOtpScreen {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            code: OtpCode::new(),
            focus: Focus::Code,
            pending: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    /// A code is being checked; input is locked until it resolves.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn verify(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if !self.code.is_complete() || self.is_loading() {
            return ScreenAction::None;
        }
        info!(email = %self.email, "recovery code submitted");
        self.pending = Some(Deferred::after(ctx.now, ctx.simulation().recovery_verify(), ()));
        ScreenAction::None
    }
}

impl Screen for ForgotPasswordOtpScreen {
    fn id(&self) -> ScreenId {
        ScreenId::ForgotPasswordOtp
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Check your inbox for the recovery code".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let loading = self.is_loading();
        let rows = stack_rows(area, &[1, 1, 1, OTP_HEIGHT, 1, 1, 1, 1, 1, 1]);

        frame.render_widget(
            Paragraph::new(format!("Enter the 6-digit code sent to {}", self.email))
                .style(t.muted_style())
                .alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new("Verification code").style(t.text_style()),
            rows[2],
        );
        frame.render_otp_input_widget(
            OtpInputWidget::new(&self.code)
                .focused(self.focus == Focus::Code)
                .disabled(loading),
            rows[3],
        );
        let label = if loading { "Verifying..." } else { "Verify Code" };
        frame.render_widget(
            Button::new(label)
                .focused(self.focus == Focus::Verify)
                .enabled(self.code.is_complete() && !loading),
            rows[5],
        );
        frame.render_widget(
            Link::new("Resend")
                .prefix("Didn't receive the code? ")
                .focused(self.focus == Focus::Resend),
            rows[7],
        );
        frame.render_widget(
            Link::new("← Back to Email").focused(self.focus == Focus::Back),
            rows[9],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if self.is_loading() {
            return Ok(ScreenAction::None);
        }
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) if self.focus == Focus::Code => {
                self.code.paste(&text);
                debug!(filled = self.code.filled(), "recovery code pasted");
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
            FormKey::Back => ScreenAction::navigate(ScreenId::ForgotPassword),
            FormKey::Submit => match self.focus {
                Focus::Code | Focus::Verify => self.verify(ctx),
                Focus::Resend => {
                    info!(email = %self.email, "recovery code resent");
                    ScreenAction::Toast(Toast::info(format!("Code resent to {}", self.email)))
                }
                Focus::Back => ScreenAction::navigate(ScreenId::ForgotPassword),
            },
            edit if self.focus == Focus::Code => {
                match edit {
                    FormKey::Char(c) => {
                        self.code.input(c);
                    }
                    FormKey::Backspace => self.code.backspace(),
                    FormKey::Delete => self.code.delete(),
                    FormKey::Left => self.code.move_left(),
                    FormKey::Right => self.code.move_right(),
                    _ => {}
                }
                ScreenAction::None
            }
            _ => ScreenAction::None,
        };
        Ok(action)
    }

    fn tick(&mut self, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match poll_slot(&mut self.pending, ctx.now) {
            Some(()) => ScreenAction::navigate(ScreenId::ResetPassword),
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        !self.is_loading() && self.focus == Focus::Code
    }
}
