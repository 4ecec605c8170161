//! Email verification after login or signup.
//!
//! Six digit slots, a Verify button that unlocks once every slot is filled,
//! and a resend link behind a one-minute cooldown. Verifying shows a short
//! confirmation and then moves on; where to depends on whether the flow
//! started from signup.

use crate::components::{MessageBox, MessageKind};
use crate::navigation::deferred::poll_slot;
use crate::navigation::{after_verification, Deferred, ScreenId};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{center_popup, cycle_next, cycle_prev, interpret, stack_rows, FormKey, OtpCode};
use crate::widgets::{Button, Link, OtpInputWidget, OtpInputWidgetExt, Toast, OTP_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Code,
    Verify,
    Resend,
}

const FOCUS_ORDER: [Focus; 3] = [Focus::Code, Focus::Verify, Focus::Resend];

/// Whole seconds left on a cooldown, rounded up so the display reads 60..1.
pub(crate) fn seconds_left(cooldown: Option<&Deferred<()>>, now: Instant) -> u64 {
    cooldown
        .filter(|d| d.is_pending())
        .map(|d| {
            let left = d.remaining(now);
            left.as_secs() + u64::from(left.subsec_nanos() > 0)
        })
        .unwrap_or(0)
}

#[derive(Debug)]
pub struct OtpScreen {
    code: OtpCode,
    focus: Focus,
    is_new_user: bool,
    verified: bool,
    redirect: Option<Deferred<ScreenId>>,
    resend_cooldown: Option<Deferred<()>>,
}

impl OtpScreen {
    pub fn new(is_new_user: bool) -> Self {
        Self {
            code: OtpCode::new(),
            focus: Focus::Code,
            is_new_user,
            verified: false,
            redirect: None,
            resend_cooldown: None,
        }
    }

    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Seconds until resend unlocks; zero when it is available.
    pub fn resend_seconds(&self, now: Instant) -> u64 {
        seconds_left(self.resend_cooldown.as_ref(), now)
    }

    fn start_cooldown(&mut self, now: Instant, cooldown: Duration) {
        self.resend_cooldown = Some(Deferred::after(now, cooldown, ()));
    }

    fn verify(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if !self.code.is_complete() || self.verified {
            return ScreenAction::None;
        }
        let target = after_verification(self.is_new_user);
        info!(is_new_user = self.is_new_user, next = %target, "code verified");
        self.verified = true;
        self.redirect = Some(Deferred::after(ctx.now, ctx.simulation().otp_verify(), target));
        ScreenAction::None
    }

    fn resend(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if self.resend_seconds(ctx.now) > 0 {
            return ScreenAction::None;
        }
        info!("verification code resent");
        self.start_cooldown(ctx.now, ctx.simulation().resend_cooldown());
        ScreenAction::Toast(Toast::info("A new code is on its way"))
    }

    fn resend_label(&self, now: Instant) -> String {
        match self.resend_seconds(now) {
            0 => "Resend code".to_string(),
            secs => format!("Resend code in {}s", secs),
        }
    }
}

impl Screen for OtpScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Otp
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "We've sent a 6-digit code to your email".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        if self.verified {
            let body = vec![Line::from("Redirecting you...")];
            let height = MessageBox::height(1);
            MessageBox::render(
                frame,
                center_popup(area, 44, height),
                MessageKind::Success,
                "Email verified!",
                body,
            );
            return Ok(());
        }

        let t = theme();
        let rows = stack_rows(area, &[1, 1, OTP_HEIGHT, 1, 1, 1, 1]);
        frame.render_widget(
            Paragraph::new("Enter verification code")
                .style(t.text_style())
                .alignment(ratatui::layout::Alignment::Center),
            rows[0],
        );
        frame.render_otp_input_widget(
            OtpInputWidget::new(&self.code).focused(self.focus == Focus::Code),
            rows[2],
        );
        frame.render_widget(
            Button::new("Verify")
                .focused(self.focus == Focus::Verify)
                .enabled(self.code.is_complete()),
            rows[4],
        );
        let label = self.resend_label(ctx.now);
        frame.render_widget(
            Link::new(&label)
                .prefix("Didn't receive the code? ")
                .focused(self.focus == Focus::Resend),
            rows[6],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        if self.verified {
            return Ok(ScreenAction::None);
        }
        let key = match event {
            Event::Key(key) => key,
            Event::Paste(text) => {
                if self.focus == Focus::Code {
                    self.code.paste(&text);
                    debug!(filled = self.code.filled(), "code pasted");
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
            FormKey::Submit => match self.focus {
                Focus::Code | Focus::Verify => self.verify(ctx),
                Focus::Resend => self.resend(ctx),
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
        // Cooldown expiry only needs clearing; the label reads the remaining time.
        poll_slot(&mut self.resend_cooldown, ctx.now);
        Ok(match poll_slot(&mut self.redirect, ctx.now) {
            Some(target) => ScreenAction::navigate(target),
            None => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        !self.verified && self.focus == Focus::Code
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        self.start_cooldown(ctx.now, ctx.simulation().resend_cooldown());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::NavigationContext;
    use crate::screens::test_support::{press_at, tick_at};
    use crossterm::event::KeyCode;

    fn mounted(is_new_user: bool, config: &Config, now: Instant) -> OtpScreen {
        let nav = NavigationContext::default();
        let mut screen = OtpScreen::new(is_new_user);
        screen.on_enter(&ScreenContext::new(config, &nav, now)).unwrap();
        screen
    }

    fn enter_digits(screen: &mut OtpScreen, config: &Config, digits: &str, now: Instant) {
        for c in digits.chars() {
            press_at(screen, config, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_verify_requires_six_digits() {
        let config = Config::default();
        let t0 = Instant::now();
        let mut screen = mounted(false, &config, t0);
        enter_digits(&mut screen, &config, "12345", t0);
        press_at(&mut screen, &config, KeyCode::Enter, t0);
        assert!(!screen.is_verified());

        enter_digits(&mut screen, &config, "6", t0);
        assert_eq!(screen.code().code(), "123456");
        press_at(&mut screen, &config, KeyCode::Enter, t0);
        assert!(screen.is_verified());
    }

    #[test]
    fn test_non_digits_are_ignored() {
        let config = Config::default();
        let t0 = Instant::now();
        let mut screen = mounted(false, &config, t0);
        enter_digits(&mut screen, &config, "1a2?3", t0);
        assert_eq!(screen.code().filled(), 3);
        assert!(screen.is_input_focused());
    }

    #[test]
    fn test_redirect_waits_for_delay() {
        let config = Config::default();
        let t0 = Instant::now();
        let mut screen = mounted(true, &config, t0);
        enter_digits(&mut screen, &config, "654321", t0);
        press_at(&mut screen, &config, KeyCode::Enter, t0);

        let early = t0 + config.simulation.otp_verify() - Duration::from_millis(1);
        assert!(tick_at(&mut screen, &config, early).is_none());
        assert_eq!(
            tick_at(&mut screen, &config, t0 + config.simulation.otp_verify()),
            ScreenAction::navigate(ScreenId::OnboardingDetails)
        );
        // Fires once.
        assert!(tick_at(&mut screen, &config, t0 + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn test_existing_user_goes_to_dashboard() {
        let config = Config::default();
        let t0 = Instant::now();
        let mut screen = mounted(false, &config, t0);
        enter_digits(&mut screen, &config, "111111", t0);
        press_at(&mut screen, &config, KeyCode::Enter, t0);
        assert_eq!(
            tick_at(&mut screen, &config, t0 + Duration::from_secs(2)),
            ScreenAction::navigate(ScreenId::Dashboard)
        );
    }

    #[test]
    fn test_resend_cooldown_counts_down() {
        let config = Config::default();
        let t0 = Instant::now();
        let mut screen = mounted(false, &config, t0);
        assert_eq!(screen.resend_seconds(t0), 60);
        assert_eq!(screen.resend_seconds(t0 + Duration::from_millis(500)), 60);
        assert_eq!(screen.resend_seconds(t0 + Duration::from_secs(1)), 59);

        // Focus the resend link; it is locked during the cooldown.
        press_at(&mut screen, &config, KeyCode::BackTab, t0);
        assert!(press_at(&mut screen, &config, KeyCode::Enter, t0).is_none());

        let later = t0 + Duration::from_secs(60);
        tick_at(&mut screen, &config, later);
        assert_eq!(screen.resend_seconds(later), 0);
        match press_at(&mut screen, &config, KeyCode::Enter, later) {
            ScreenAction::Toast(toast) => assert!(toast.message.contains("new code")),
            other => panic!("expected toast, got {:?}", other),
        }
        assert_eq!(screen.resend_seconds(later), 60);
    }

    #[test]
    fn test_paste_fills_slots() {
        let config = Config::default();
        let nav = NavigationContext::default();
        let t0 = Instant::now();
        let mut screen = mounted(false, &config, t0);
        let ctx = ScreenContext::new(&config, &nav, t0);
        screen
            .handle_event(Event::Paste("987654".to_string()), &ctx)
            .unwrap();
        assert!(screen.code().is_complete());
    }
}
