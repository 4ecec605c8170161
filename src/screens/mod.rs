//! Screen controllers.
//!
//! One controller per [`ScreenId`](crate::navigation::ScreenId). Each owns its
//! form state and any pending deferred outcome, and implements [`Screen`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  Event   ┌──────────────┐  ScreenAction  ┌───────────┐
//! │ App (loop)   │ ───────► │ ScreenState  │ ─────────────► │ AppState  │
//! │              │  tick    │ (one screen) │                │ navigator │
//! └──────────────┘ ───────► └──────────────┘                └───────────┘
//!                                  ▲           remount on navigate │
//!                                  └───────────────────────────────┘
//! ```

pub mod dashboard;
pub mod forgot_password;
pub mod forgot_password_otp;
pub mod login;
pub mod onboarding_details;
pub mod onboarding_estimate;
pub mod onboarding_features;
pub mod onboarding_usage;
pub mod otp;
pub mod reset_password;
pub mod screen_trait;
pub mod signup;

pub use dashboard::DashboardScreen;
pub use forgot_password::ForgotPasswordScreen;
pub use forgot_password_otp::ForgotPasswordOtpScreen;
pub use login::LoginScreen;
pub use onboarding_details::OnboardingDetailsScreen;
pub use onboarding_estimate::OnboardingEstimateScreen;
pub use onboarding_features::OnboardingFeaturesScreen;
pub use onboarding_usage::OnboardingUsageScreen;
pub use otp::OtpScreen;
pub use reset_password::ResetPasswordScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use signup::SignupScreen;

/// Helpers shared by the screen unit tests.
#[cfg(test)]
pub(crate) mod test_support {
    use super::{RenderContext, Screen, ScreenAction, ScreenContext};
    use crate::config::Config;
    use crate::navigation::NavigationContext;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn type_str<S: Screen>(screen: &mut S, config: &Config, text: &str) {
        let nav = NavigationContext::default();
        let ctx = ScreenContext::new(config, &nav, Instant::now());
        for c in text.chars() {
            screen.handle_event(key(KeyCode::Char(c)), &ctx).unwrap();
        }
    }

    pub fn press<S: Screen>(screen: &mut S, config: &Config, code: KeyCode) -> ScreenAction {
        let nav = NavigationContext::default();
        let ctx = ScreenContext::new(config, &nav, Instant::now());
        screen.handle_event(key(code), &ctx).unwrap()
    }

    pub fn press_at<S: Screen>(
        screen: &mut S,
        config: &Config,
        code: KeyCode,
        now: Instant,
    ) -> ScreenAction {
        let nav = NavigationContext::default();
        let ctx = ScreenContext::new(config, &nav, now);
        screen.handle_event(key(code), &ctx).unwrap()
    }

    pub fn tick_at<S: Screen>(screen: &mut S, config: &Config, now: Instant) -> ScreenAction {
        let nav = NavigationContext::default();
        let ctx = ScreenContext::new(config, &nav, now);
        screen.tick(&ctx).unwrap()
    }

    /// Render the screen body alone and return the buffer as one string.
    pub fn render_text<S: Screen>(
        screen: &mut S,
        config: &Config,
        navigation: &NavigationContext,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        let ctx = RenderContext::new(config, navigation, Instant::now());
        terminal
            .draw(|frame| {
                let area = frame.area();
                screen.render(frame, area, &ctx).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }
}
