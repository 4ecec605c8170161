//! Sign-in, sign-up and password recovery, driven through `AppState`.

mod common;

use common::{enter_code, log_in, Harness};
use crossterm::event::{KeyCode, KeyModifiers};
use lulu::config::Config;
use lulu::keymap::KeymapPreset;
use lulu::navigation::ScreenId;
use lulu::screens::reset_password::Phase;

#[test]
fn test_login_round_trip_skips_onboarding() {
    let mut h = Harness::start(ScreenId::Login);
    log_in(&mut h, "a@b.com", "x");
    assert_eq!(h.current(), ScreenId::Otp);
    assert!(!h.context().is_new_user);

    enter_code(&mut h, "123456");
    assert!(h.screen().as_otp().is_some_and(|otp| otp.is_verified()));
    assert!(h.render().contains("Email verified!"));

    h.advance(1499);
    assert_eq!(h.current(), ScreenId::Otp);
    h.advance(1);
    assert_eq!(h.current(), ScreenId::Dashboard);
    assert_eq!(
        h.visited,
        vec![ScreenId::Login, ScreenId::Otp, ScreenId::Dashboard]
    );
}

#[test]
fn test_signup_marks_new_user_and_routes_to_onboarding() {
    let mut h = Harness::start(ScreenId::Login);
    // Email, Password, Stay logged in, Forgot password, Log in, Sign up
    h.press_times(KeyCode::Tab, 5);
    h.press(KeyCode::Enter);
    assert_eq!(h.current(), ScreenId::Signup);

    h.type_str("new@shop.io");
    h.press(KeyCode::Tab);
    h.type_str("hunter22");
    h.press(KeyCode::Tab);
    h.type_str("hunter22");
    h.press(KeyCode::Enter);
    assert_eq!(h.current(), ScreenId::Otp);
    assert!(h.context().is_new_user);

    h.paste("123456");
    h.press(KeyCode::Enter);
    h.advance(1500);
    assert_eq!(h.current(), ScreenId::OnboardingDetails);
    assert!(!h.visited.contains(&ScreenId::Dashboard));
}

#[test]
fn test_signup_mismatch_stays_put() {
    let mut h = Harness::start(ScreenId::Signup);
    h.type_str("new@shop.io");
    h.press(KeyCode::Tab);
    h.type_str("hunter22");
    h.press(KeyCode::Tab);
    h.type_str("hunter23");
    h.press(KeyCode::Enter);
    assert_eq!(h.current(), ScreenId::Signup);
    assert!(h.render().contains("Passwords don't match"));
}

#[test]
fn test_login_with_empty_password_shows_inline_error() {
    let mut h = Harness::start(ScreenId::Login);
    h.type_str("a@b.com");
    h.press(KeyCode::Enter);
    assert_eq!(h.current(), ScreenId::Login);
    assert!(h.screen().as_login().and_then(|l| l.error()).is_some());
}

#[test]
fn test_recovery_email_reaches_code_screen() {
    let mut h = Harness::start(ScreenId::Login);
    h.press_times(KeyCode::Tab, 3);
    h.press(KeyCode::Enter);
    assert_eq!(h.current(), ScreenId::ForgotPassword);

    h.type_str("owner@shop.io");
    h.press(KeyCode::Enter);
    assert!(h.render().contains("Check your email"));

    h.advance(2999);
    assert_eq!(h.current(), ScreenId::ForgotPassword);
    h.advance(1);
    assert_eq!(h.current(), ScreenId::ForgotPasswordOtp);
    assert_eq!(h.context().recovery_email, "owner@shop.io");
    assert!(h
        .render()
        .contains("Enter the 6-digit code sent to owner@shop.io"));
}

#[test]
fn test_full_password_reset_returns_to_login() {
    let mut h = Harness::start(ScreenId::ForgotPassword);
    h.type_str("owner@shop.io");
    h.press(KeyCode::Enter);
    h.advance(3000);

    enter_code(&mut h, "654321");
    h.advance(1500);
    assert_eq!(h.current(), ScreenId::ResetPassword);

    h.type_str("correct-horse");
    h.press_times(KeyCode::Tab, 2);
    h.type_str("correct-horse");
    h.press(KeyCode::Enter);
    assert_eq!(
        h.screen().as_reset_password().map(|r| r.phase()),
        Some(Phase::Updating)
    );

    h.advance(1500);
    assert!(h.render().contains("Password Updated!"));
    h.advance(2000);
    assert_eq!(h.current(), ScreenId::Login);
}

#[test]
fn test_reset_password_rejections_do_not_transition() {
    for (password, confirm, message) in [
        ("abcdefgh", "abcdefg1", "Passwords don't match"),
        ("abc123", "abc123", "Password must be at least 8 characters long"),
    ] {
        let mut h = Harness::start(ScreenId::ResetPassword);
        h.type_str(password);
        h.press_times(KeyCode::Tab, 2);
        h.type_str(confirm);
        h.press(KeyCode::Enter);
        h.advance(5000);

        assert_eq!(h.current(), ScreenId::ResetPassword);
        let screen = h.screen().as_reset_password().expect("reset screen");
        assert_eq!(screen.phase(), Phase::Editing);
        assert_eq!(screen.error(), Some(message));
    }
}

#[test]
fn test_deferred_transition_dies_with_its_screen() {
    let mut h = Harness::start(ScreenId::ForgotPassword);
    h.type_str("owner@shop.io");
    h.press(KeyCode::Enter);
    // Leave the "check your email" panel before the link is "sent".
    h.press(KeyCode::Esc);
    assert_eq!(h.current(), ScreenId::Login);

    h.advance(10_000);
    assert_eq!(h.current(), ScreenId::Login);
    assert!(h.context().recovery_email.is_empty());
}

#[test]
fn test_recovery_code_back_returns_to_email_entry() {
    let mut h = Harness::start(ScreenId::ForgotPassword);
    h.type_str("owner@shop.io");
    h.press(KeyCode::Enter);
    h.advance(3000);
    h.press(KeyCode::Esc);
    assert_eq!(h.current(), ScreenId::ForgotPassword);

    h.advance(5000);
    assert_eq!(h.current(), ScreenId::ForgotPassword);
}

#[test]
fn test_ctrl_c_quits_from_a_text_field() {
    let mut h = Harness::start(ScreenId::Login);
    h.type_str("q");
    assert!(!h.app.should_quit());
    h.press_mod(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(h.app.should_quit());
}

fn vim_config() -> Config {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
}

#[test]
fn test_vim_preset_types_motion_letters_verbatim() {
    let mut h = Harness::with_config(ScreenId::Login, vim_config());
    h.type_str("hello@gmail.com");
    assert_eq!(h.screen().as_login().map(|l| l.email()), Some("hello@gmail.com"));

    // Arrow keys still move the cursor.
    h.press(KeyCode::Home);
    h.type_str("G");
    assert_eq!(h.screen().as_login().map(|l| l.email()), Some("Ghello@gmail.com"));
}

#[test]
fn test_vim_preset_recovery_email_propagates_exactly() {
    let mut h = Harness::with_config(ScreenId::ForgotPassword, vim_config());
    h.type_str("hal@x.io");
    h.press(KeyCode::Enter);
    h.advance(3000);

    assert_eq!(h.current(), ScreenId::ForgotPasswordOtp);
    assert_eq!(h.context().recovery_email, "hal@x.io");
    assert!(h.render().contains("Enter the 6-digit code sent to hal@x.io"));
}

#[test]
fn test_switching_to_vim_from_help_keeps_typing_intact() {
    let mut h = Harness::start(ScreenId::Login);
    h.press(KeyCode::F(1));
    h.press(KeyCode::Char('2'));
    h.press(KeyCode::Esc);
    assert_eq!(h.app.config().keymap.preset, KeymapPreset::Vim);

    h.type_str("lg@h.io");
    assert_eq!(h.screen().as_login().map(|l| l.email()), Some("lg@h.io"));
}
