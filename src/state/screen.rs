//! The mounted screen.
//!
//! Exactly one screen controller exists at a time. Navigating replaces the
//! variant wholesale, which drops the old controller together with any
//! deferred outcome it had scheduled.

use crate::navigation::{NavigationContext, ScreenId};
use crate::screens::{
    DashboardScreen, ForgotPasswordOtpScreen, ForgotPasswordScreen, LoginScreen,
    OnboardingDetailsScreen, OnboardingEstimateScreen, OnboardingFeaturesScreen,
    OnboardingUsageScreen, OtpScreen, ResetPasswordScreen, Screen, SignupScreen,
};

/// Union of every screen controller.
///
/// # Example
///
/// ```rust,ignore
/// match &mut app.screen {
///     ScreenState::Otp(otp) => assert!(!otp.is_verified()),
///     _ => {}
/// }
/// ```
#[derive(Debug)]
pub enum ScreenState {
    Login(LoginScreen),
    Signup(SignupScreen),
    Otp(OtpScreen),
    ForgotPassword(ForgotPasswordScreen),
    ForgotPasswordOtp(ForgotPasswordOtpScreen),
    ResetPassword(ResetPasswordScreen),
    OnboardingDetails(OnboardingDetailsScreen),
    OnboardingUsage(OnboardingUsageScreen),
    OnboardingEstimate(OnboardingEstimateScreen),
    OnboardingFeatures(OnboardingFeaturesScreen),
    Dashboard(DashboardScreen),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Login(LoginScreen::new())
    }
}

impl ScreenState {
    /// Build a fresh controller for `screen`, seeded from the carried context.
    pub fn for_screen(screen: ScreenId, context: &NavigationContext) -> Self {
        match screen {
            ScreenId::Login => Self::Login(LoginScreen::new()),
            ScreenId::Signup => Self::Signup(SignupScreen::new()),
            ScreenId::Otp => Self::Otp(OtpScreen::new(context.is_new_user)),
            ScreenId::ForgotPassword => Self::ForgotPassword(ForgotPasswordScreen::new()),
            ScreenId::ForgotPasswordOtp => Self::ForgotPasswordOtp(ForgotPasswordOtpScreen::new(
                context.recovery_email.clone(),
            )),
            ScreenId::ResetPassword => Self::ResetPassword(ResetPasswordScreen::new()),
            ScreenId::OnboardingDetails => Self::OnboardingDetails(OnboardingDetailsScreen::new()),
            ScreenId::OnboardingUsage => Self::OnboardingUsage(OnboardingUsageScreen::new()),
            ScreenId::OnboardingEstimate => {
                Self::OnboardingEstimate(OnboardingEstimateScreen::new())
            }
            ScreenId::OnboardingFeatures => {
                Self::OnboardingFeatures(OnboardingFeaturesScreen::new())
            }
            ScreenId::Dashboard => Self::Dashboard(DashboardScreen::new()),
        }
    }

    /// Get the current screen type.
    pub fn current_screen(&self) -> ScreenId {
        self.as_screen().id()
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Signup(s) => s,
            Self::Otp(s) => s,
            Self::ForgotPassword(s) => s,
            Self::ForgotPasswordOtp(s) => s,
            Self::ResetPassword(s) => s,
            Self::OnboardingDetails(s) => s,
            Self::OnboardingUsage(s) => s,
            Self::OnboardingEstimate(s) => s,
            Self::OnboardingFeatures(s) => s,
            Self::Dashboard(s) => s,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Login(s) => s,
            Self::Signup(s) => s,
            Self::Otp(s) => s,
            Self::ForgotPassword(s) => s,
            Self::ForgotPasswordOtp(s) => s,
            Self::ResetPassword(s) => s,
            Self::OnboardingDetails(s) => s,
            Self::OnboardingUsage(s) => s,
            Self::OnboardingEstimate(s) => s,
            Self::OnboardingFeatures(s) => s,
            Self::Dashboard(s) => s,
        }
    }

    pub fn as_login(&self) -> Option<&LoginScreen> {
        if let Self::Login(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_otp(&self) -> Option<&OtpScreen> {
        if let Self::Otp(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_forgot_password_otp(&self) -> Option<&ForgotPasswordOtpScreen> {
        if let Self::ForgotPasswordOtp(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_reset_password(&self) -> Option<&ResetPasswordScreen> {
        if let Self::ResetPassword(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_onboarding_features(&self) -> Option<&OnboardingFeaturesScreen> {
        if let Self::OnboardingFeatures(state) = self {
            Some(state)
        } else {
            None
        }
    }

    pub fn as_dashboard(&self) -> Option<&DashboardScreen> {
        if let Self::Dashboard(state) = self {
            Some(state)
        } else {
            None
        }
    }
}
