//! Screen navigation state machine.
//!
//! The [`Navigator`] owns the identity of the current screen and the small
//! amount of context that survives a screen change. Screens never touch it
//! directly: they return a [`ScreenAction::Navigate`](crate::screens::ScreenAction)
//! and the application state applies it through [`Navigator::navigate`].
//!
//! ```text
//!   login ──► otp ──► onboarding-details ──► onboarding-usage
//!    │ ▲       │                                  │
//!    │ │       └──► dashboard ◄── onboarding-features ◄── onboarding-estimate
//!    ▼ │
//!   forgot-password ──► forgot-password-otp ──► reset-password ──► login
//! ```

pub mod deferred;

pub use deferred::Deferred;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
    Login,
    Signup,
    Otp,
    OnboardingDetails,
    OnboardingUsage,
    OnboardingEstimate,
    OnboardingFeatures,
    Dashboard,
    ForgotPassword,
    ForgotPasswordOtp,
    ResetPassword,
}

impl ScreenId {
    /// All screens, in flow order.
    pub const ALL: [ScreenId; 11] = [
        ScreenId::Login,
        ScreenId::Signup,
        ScreenId::Otp,
        ScreenId::ForgotPassword,
        ScreenId::ForgotPasswordOtp,
        ScreenId::ResetPassword,
        ScreenId::OnboardingDetails,
        ScreenId::OnboardingUsage,
        ScreenId::OnboardingEstimate,
        ScreenId::OnboardingFeatures,
        ScreenId::Dashboard,
    ];

    /// Canonical kebab-case name, as used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Signup => "signup",
            ScreenId::Otp => "otp",
            ScreenId::OnboardingDetails => "onboarding-details",
            ScreenId::OnboardingUsage => "onboarding-usage",
            ScreenId::OnboardingEstimate => "onboarding-estimate",
            ScreenId::OnboardingFeatures => "onboarding-features",
            ScreenId::Dashboard => "dashboard",
            ScreenId::ForgotPassword => "forgot-password",
            ScreenId::ForgotPasswordOtp => "forgot-password-otp",
            ScreenId::ResetPassword => "reset-password",
        }
    }

    /// Human-readable title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Login => "Welcome back",
            ScreenId::Signup => "Create your account",
            ScreenId::Otp => "Verify your email",
            ScreenId::OnboardingDetails => "Let's get to know you",
            ScreenId::OnboardingUsage => "Tell us about your usage",
            ScreenId::OnboardingEstimate => "Your AI Estimate",
            ScreenId::OnboardingFeatures => "Choose your features",
            ScreenId::Dashboard => "Welcome aboard!",
            ScreenId::ForgotPassword => "Reset your password",
            ScreenId::ForgotPasswordOtp => "Verify your email",
            ScreenId::ResetPassword => "Set new password",
        }
    }

    /// Whether the screen has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenId::Dashboard)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        if let Some(id) = ScreenId::ALL.iter().find(|id| id.as_str() == wanted) {
            return Ok(*id);
        }
        bail!(
            "Unknown screen '{}'. Valid screens: {}",
            s,
            ScreenId::ALL
                .iter()
                .map(ScreenId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Context carried across screen changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationContext {
    /// True when the current auth flow started from signup.
    pub is_new_user: bool,
    /// Address entered on the forgot-password screen.
    pub recovery_email: String,
}

/// Optional context writes that accompany a navigation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub is_new_user: Option<bool>,
    pub recovery_email: Option<String>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_user(mut self, is_new_user: bool) -> Self {
        self.is_new_user = Some(is_new_user);
        self
    }

    pub fn recovery_email(mut self, email: impl Into<String>) -> Self {
        self.recovery_email = Some(email.into());
        self
    }
}

/// Owns the current screen and the cross-screen context.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenId,
    context: NavigationContext,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the login screen with default context.
    pub fn new() -> Self {
        Self::starting_at(ScreenId::Login)
    }

    /// Start on an arbitrary screen (demo entry points).
    pub fn starting_at(screen: ScreenId) -> Self {
        Self {
            current: screen,
            context: NavigationContext::default(),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    /// Move to `target`, overwriting whichever context fields `options` supplies.
    ///
    /// An empty recovery email leaves the stored address untouched.
    pub fn navigate(&mut self, target: ScreenId, options: NavigateOptions) {
        let from = self.current;
        if from != target && !is_transition(from, target) {
            warn!(from = %from, to = %target, "navigation outside the flow graph");
        }

        if let Some(is_new_user) = options.is_new_user {
            self.context.is_new_user = is_new_user;
        }
        if let Some(email) = options.recovery_email {
            if !email.is_empty() {
                self.context.recovery_email = email;
            }
        }
        self.current = target;

        info!(
            from = %from,
            to = %target,
            is_new_user = self.context.is_new_user,
            recovery_email = %self.context.recovery_email,
            "navigate"
        );
    }

    /// Where OTP verification leads for the current flow.
    pub fn after_verification(&self) -> ScreenId {
        after_verification(self.context.is_new_user)
    }
}

/// Destination after a successful sign-in/sign-up code check.
pub fn after_verification(is_new_user: bool) -> ScreenId {
    if is_new_user {
        ScreenId::OnboardingDetails
    } else {
        ScreenId::Dashboard
    }
}

/// Context write performed by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWrite {
    None,
    NewUser(bool),
    RecoveryEmail,
}

impl fmt::Display for ContextWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextWrite::None => f.write_str("-"),
            ContextWrite::NewUser(v) => write!(f, "is_new_user={}", v),
            ContextWrite::RecoveryEmail => f.write_str("recovery_email=<entered email>"),
        }
    }
}

/// One edge of the flow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub trigger: &'static str,
    pub to: ScreenId,
    pub write: ContextWrite,
}

const fn edge(
    from: ScreenId,
    trigger: &'static str,
    to: ScreenId,
    write: ContextWrite,
) -> Transition {
    Transition {
        from,
        trigger,
        to,
        write,
    }
}

/// Every transition a screen can request. OTP verification appears twice,
/// once per branch of `is_new_user`.
pub const TRANSITIONS: &[Transition] = &[
    edge(ScreenId::Login, "submit credentials", ScreenId::Otp, ContextWrite::NewUser(false)),
    edge(ScreenId::Login, "forgot password", ScreenId::ForgotPassword, ContextWrite::None),
    edge(ScreenId::Login, "sign up", ScreenId::Signup, ContextWrite::None),
    edge(ScreenId::Signup, "submit matching passwords", ScreenId::Otp, ContextWrite::NewUser(true)),
    edge(ScreenId::Signup, "log in", ScreenId::Login, ContextWrite::None),
    edge(ScreenId::Otp, "verified (new user)", ScreenId::OnboardingDetails, ContextWrite::None),
    edge(ScreenId::Otp, "verified (existing user)", ScreenId::Dashboard, ContextWrite::None),
    edge(
        ScreenId::ForgotPassword,
        "submit email",
        ScreenId::ForgotPasswordOtp,
        ContextWrite::RecoveryEmail,
    ),
    edge(ScreenId::ForgotPassword, "back", ScreenId::Login, ContextWrite::None),
    edge(
        ScreenId::ForgotPasswordOtp,
        "code submitted",
        ScreenId::ResetPassword,
        ContextWrite::None,
    ),
    edge(ScreenId::ForgotPasswordOtp, "back", ScreenId::ForgotPassword, ContextWrite::None),
    edge(ScreenId::ResetPassword, "password updated", ScreenId::Login, ContextWrite::None),
    edge(ScreenId::ResetPassword, "back", ScreenId::ForgotPasswordOtp, ContextWrite::None),
    edge(
        ScreenId::OnboardingDetails,
        "submit details",
        ScreenId::OnboardingUsage,
        ContextWrite::None,
    ),
    edge(
        ScreenId::OnboardingUsage,
        "calculate usage",
        ScreenId::OnboardingEstimate,
        ContextWrite::None,
    ),
    edge(
        ScreenId::OnboardingEstimate,
        "continue setup",
        ScreenId::OnboardingFeatures,
        ContextWrite::None,
    ),
    edge(ScreenId::OnboardingFeatures, "confirm features", ScreenId::Dashboard, ContextWrite::None),
];

/// Outgoing edges of a screen.
pub fn transitions_from(screen: ScreenId) -> impl Iterator<Item = &'static Transition> {
    TRANSITIONS.iter().filter(move |t| t.from == screen)
}

/// Whether the flow graph contains an edge `from -> to`.
pub fn is_transition(from: ScreenId, to: ScreenId) -> bool {
    transitions_from(from).any(|t| t.to == to)
}
