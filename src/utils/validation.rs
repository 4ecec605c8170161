use anyhow::{bail, Result};

/// Minimum length enforced when choosing a new password during recovery
pub const MIN_RESET_PASSWORD_LENGTH: usize = 8;

/// Number of digits in a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// Advisory strength shown under the signup password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Classify purely by length (in characters).
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::Empty,
            1..=5 => PasswordStrength::Weak,
            6..=9 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    /// Fill of the strength meter, 0-100.
    pub fn percent(&self) -> u16 {
        match self {
            PasswordStrength::Empty => 0,
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }
}

/// Login gate: both fields present.
///
/// Fields are checked as typed; whitespace-only values count as present.
pub fn validate_login(email: &str, password: &str) -> Result<()> {
    if email.is_empty() {
        bail!("Email address is required");
    }
    if password.is_empty() {
        bail!("Password is required");
    }
    Ok(())
}

/// Signup gate: password present and confirmed exactly.
pub fn validate_signup(password: &str, confirm: &str) -> Result<()> {
    if password.is_empty() {
        bail!("Password is required");
    }
    if confirm.is_empty() {
        bail!("Please confirm your password");
    }
    if password != confirm {
        bail!("Passwords don't match");
    }
    Ok(())
}

/// Forgot-password gate: an address was entered.
pub fn validate_recovery_email(email: &str) -> Result<()> {
    if email.is_empty() {
        bail!("Email address is required");
    }
    Ok(())
}

/// Reset-password gate. Mismatch is reported before length.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<()> {
    if password.is_empty() {
        bail!("Password is required");
    }
    if password != confirm {
        bail!("Passwords don't match");
    }
    if password.chars().count() < MIN_RESET_PASSWORD_LENGTH {
        bail!(
            "Password must be at least {} characters long",
            MIN_RESET_PASSWORD_LENGTH
        );
    }
    Ok(())
}

/// Onboarding details gate.
pub fn validate_business_details(
    full_name: &str,
    business_name: &str,
    business_type: Option<&str>,
    custom_business_type: &str,
) -> Result<()> {
    if full_name.trim().is_empty() {
        bail!("Full name is required");
    }
    if business_name.trim().is_empty() {
        bail!("Business name is required");
    }
    match business_type {
        None | Some("") => bail!("Select your business type"),
        Some(crate::catalog::OTHER_BUSINESS_TYPE) if custom_business_type.trim().is_empty() => {
            bail!("Please specify your business type")
        }
        Some(_) => Ok(()),
    }
}

/// Features gate.
pub fn validate_feature_selection(selected: usize) -> Result<()> {
    if selected == 0 {
        bail!("Select at least one feature");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_thresholds() {
        assert_eq!(PasswordStrength::of(""), PasswordStrength::Empty);
        assert_eq!(PasswordStrength::of("abcde"), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::of("abcdef"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of("abcdefghi"), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::of("abcdefghij"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::of("abcdefghij").label(), "Strong");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("a@b.com", "x").is_ok());
        assert!(validate_login("", "x").is_err());
        assert!(validate_login("a@b.com", "").is_err());
    }

    #[test]
    fn signup_requires_exact_match() {
        assert!(validate_signup("a", "a").is_ok());
        assert!(validate_signup("secret", "Secret").is_err());
        assert!(validate_signup("", "").is_err());
        assert!(validate_signup("secret", "").is_err());
    }

    #[test]
    fn reset_rejects_mismatch() {
        let err = validate_new_password("abcdefgh", "abcdefg1").unwrap_err();
        assert_eq!(err.to_string(), "Passwords don't match");
    }

    #[test]
    fn reset_rejects_short_password() {
        let err = validate_new_password("abc123", "abc123").unwrap_err();
        assert!(err.to_string().contains("at least 8 characters"));
        assert!(validate_new_password("abcdefgh", "abcdefgh").is_ok());
    }

    #[test]
    fn details_require_custom_type_for_other() {
        assert!(validate_business_details("Jo", "Acme", Some("saas"), "").is_ok());
        assert!(validate_business_details("Jo", "Acme", Some("other"), "").is_err());
        assert!(validate_business_details("Jo", "Acme", Some("other"), "Bakery").is_ok());
        assert!(validate_business_details("Jo", "Acme", None, "").is_err());
        assert!(validate_business_details("", "Acme", Some("saas"), "").is_err());
        assert!(validate_business_details("Jo", " ", Some("saas"), "").is_err());
    }

    #[test]
    fn features_need_one_selection() {
        assert!(validate_feature_selection(0).is_err());
        assert!(validate_feature_selection(1).is_ok());
    }
}
