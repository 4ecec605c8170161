use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Application configuration, stored as `config.toml`.
///
/// Every section is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// UI theme: "dark", "light" or "nocolor"
    pub theme: ThemeType,
    pub keymap: Keymap,
    /// Simulated latencies of the mock backend
    pub simulation: SimulationConfig,
}

/// Delays standing in for network round trips, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Signup/login code accepted → next screen
    pub otp_verify_ms: u64,
    /// "Send Reset Link" → recovery code screen
    pub reset_link_ms: u64,
    /// Recovery code accepted → new password screen
    pub recovery_verify_ms: u64,
    /// "Update password" → success panel
    pub password_update_ms: u64,
    /// Success panel → login
    pub success_redirect_ms: u64,
    /// Wait before a code can be resent
    pub resend_cooldown_secs: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            otp_verify_ms: 1500,
            reset_link_ms: 3000,
            recovery_verify_ms: 1500,
            password_update_ms: 1500,
            success_redirect_ms: 2000,
            resend_cooldown_secs: 60,
        }
    }
}

impl SimulationConfig {
    pub fn otp_verify(&self) -> Duration {
        Duration::from_millis(self.otp_verify_ms)
    }

    pub fn reset_link(&self) -> Duration {
        Duration::from_millis(self.reset_link_ms)
    }

    pub fn recovery_verify(&self) -> Duration {
        Duration::from_millis(self.recovery_verify_ms)
    }

    pub fn password_update(&self) -> Duration {
        Duration::from_millis(self.password_update_ms)
    }

    pub fn success_redirect(&self) -> Duration {
        Duration::from_millis(self.success_redirect_ms)
    }

    pub fn resend_cooldown(&self) -> Duration {
        Duration::from_secs(self.resend_cooldown_secs)
    }
}

impl Config {
    /// Load configuration from file, or write and return the defaults.
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let config = Self::default();
            config.save(config_path)?;
            info!(path = %config_path.display(), "Created default config");
            return Ok(config);
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        // A bad override never matches; warn instead of refusing to start.
        if let Err(e) = config.keymap.validate() {
            warn!("Ignoring keymap override: {:#}", e);
        }
        info!(path = %config_path.display(), theme = config.theme.as_str(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to file with owner-only permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Theme to actually use: `NO_COLOR` (any non-empty value) wins over the file.
    pub fn effective_theme(&self) -> ThemeType {
        match std::env::var_os("NO_COLOR") {
            Some(v) if !v.is_empty() => ThemeType::NoColor,
            _ => self.theme,
        }
    }
}
