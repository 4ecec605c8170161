//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding};
pub use presets::KeymapPreset;

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset.
    ///
    /// An overridden action loses all of its preset bindings.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Get all bindings (overrides + preset) for display in help
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Reject overrides whose key strings cannot be parsed.
    pub fn validate(&self) -> Result<()> {
        for binding in &self.overrides {
            binding
                .parse()
                .with_context(|| format!("Invalid key binding for {:?}", binding.action))?;
        }
        Ok(())
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint for form screens
    pub fn footer_form(&self) -> String {
        format!(
            "{}: Next field | {}: Submit | {}: Back | {}: Help",
            self.get_key_display_for_action(Action::NextTab),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
            self.get_key_display_for_action(Action::Help),
        )
    }

    /// Footer hint for screens built from lists and toggles
    pub fn footer_navigation(&self) -> String {
        format!(
            "{}/{}: Navigate | {}: Toggle | {}: Select | {}: Back | {}: Quit",
            self.get_key_display_for_action(Action::MoveUp),
            self.get_key_display_for_action(Action::MoveDown),
            self.get_key_display_for_action(Action::ToggleSelect),
            self.get_key_display_for_action(Action::Confirm),
            self.get_key_display_for_action(Action::Cancel),
            self.get_key_display_for_action(Action::Quit),
        )
    }
}
