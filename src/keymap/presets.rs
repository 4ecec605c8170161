//! Preset keymaps: Standard, Vim, Emacs
//!
//! Printable keys in a preset only fire while no text field has focus;
//! inside a field they are typed. See [`crate::utils::TextInput::is_action_allowed_when_focused`].

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Tab, Enter, Esc
    #[default]
    Standard,
    /// hjkl on top of the standard keys
    Vim,
    /// Ctrl+N/P/B/F on top of the standard keys
    Emacs,
}

impl KeymapPreset {
    pub const ALL: [KeymapPreset; 3] = [
        KeymapPreset::Standard,
        KeymapPreset::Vim,
        KeymapPreset::Emacs,
    ];

    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

impl FromStr for KeymapPreset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "default" => Ok(KeymapPreset::Standard),
            "vim" => Ok(KeymapPreset::Vim),
            "emacs" => Ok(KeymapPreset::Emacs),
            other => anyhow::bail!(
                "Unknown keymap preset '{}' (expected standard, vim or emacs)",
                other
            ),
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Navigation
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        // Selection
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        // Global
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Field navigation
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

/// Vim-style keyboard bindings (hjkl navigation)
fn vim_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+u", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+d", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("g", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("shift+g", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

/// Emacs-style keyboard bindings (Ctrl+N/P navigation)
fn emacs_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("ctrl+p", Action::MoveUp),
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("ctrl+n", Action::MoveDown),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("alt+v", Action::PageUp),
        KeyBinding::new("pageup", Action::PageUp),
        KeyBinding::new("ctrl+v", Action::PageDown),
        KeyBinding::new("pagedown", Action::PageDown),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("?", Action::Help),
        KeyBinding::new("f1", Action::Help),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("ctrl+h", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
        KeyBinding::new("delete", Action::DeleteChar),
        KeyBinding::new("tab", Action::NextTab),
        KeyBinding::new("shift+tab", Action::PrevTab),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_every_preset_binds_core_actions() {
        for preset in KeymapPreset::ALL {
            let bindings = preset.bindings();
            for action in [
                Action::MoveUp,
                Action::MoveDown,
                Action::Confirm,
                Action::Cancel,
                Action::NextTab,
                Action::PrevTab,
                Action::Quit,
                Action::Help,
            ] {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} is missing {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_every_preset_binding_parses() {
        for preset in KeymapPreset::ALL {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "{}: {}", preset.name(), binding.key);
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "k" && b.action == Action::MoveUp));
        assert!(bindings
            .iter()
            .any(|b| b.key == "h" && b.action == Action::MoveLeft));
        assert!(bindings
            .iter()
            .any(|b| b.key == "l" && b.action == Action::MoveRight));
    }

    #[test]
    fn test_emacs_has_ctrl_np() {
        let bindings = KeymapPreset::Emacs.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+n" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+p" && b.action == Action::MoveUp));
    }

    #[test]
    fn test_preset_serde() {
        let json = serde_json::to_string(&KeymapPreset::Vim).unwrap();
        assert_eq!(json, "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"emacs\"").unwrap();
        assert_eq!(preset, KeymapPreset::Emacs);
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("VIM".parse::<KeymapPreset>().unwrap(), KeymapPreset::Vim);
        assert_eq!(
            "default".parse::<KeymapPreset>().unwrap(),
            KeymapPreset::Standard
        );
        assert!("nano".parse::<KeymapPreset>().is_err());
    }
}
