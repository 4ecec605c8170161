//! KeyBinding struct for mapping keys to actions
//!
//! Provides parsing of key strings like "ctrl+n", "shift+tab", "j"

use super::Action;
use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n", "shift+tab")
    pub key: String,

    /// The action this key triggers
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event.
    ///
    /// Unparseable key strings never match.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed.matches(code, modifiers),
            Err(_) => false,
        }
    }

    pub fn parse(&self) -> Result<ParsedKey> {
        parse_key_string(&self.key)
    }

    /// Display string for this binding (e.g., "Ctrl+N")
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

impl ParsedKey {
    fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        // Terminals report BackTab with SHIFT set; "shift+tab" parses to Tab+SHIFT.
        if code == KeyCode::BackTab {
            return self.code == KeyCode::BackTab
                || (self.code == KeyCode::Tab && self.modifiers == KeyModifiers::SHIFT);
        }
        // Upper-case letters arrive with SHIFT; bindings are written lower-case.
        if let (KeyCode::Char(c), KeyCode::Char(bound)) = (code, self.code) {
            if c.is_ascii_uppercase() {
                return bound == c.to_ascii_lowercase()
                    && self.modifiers == (modifiers | KeyModifiers::SHIFT)
                    && self.modifiers.contains(KeyModifiers::SHIFT);
            }
            // Symbols like '?' may or may not carry SHIFT depending on the terminal.
            if !c.is_alphanumeric() && c != ' ' {
                return bound == c
                    && self.modifiers.difference(KeyModifiers::SHIFT)
                        == modifiers.difference(KeyModifiers::SHIFT);
            }
        }
        self.code == code && self.modifiers == modifiers
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey> {
    let key = key.trim().to_lowercase();
    // "+" on its own is a key, not a separator
    if key == "+" {
        return Ok(ParsedKey {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::NONE,
        });
    }
    let parts: Vec<&str> = key.split('+').collect();

    let mut modifiers = KeyModifiers::NONE;
    let (key_part, modifier_parts) = parts
        .split_last()
        .ok_or_else(|| anyhow!("Empty key binding"))?;

    for part in modifier_parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            other => bail!("Unknown modifier: {}", other),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    let code = match key {
        "up" | "arrow_up" => KeyCode::Up,
        "down" | "arrow_down" => KeyCode::Down,
        "left" | "arrow_left" => KeyCode::Left,
        "right" | "arrow_right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        f if f.len() > 1 && f.starts_with('f') && f[1..].chars().all(|c| c.is_ascii_digit()) => {
            let n: u8 = f[1..].parse()?;
            if !(1..=12).contains(&n) {
                bail!("Unknown key: {}", key);
            }
            KeyCode::F(n)
        }
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => bail!("Unknown key: {}", key),
            }
        }
    };

    Ok(code)
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+N")
pub fn format_key_display(key: &str) -> String {
    if key.trim() == "+" {
        return "+".to_string();
    }
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" | "arrow_up" => "↑".to_string(),
                "down" | "arrow_down" => "↓".to_string(),
                "left" | "arrow_left" => "←".to_string(),
                "right" | "arrow_right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if part.chars().count() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let parsed = parse_key_string("Ctrl+C").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("pgdn").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("f13").is_err());
        assert!(parse_key_string("nope").is_err());
    }

    #[test]
    fn test_shift_tab_matches_backtab() {
        let binding = KeyBinding::new("shift+tab", Action::PrevTab);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Tab, KeyModifiers::NONE));
    }

    #[test]
    fn test_shifted_letter_binding() {
        let binding = KeyBinding::new("shift+g", Action::End);
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(!binding.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_symbol_ignores_shift() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('?'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_invalid_binding_never_matches() {
        let binding = KeyBinding::new("hyper+q", Action::Quit);
        assert!(!binding.matches(KeyCode::Char('q'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("shift+tab"), "Shift+Tab");
        assert_eq!(format_key_display("?"), "?");
    }
}
