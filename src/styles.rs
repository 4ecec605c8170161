//! Theme and style system for Lulu
//!
//! One global palette, chosen at startup from config (dark by default).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Marker shown next to the focused row in lists
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (what `NO_COLOR=1` selects)
    #[serde(alias = "no-color", alias = "no_color")]
    NoColor,
}

impl ThemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::NoColor => "nocolor",
        }
    }
}

impl FromStr for ThemeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(ThemeType::Dark),
            "light" => Ok(ThemeType::Light),
            "nocolor" | "no-color" | "no_color" => Ok(ThemeType::NoColor),
            other => anyhow::bail!("Unknown theme '{}' (expected dark, light or nocolor)", other),
        }
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    // === Brand ===
    /// Logo, titles, primary buttons
    pub primary: Color,
    /// Second gradient stop of the brand (logo tail, gauges)
    pub accent: Color,

    // === Semantic Colors ===
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // === Text Colors ===
    pub text: Color,
    pub text_muted: Color,
    /// Links and highlighted figures
    pub text_emphasis: Color,

    // === UI Colors ===
    pub border: Color,
    pub border_focused: Color,
    pub highlight_bg: Color,
    /// Background color (Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Rgb(139, 92, 246),
            accent: Color::Rgb(236, 72, 153),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::LightRed,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Rgb(167, 139, 250),
            border: Color::DarkGray,
            border_focused: Color::Rgb(139, 92, 246),
            highlight_bg: Color::Rgb(40, 36, 56),
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Rgb(109, 40, 217),
            accent: Color::Rgb(190, 24, 93),
            success: Color::Rgb(21, 128, 61),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Rgb(91, 33, 182),
            border: Color::Gray,
            border_focused: Color::Rgb(109, 40, 217),
            highlight_bg: Color::Rgb(237, 233, 254),
            background: Color::Reset,
        }
    }

    /// No-color theme: style helpers emit modifiers only.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            accent: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Links and key figures
    pub fn emphasis_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::UNDERLINED);
        }
        Style::default().fg(self.text_emphasis)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Focused row / focused button
    pub fn highlight_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Filled primary button
    pub fn button_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::White)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("Light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert!("solarized".parse::<ThemeType>().is_err());
    }

    #[test]
    fn test_theme_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThemeType::NoColor).unwrap(),
            "\"nocolor\""
        );
        let t: ThemeType = serde_json::from_str("\"no_color\"").unwrap();
        assert_eq!(t, ThemeType::NoColor);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        for s in [t.highlight_style(), t.button_style(), t.error_style()] {
            assert!(s.fg.is_none());
            assert!(s.bg.is_none());
        }
    }
}
