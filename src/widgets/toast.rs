//! Toast notification widget.
//!
//! A non-blocking notification in the bottom-right corner that disappears
//! after a fixed duration. Expiry is driven by [`ToastManager::tick`] so the
//! clock can be injected.

use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// How long a toast stays up unless overridden.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Info => "\u{2139}",    // ℹ
            ToastVariant::Warning => "\u{26A0}", // ⚠
            ToastVariant::Error => "\u{2718}",   // ✘
        }
    }

    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.primary,
            ToastVariant::Warning => t.warning,
            ToastVariant::Error => t.error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Renders a toast in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);
        // Sit just above the footer.
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::calculate_area(area);
        let t = theme();

        Clear.render(toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let border = if t.theme_type == crate::styles::ThemeType::NoColor {
            Style::default()
        } else {
            Style::default().fg(self.toast.variant.color())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(t.background_style());

        Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds at most one toast; a new toast replaces the current one.
#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<(Toast, Instant)>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast` until `now + toast.duration`.
    pub fn push(&mut self, toast: Toast, now: Instant) {
        let expires_at = now + toast.duration;
        self.current = Some((toast, expires_at));
    }

    /// Drop an expired toast. Returns whether one is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        if matches!(&self.current, Some((_, expires_at)) if now >= *expires_at) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_duration() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push(Toast::info("Code resent"), start);

        assert!(toasts.tick(start + Duration::from_secs(2)));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("Code resent"));
        assert!(!toasts.tick(start + DEFAULT_TOAST_DURATION));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_new_toast_replaces_old() {
        let start = Instant::now();
        let mut toasts = ToastManager::new();
        toasts.push(Toast::info("first"), start);
        toasts.push(Toast::success("second").with_duration(Duration::from_secs(10)), start);
        assert!(toasts.tick(start + Duration::from_secs(5)));
        assert_eq!(toasts.current().map(|t| t.variant), Some(ToastVariant::Success));
    }

    #[test]
    fn test_toast_area_fits_small_terminals() {
        let area = ToastWidget::calculate_area(Rect::new(0, 0, 20, 6));
        assert!(area.width <= 20);
        assert!(area.bottom() <= 6);
    }
}
