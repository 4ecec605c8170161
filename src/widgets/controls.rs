//! Buttons, links, checkboxes and sliders.
//!
//! Each control is a single line so screens can stack them in a vertical
//! layout next to [`super::TextInputWidget`] fields.

use crate::catalog::format_thousands;
use crate::styles::theme;
use crate::utils::UsageSlider;
use ratatui::prelude::*;
use ratatui::widgets::{LineGauge, Paragraph};

/// A full-width button. Disabled buttons are dimmed and bracketed.
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            enabled: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let (text, style) = if !self.enabled {
            (format!("[ {} ]", self.label), t.disabled_style())
        } else if self.focused {
            (format!("▶ {} ◀", self.label), t.button_style())
        } else {
            (self.label.to_string(), t.button_style().remove_modifier(Modifier::BOLD))
        };
        buf.set_style(area, style);
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}

/// A line of muted text ending in an underlined, focusable link.
pub struct Link<'a> {
    prefix: &'a str,
    label: &'a str,
    focused: bool,
    alignment: Alignment,
}

impl<'a> Link<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            prefix: "",
            label,
            focused: false,
            alignment: Alignment::Center,
        }
    }

    /// Plain text shown before the link ("Don't have an account? ")
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Widget for Link<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let link_style = if self.focused {
            t.highlight_style().add_modifier(Modifier::UNDERLINED)
        } else {
            t.emphasis_style()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(self.prefix, t.muted_style()),
            Span::styled(self.label, link_style),
        ]))
        .alignment(self.alignment)
        .render(area, buf);
    }
}

/// `[x] label` with an optional muted description after it.
pub struct Checkbox<'a> {
    label: &'a str,
    description: Option<&'a str>,
    checked: bool,
    focused: bool,
}

impl<'a> Checkbox<'a> {
    pub fn new(label: &'a str, checked: bool) -> Self {
        Self {
            label,
            description: None,
            checked,
            focused: false,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let marker = if self.checked { "[x] " } else { "[ ] " };
        let marker_style = if self.checked { t.success_style() } else { t.muted_style() };
        let label_style = if self.focused { t.highlight_style() } else { t.text_style() };
        let mut spans = vec![
            Span::raw(if self.focused { crate::styles::LIST_HIGHLIGHT_SYMBOL } else { "  " }),
            Span::styled(marker, marker_style),
            Span::styled(self.label, label_style),
        ];
        if let Some(description) = self.description {
            spans.push(Span::styled(format!("  {}", description), t.muted_style()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Height of a rendered slider (label row + gauge row).
pub const SLIDER_HEIGHT: u16 = 2;

/// Label with the current value, and a gauge underneath.
pub struct SliderWidget<'a> {
    slider: &'a UsageSlider,
    focused: bool,
}

impl<'a> SliderWidget<'a> {
    pub fn new(slider: &'a UsageSlider) -> Self {
        Self {
            slider,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let spec = self.slider.spec();
        let [label_row, gauge_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let label_style = if self.focused { t.title_style() } else { t.text_style() };
        let value = format!("{} {}", format_thousands(self.slider.value()), spec.unit);
        let value_width = value.chars().count() as u16 + 1;
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(value_width)])
                .areas(label_row);
        Paragraph::new(Line::from(vec![
            Span::raw(if self.focused { crate::styles::LIST_HIGHLIGHT_SYMBOL } else { "  " }),
            Span::styled(spec.label, label_style),
        ]))
        .render(label_area, buf);
        Paragraph::new(Span::styled(value, t.emphasis_style()))
            .alignment(Alignment::Right)
            .render(value_area, buf);

        let filled = if self.focused { t.accent_style() } else { t.title_style() };
        LineGauge::default()
            .ratio(self.slider.ratio())
            .filled_style(filled)
            .unfilled_style(t.muted_style())
            .render(gauge_row, buf);
    }
}
