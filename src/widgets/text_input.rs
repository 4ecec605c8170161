//! Bordered single-line field for a [`TextInput`].
//!
//! The label sits in the top border, an inline error (if any) in the bottom
//! border. Password fields render one bullet per character.

use crate::styles::theme;
use crate::utils::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Height of a rendered field including borders.
pub const FIELD_HEIGHT: u16 = 3;

pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    error: Option<&'a str>,
    focused: bool,
    disabled: bool,
    masked: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            error: None,
            focused: false,
            disabled: false,
            masked: false,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Inline validation message shown in the bottom border.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    fn display_text(&self) -> String {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.disabled || self.input.is_empty() {
            t.muted_style()
        } else {
            t.text_style()
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        if self.error.is_some() {
            t.error_style()
        } else if self.disabled {
            t.disabled_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        if let Some(title) = self.title {
            let style = if self.focused { t.title_style() } else { t.text_style() };
            block = block.title(Span::styled(format!(" {} ", title), style));
        }
        if let Some(error) = self.error {
            block = block.title_bottom(Span::styled(format!(" {} ", error), t.error_style()));
        }
        block
    }

    /// Terminal cursor position for this field, if it should show one.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let inner = self.create_block().inner(area);
        let col = u16::try_from(self.input.cursor()).unwrap_or(u16::MAX);
        Some(Position::new(
            inner.x + col.min(inner.width.saturating_sub(1)),
            inner.y,
        ))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        Paragraph::new(self.display_text())
            .block(block)
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Render a [`TextInputWidget`] and place the terminal cursor in it.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
