//! Six boxed digit slots for a one-time passcode.

use crate::styles::theme;
use crate::utils::validation::OTP_LENGTH;
use crate::utils::OtpCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SLOT_WIDTH: u16 = 5;
const SLOT_GAP: u16 = 1;

/// Height of the slot row including borders.
pub const OTP_HEIGHT: u16 = 3;

/// Total width of the six slots and the gaps between them.
pub const OTP_WIDTH: u16 = SLOT_WIDTH * OTP_LENGTH as u16 + SLOT_GAP * (OTP_LENGTH as u16 - 1);

pub struct OtpInputWidget<'a> {
    code: &'a OtpCode,
    focused: bool,
    disabled: bool,
}

impl<'a> OtpInputWidget<'a> {
    pub fn new(code: &'a OtpCode) -> Self {
        Self {
            code,
            focused: false,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn slot_areas(area: Rect) -> Vec<Rect> {
        let row = crate::utils::center_popup(area, OTP_WIDTH, OTP_HEIGHT);
        (0..OTP_LENGTH as u16)
            .map(|i| Rect::new(row.x + i * (SLOT_WIDTH + SLOT_GAP), row.y, SLOT_WIDTH, row.height))
            .map(|slot| slot.intersection(row))
            .collect()
    }

    /// Where the terminal cursor goes when the row has focus.
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused || self.disabled {
            return None;
        }
        let slot = Self::slot_areas(area).get(self.code.focus()).copied()?;
        if slot.width < 3 || slot.height < 3 {
            return None;
        }
        Some(Position::new(slot.x + slot.width / 2, slot.y + 1))
    }
}

impl Widget for OtpInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        for (i, slot) in Self::slot_areas(area).into_iter().enumerate() {
            let active = self.focused && !self.disabled && i == self.code.focus();
            let border = if self.disabled {
                t.disabled_style()
            } else if active {
                t.border_focused_style()
            } else {
                t.border_style()
            };
            let digit = self.code.slots()[i].map(String::from).unwrap_or_default();
            let style = if self.disabled { t.muted_style() } else { t.title_style() };
            Paragraph::new(digit)
                .style(style)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(if active { BorderType::Thick } else { BorderType::Rounded })
                        .border_style(border),
                )
                .render(slot, buf);
        }
    }
}

/// Render an [`OtpInputWidget`] and place the terminal cursor on the active slot.
pub trait OtpInputWidgetExt {
    fn render_otp_input_widget(&mut self, widget: OtpInputWidget, area: Rect);
}

impl OtpInputWidgetExt for Frame<'_> {
    fn render_otp_input_widget(&mut self, widget: OtpInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
