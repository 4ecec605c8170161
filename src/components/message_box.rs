use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Tone of a status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Pending,
}

impl MessageKind {
    fn icon(self) -> &'static str {
        match self {
            MessageKind::Info => "✉",
            MessageKind::Success => "✔",
            MessageKind::Pending => "…",
        }
    }
}

/// Centered status panel: an icon and title line, then body text.
///
/// Used for the "Check your email", "Email verified!" and "Password Updated!"
/// states that replace a form after submission.
pub struct MessageBox;

impl MessageBox {
    /// Height needed for `body_lines` lines of body text.
    pub fn height(body_lines: u16) -> u16 {
        // border + padding + title + blank + body + padding + border
        body_lines + 6
    }

    pub fn render(frame: &mut Frame, area: Rect, kind: MessageKind, title: &str, body: Vec<Line>) {
        let t = theme();
        let accent = match kind {
            MessageKind::Success => t.success_style(),
            MessageKind::Info | MessageKind::Pending => t.title_style(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent)
            .padding(Padding::uniform(1));

        let mut lines = vec![
            Line::from(vec![
                Span::styled(kind.icon(), accent),
                Span::raw("  "),
                Span::styled(title, accent.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
        ];
        lines.extend(body);

        frame.render_widget(
            Paragraph::new(lines)
                .style(t.text_style())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}
