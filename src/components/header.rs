use crate::styles::theme;
use crate::widgets::LuluLogo;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};

/// Rows the header occupies.
pub const HEADER_HEIGHT: u16 = 5;

/// Onboarding progress shown under the title ("Step 2 of 3").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub current: u8,
    pub total: u8,
}

impl Step {
    pub const fn new(current: u8, total: u8) -> Self {
        Self { current, total }
    }

    pub fn label(&self) -> String {
        format!("Step {} of {}", self.current, self.total)
    }

    /// Whole-number percentage, truncated (2 of 3 -> 66).
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        (u16::from(self.current) * 100 / u16::from(self.total)).min(100)
    }
}

/// Common header component for all screens: logo on the left, title and
/// subtitle (or step progress) on the right.
pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, step: Option<Step>) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let logo = LuluLogo::fitting(inner);
        let [logo_area, text_area] =
            Layout::horizontal([Constraint::Length(logo.width() + 3), Constraint::Min(0)])
                .areas(inner);
        let [logo_area] = Layout::vertical([Constraint::Length(logo.height())])
            .flex(Flex::Center)
            .areas(logo_area);
        frame.render_widget(logo, logo_area);

        let [title_row, detail_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(text_area);
        frame.render_widget(Paragraph::new(Span::styled(title, t.title_style())), title_row);

        match step {
            Some(step) => {
                let [label_area, gauge_area] =
                    Layout::horizontal([Constraint::Length(14), Constraint::Min(0)])
                        .areas(detail_row);
                frame.render_widget(
                    Paragraph::new(Span::styled(step.label(), t.muted_style())),
                    label_area,
                );
                frame.render_widget(
                    Gauge::default()
                        .percent(step.percent())
                        .label(format!("{}%", step.percent()))
                        .gauge_style(t.title_style()),
                    gauge_area,
                );
            }
            None => {
                frame.render_widget(
                    Paragraph::new(Span::styled(subtitle, t.muted_style()))
                        .wrap(Wrap { trim: true }),
                    detail_row,
                );
            }
        }
    }
}
