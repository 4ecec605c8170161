//! Help Overlay Component
//!
//! Lists the active key bindings, grouped by category.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::center_popup;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORIES: [&str; 5] = [
    "Field Navigation",
    "Navigation",
    "Selection",
    "Text Editing",
    "Global",
];

pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the overlay centered in `area`.
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) {
        let t = theme();

        let popup_area = center_popup(area, 72, area.height.saturating_sub(2).max(10));
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style())
            .style(t.background_style());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [preset_area, bindings_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        let mut preset_spans = vec![Span::styled("Preset: ", t.muted_style())];
        for (i, preset) in KeymapPreset::ALL.iter().enumerate() {
            let label = format!("{} {}", i + 1, preset.name());
            if *preset == keymap.preset {
                preset_spans.push(Span::styled(format!("[{}]", label), t.title_style()));
            } else {
                preset_spans.push(Span::styled(label, t.muted_style()));
            }
            preset_spans.push(Span::raw("  "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(preset_spans)).alignment(Alignment::Center),
            preset_area,
        );

        let bindings = keymap.all_bindings();
        let mut lines: Vec<Line> = Vec::new();
        for category in CATEGORIES {
            let in_category: Vec<_> = bindings
                .iter()
                .filter(|b| b.action.category() == category)
                .collect();
            if in_category.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                t.accent_style().add_modifier(Modifier::BOLD),
            )));
            for binding in in_category {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.action.description(), t.text_style()),
                ]));
            }
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), bindings_area);

        frame.render_widget(
            Paragraph::new(format!(
                "Edit keybindings in: {}\nPress 1/2/3 to switch preset, any other key to close",
                config_path
            ))
            .style(t.muted_style())
            .alignment(Alignment::Center),
            footer_area,
        );
    }
}
