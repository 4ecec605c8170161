//! Post-onboarding landing screen: setup checklist and quick actions.
//!
//! This is the end of the flow. Nothing here navigates; quitting is the only
//! way out.

use crate::catalog::{QUICK_ACTIONS, SETUP_CHECKLIST};
use crate::keymap::{Action, Keymap};
use crate::navigation::ScreenId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{create_split_layout, interpret, stack_rows, FormKey};
use crate::widgets::{Checkbox, Toast};
use anyhow::Result;
use chrono::Local;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug)]
pub struct DashboardScreen {
    completed: Vec<bool>,
    /// Checklist rows first, then the quick actions.
    focus: usize,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            completed: vec![false; SETUP_CHECKLIST.len()],
            focus: 0,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// Fraction of the checklist done, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.completed_count() as f64 / SETUP_CHECKLIST.len() as f64
    }

    fn stops(&self) -> usize {
        SETUP_CHECKLIST.len() + QUICK_ACTIONS.len()
    }

    fn focused_action(&self) -> Option<&'static str> {
        self.focus
            .checked_sub(SETUP_CHECKLIST.len())
            .and_then(|i| QUICK_ACTIONS.get(i).copied())
    }

    fn activate(&mut self) -> ScreenAction {
        if let Some(action) = self.focused_action() {
            info!(action, "quick action requested");
            return ScreenAction::Toast(Toast::info(format!("{} is coming soon", action)));
        }
        if let Some(done) = self.completed.get_mut(self.focus) {
            *done = !*done;
            debug!(
                item = SETUP_CHECKLIST[self.focus].title,
                completed = *done,
                "checklist item toggled"
            );
        }
        ScreenAction::None
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let date = Local::now().format("%A, %B %-d, %Y").to_string();
        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                "✦ Welcome to Lulu CRM",
                t.title_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(date, t.muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_focused_style()),
        );
        frame.render_widget(banner, area);
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let columns = create_split_layout(area, &[34, 33, 33]);
        for (i, (label, column)) in QUICK_ACTIONS.iter().zip(columns).enumerate() {
            let focused = self.focus == SETUP_CHECKLIST.len() + i;
            let border = if focused {
                t.border_focused_style()
            } else {
                t.border_style()
            };
            let style = if focused { t.highlight_style() } else { t.text_style() };
            frame.render_widget(
                Paragraph::new(Span::styled(*label, style))
                    .alignment(Alignment::Center)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(border),
                    ),
                column,
            );
        }
    }
}

impl Screen for DashboardScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Dashboard
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Let's get you set up and ready to transform your customer relationships".to_string()
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        format!(
            "{}/{}: Navigate | {}: Toggle | {}: Select | {}: Help | {}: Quit",
            keymap.get_key_display_for_action(Action::MoveUp),
            keymap.get_key_display_for_action(Action::MoveDown),
            keymap.get_key_display_for_action(Action::ToggleSelect),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::Help),
            keymap.get_key_display_for_action(Action::Quit),
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let mut heights = vec![4, 1, 1, 1, 1];
        heights.extend(vec![1; SETUP_CHECKLIST.len()]);
        heights.extend([1, 1, 3, 1]);
        let rows = stack_rows(area, &heights);

        self.render_banner(frame, rows[0]);

        let [heading, count] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(rows[2]);
        frame.render_widget(
            Paragraph::new(Span::styled("Get started", t.emphasis_style())),
            heading,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("{}/{} completed", self.completed_count(), SETUP_CHECKLIST.len()),
                t.accent_style(),
            ))
            .alignment(Alignment::Right),
            count,
        );
        frame.render_widget(
            Paragraph::new("Complete these steps to unlock the full potential")
                .style(t.muted_style()),
            rows[3],
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(t.accent_style())
                .ratio(self.progress())
                .label(format!("{:.0}%", self.progress() * 100.0)),
            rows[4],
        );

        for (i, item) in SETUP_CHECKLIST.iter().enumerate() {
            frame.render_widget(
                Checkbox::new(item.title, self.completed[i])
                    .description(item.description)
                    .focused(self.focus == i),
                rows[5 + i],
            );
        }

        let base = 5 + SETUP_CHECKLIST.len();
        frame.render_widget(
            Paragraph::new(Span::styled("Quick actions", t.emphasis_style())),
            rows[base + 1],
        );
        self.render_quick_actions(frame, rows[base + 2]);
        frame.render_widget(
            Paragraph::new("AI Assistant: get personalized help and recommendations")
                .style(t.muted_style()),
            rows[base + 3],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        let stops = self.stops();
        let action = match interpret(&key, ctx.keymap(), false) {
            FormKey::NextField | FormKey::Right => {
                self.focus = (self.focus + 1) % stops;
                ScreenAction::None
            }
            FormKey::PrevField | FormKey::Left => {
                self.focus = (self.focus + stops - 1) % stops;
                ScreenAction::None
            }
            FormKey::Toggle | FormKey::Submit => self.activate(),
            _ => ScreenAction::None,
        };
        Ok(action)
    }
}
