//! Usage estimate interstitial between the usage and features steps.

use crate::catalog::{format_thousands, ESTIMATE};
use crate::navigation::ScreenId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{interpret, stack_rows, FormKey};
use crate::widgets::Button;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

#[derive(Debug, Default)]
pub struct OnboardingEstimateScreen;

impl OnboardingEstimateScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for OnboardingEstimateScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OnboardingEstimate
    }

    fn subtitle(&self, _ctx: &RenderContext) -> String {
        "Based on your usage, here's what we recommend".to_string()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let rows = stack_rows(area, &[7, 1, 5, 1, 1]);

        let credits = Paragraph::new(vec![
            Line::from(Span::styled(
                format_thousands(ESTIMATE.credits),
                t.title_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("credits per month", t.muted_style())),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_focused_style())
                .title(" Estimated usage ")
                .title_alignment(Alignment::Center)
                .padding(Padding::uniform(1)),
        );
        frame.render_widget(credits, rows[0]);

        let plan_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        let inner = plan_block.inner(rows[2]);
        frame.render_widget(plan_block, rows[2]);
        let [plan_row, note_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
        let [plan_area, cost_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(plan_row);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Recommended plan: ", t.muted_style()),
                Span::styled(ESTIMATE.plan, t.emphasis_style()),
            ])),
            plan_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("${}/month", ESTIMATE.monthly_cost),
                t.accent_style().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            cost_area,
        );
        frame.render_widget(
            Paragraph::new(format!(
                "This plan includes all features you need plus {}% buffer for growth",
                ESTIMATE.buffer_percent
            ))
            .style(t.muted_style())
            .wrap(Wrap { trim: true }),
            note_row,
        );

        frame.render_widget(Button::new("Continue setup").focused(true), rows[4]);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        Ok(match interpret(&key, ctx.keymap(), false) {
            FormKey::Submit | FormKey::Toggle => {
                info!(credits = ESTIMATE.credits, plan = ESTIMATE.plan, "estimate accepted");
                ScreenAction::navigate(ScreenId::OnboardingFeatures)
            }
            _ => ScreenAction::None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::navigation::NavigationContext;
    use crate::screens::test_support::{press, render_text};
    use crossterm::event::KeyCode;

    #[test]
    fn test_shows_fixed_estimate() {
        let config = Config::default();
        let mut screen = OnboardingEstimateScreen::new();
        let text = render_text(&mut screen, &config, &NavigationContext::default());
        assert!(text.contains("12,500"));
        assert!(text.contains("$149/month"));
        assert!(text.contains("Professional"));
        assert!(text.contains("Continue setup"));
    }

    #[test]
    fn test_continue_goes_to_features() {
        let config = Config::default();
        let mut screen = OnboardingEstimateScreen::new();
        assert!(press(&mut screen, &config, KeyCode::Left).is_none());
        assert_eq!(
            press(&mut screen, &config, KeyCode::Enter),
            ScreenAction::navigate(ScreenId::OnboardingFeatures)
        );
    }
}
