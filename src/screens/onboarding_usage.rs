//! Onboarding step 2: five usage sliders.
//!
//! The values are collected for show only; the estimate that follows is fixed.

use crate::catalog::USAGE_SLIDERS;
use crate::components::Step;
use crate::keymap::{Action, Keymap};
use crate::navigation::ScreenId;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::utils::{interpret, stack_rows, FormKey, UsageSlider};
use crate::widgets::{Button, SliderWidget, SLIDER_HEIGHT};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, info};

#[derive(Debug)]
pub struct OnboardingUsageScreen {
    sliders: Vec<UsageSlider>,
    /// Index of the focused slider; `sliders.len()` is the submit button.
    focus: usize,
}

impl Default for OnboardingUsageScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingUsageScreen {
    pub fn new() -> Self {
        Self {
            sliders: USAGE_SLIDERS.iter().map(UsageSlider::new).collect(),
            focus: 0,
        }
    }

    pub fn sliders(&self) -> &[UsageSlider] {
        &self.sliders
    }

    /// Current value of the slider with `id`.
    pub fn value(&self, id: &str) -> Option<u32> {
        self.sliders
            .iter()
            .find(|s| s.spec().id == id)
            .map(UsageSlider::value)
    }

    fn on_submit_button(&self) -> bool {
        self.focus == self.sliders.len()
    }

    fn focused_slider_mut(&mut self) -> Option<&mut UsageSlider> {
        self.sliders.get_mut(self.focus)
    }

    fn submit(&self) -> ScreenAction {
        let values: Vec<String> = self
            .sliders
            .iter()
            .map(|s| format!("{}={}", s.spec().id, s.value()))
            .collect();
        info!(usage = %values.join(" "), "usage submitted");
        ScreenAction::navigate(ScreenId::OnboardingEstimate)
    }
}

impl Screen for OnboardingUsageScreen {
    fn id(&self) -> ScreenId {
        ScreenId::OnboardingUsage
    }

    fn step(&self) -> Option<Step> {
        Some(Step::new(2, 3))
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        format!(
            "{}/{}: Adjust | {}/{}: Jump | {}: Next | {}: Calculate | {}: Help",
            keymap.get_key_display_for_action(Action::MoveLeft),
            keymap.get_key_display_for_action(Action::MoveRight),
            keymap.get_key_display_for_action(Action::PageUp),
            keymap.get_key_display_for_action(Action::PageDown),
            keymap.get_key_display_for_action(Action::NextTab),
            keymap.get_key_display_for_action(Action::Confirm),
            keymap.get_key_display_for_action(Action::Help),
        )
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<()> {
        // Slider, spacer, ... then a blank row and the button.
        let mut heights: Vec<u16> = self
            .sliders
            .iter()
            .flat_map(|_| [SLIDER_HEIGHT, 1])
            .collect();
        heights.push(1);
        let rows = stack_rows(area, &heights);

        for (i, slider) in self.sliders.iter().enumerate() {
            frame.render_widget(SliderWidget::new(slider).focused(self.focus == i), rows[i * 2]);
        }
        frame.render_widget(
            Button::new("Calculate My Usage").focused(self.on_submit_button()),
            rows[heights.len() - 1],
        );
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };

        let stops = self.sliders.len() + 1;
        let action = match interpret(&key, ctx.keymap(), false) {
            FormKey::NextField => {
                self.focus = (self.focus + 1) % stops;
                ScreenAction::None
            }
            FormKey::PrevField => {
                self.focus = (self.focus + stops - 1) % stops;
                ScreenAction::None
            }
            FormKey::Submit => self.submit(),
            adjust => {
                if let Some(slider) = self.focused_slider_mut() {
                    match adjust {
                        FormKey::Left => slider.decrease(),
                        FormKey::Right => slider.increase(),
                        FormKey::PageLeft => slider.page_up(),
                        FormKey::PageRight => slider.page_down(),
                        FormKey::First => slider.to_min(),
                        FormKey::Last => slider.to_max(),
                        _ => return Ok(ScreenAction::None),
                    }
                    debug!(slider = slider.spec().id, value = slider.value(), "slider moved");
                }
                ScreenAction::None
            }
        };
        Ok(action)
    }
}
