//! Screen trait and associated types.
//!
//! Each screen owns its form state and reports what should happen next as a
//! [`ScreenAction`] rather than touching the navigator or the global overlay
//! state itself. Shared resources reach it through read-only contexts.

use crate::components::Step;
use crate::config::{Config, SimulationConfig};
use crate::keymap::Keymap;
use crate::navigation::{NavigateOptions, NavigationContext, ScreenId};
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::time::Instant;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub navigation: &'a NavigationContext,
    /// Frame time, used for countdowns.
    pub now: Instant,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, navigation: &'a NavigationContext, now: Instant) -> Self {
        Self {
            config,
            navigation,
            now,
        }
    }
}

/// Context provided for handling events and ticks.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
    pub navigation: &'a NavigationContext,
    /// Time the event arrived. Deferred outcomes are scheduled from it.
    pub now: Instant,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, navigation: &'a NavigationContext, now: Instant) -> Self {
        Self {
            config,
            navigation,
            now,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.config.simulation
    }
}

/// What a screen wants the application to do after an event or tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Switch screens, writing any supplied context fields first.
    Navigate {
        target: ScreenId,
        options: NavigateOptions,
    },
    /// Show a transient notification.
    Toast(Toast),
    Quit,
    ShowHelp,
}

impl ScreenAction {
    pub fn navigate(target: ScreenId) -> Self {
        Self::navigate_with(target, NavigateOptions::new())
    }

    pub fn navigate_with(target: ScreenId, options: NavigateOptions) -> Self {
        Self::Navigate { target, options }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Trait for screen controllers.
///
/// The application draws the shared header and footer from [`Screen::title`],
/// [`Screen::subtitle`], [`Screen::step`] and [`Screen::footer_hint`], then
/// hands the remaining area to [`Screen::render`].
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn id(&self) -> ScreenId {
///         ScreenId::Login
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         // Draw the form inside `area`
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::navigate(ScreenId::Signup))
///     }
/// }
/// ```
pub trait Screen {
    /// Which screen this controller renders.
    fn id(&self) -> ScreenId;

    /// Header title.
    fn title(&self) -> &'static str {
        self.id().title()
    }

    /// Header line under the title. Ignored when [`Screen::step`] is set.
    fn subtitle(&self, _ctx: &RenderContext) -> String {
        String::new()
    }

    /// Onboarding progress, if this screen is a wizard step.
    fn step(&self) -> Option<Step> {
        None
    }

    /// Key hints for the footer.
    fn footer_hint(&self, keymap: &Keymap) -> String {
        keymap.footer_form()
    }

    /// Render the screen body into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event (keys and bracketed paste).
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Advance time-based state. Due deferred outcomes fire here.
    fn tick(&mut self, _ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(ScreenAction::None)
    }

    /// Check if a text input is currently focused.
    ///
    /// When true, printable keys bound to global actions (quit, help) are
    /// typed into the field instead.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is mounted.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called just before the screen is dropped.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_helpers() {
        assert_eq!(
            ScreenAction::navigate(ScreenId::Signup),
            ScreenAction::Navigate {
                target: ScreenId::Signup,
                options: NavigateOptions::new(),
            }
        );
        let action =
            ScreenAction::navigate_with(ScreenId::Otp, NavigateOptions::new().new_user(true));
        match action {
            ScreenAction::Navigate { target, options } => {
                assert_eq!(target, ScreenId::Otp);
                assert_eq!(options.is_new_user, Some(true));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(ScreenAction::default().is_none());
    }
}
