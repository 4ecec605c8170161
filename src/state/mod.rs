//! Application state management.
//!
//! [`AppState`] is the single owner of everything that changes while the
//! program runs. Input and time both enter through it, and it is the only
//! writer of the navigation context.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    AppState                         │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────┐    ┌──────────────────────────┐  │
//! │  │ GlobalState   │    │ ScreenState              │  │
//! │  │               │    │ ┌────────────────────┐   │  │
//! │  │ - help shown  │    │ │ Login(screen)      │   │  │
//! │  │ - toasts      │    │ │ Otp(screen)        │   │  │
//! │  │               │    │ │ ...                │   │  │
//! │  └───────────────┘    │ └────────────────────┘   │  │
//! │  ┌───────────────┐    └──────────────────────────┘  │
//! │  │ Navigator     │                                  │
//! │  └───────────────┘                                  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod global;
pub mod screen;

pub use global::GlobalState;
pub use screen::ScreenState;

use crate::components::{Footer, Header, HelpOverlay, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::config::Config;
use crate::keymap::{Action, KeymapPreset};
use crate::navigation::{NavigationContext, Navigator, ScreenId};
use crate::screens::{RenderContext, ScreenAction, ScreenContext};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::time::Instant;
use tracing::{debug, info};

pub struct AppState {
    config: Config,
    navigator: Navigator,
    screen: ScreenState,
    global: GlobalState,
    /// Shown in the help overlay.
    config_path: String,
    config_changed: bool,
    should_quit: bool,
}

impl AppState {
    /// Mount `start` and run its `on_enter` hook at `now`.
    pub fn new(start: ScreenId, config: Config, now: Instant) -> Result<Self> {
        let navigator = Navigator::starting_at(start);
        let screen = ScreenState::for_screen(start, navigator.context());
        let mut state = Self {
            config,
            navigator,
            screen,
            global: GlobalState::new(),
            config_path: String::new(),
            config_changed: false,
            should_quit: false,
        };
        let ctx = ScreenContext::new(&state.config, state.navigator.context(), now);
        state.screen.as_screen_mut().on_enter(&ctx)?;
        info!(screen = %start, "started");
        Ok(state)
    }

    pub fn with_config_path(mut self, path: impl Into<String>) -> Self {
        self.config_path = path.into();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.current()
    }

    pub fn context(&self) -> &NavigationContext {
        self.navigator.context()
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn global(&self) -> &GlobalState {
        &self.global
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the config was changed in-app since the last call. Clears the flag.
    pub fn take_config_changed(&mut self) -> bool {
        std::mem::take(&mut self.config_changed)
    }

    /// Route one terminal event.
    pub fn handle_event(&mut self, event: Event, now: Instant) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if self.global.show_help_overlay {
                self.handle_help_key(key);
                return Ok(());
            }
            if let Some(action) = self.global_action(key) {
                return self.apply(action, now);
            }
        } else if self.global.show_help_overlay {
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config, self.navigator.context(), now);
        let action = self.screen.as_screen_mut().handle_event(event, &ctx)?;
        self.apply(action, now)
    }

    /// Advance time: expire toasts and fire due deferred outcomes.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        self.global.toasts.tick(now);
        let ctx = ScreenContext::new(&self.config, self.navigator.context(), now);
        let action = self.screen.as_screen_mut().tick(&ctx)?;
        if !action.is_none() {
            debug!(screen = %self.navigator.current(), ?action, "deferred outcome fired");
        }
        self.apply(action, now)
    }

    /// Carry out what a screen asked for.
    pub fn apply(&mut self, action: ScreenAction, now: Instant) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate { target, options } => {
                let ctx = ScreenContext::new(&self.config, self.navigator.context(), now);
                self.screen.as_screen_mut().on_exit(&ctx)?;

                self.navigator.navigate(target, options);
                self.screen = ScreenState::for_screen(target, self.navigator.context());

                let ctx = ScreenContext::new(&self.config, self.navigator.context(), now);
                self.screen.as_screen_mut().on_enter(&ctx)?;
            }
            ScreenAction::Toast(toast) => {
                debug!(message = %toast.message, "toast");
                self.global.notify(toast, now);
            }
            ScreenAction::Quit => {
                info!(screen = %self.navigator.current(), "quit requested");
                self.should_quit = true;
            }
            ScreenAction::ShowHelp => self.global.show_help_overlay = true,
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame, now: Instant) -> Result<()> {
        let area = frame.area();
        let (header, content, footer) = create_standard_layout(area, HEADER_HEIGHT, FOOTER_HEIGHT);
        let ctx = RenderContext::new(&self.config, self.navigator.context(), now);
        let screen = self.screen.as_screen_mut();

        Header::render(frame, header, screen.title(), &screen.subtitle(&ctx), screen.step());
        screen.render(frame, content, &ctx)?;
        Footer::render(frame, footer, &screen.footer_hint(&self.config.keymap));

        self.global.toasts.render(frame, area);
        if self.global.show_help_overlay {
            HelpOverlay::render(frame, area, &self.config.keymap, &self.config_path);
        }
        Ok(())
    }

    /// Quit and help, which work on every screen.
    ///
    /// Printable bindings are left to a focused text field; `ctrl+c` and
    /// function keys still apply there.
    fn global_action(&self, key: &KeyEvent) -> Option<ScreenAction> {
        let action = self.config.keymap.get_action(key.code, key.modifiers)?;
        let typing = self.screen.as_screen().is_input_focused()
            && matches!(key.code, KeyCode::Char(_))
            && !key.modifiers.contains(KeyModifiers::CONTROL);
        match action {
            Action::Quit if !typing => Some(ScreenAction::Quit),
            Action::Help if !typing => Some(ScreenAction::ShowHelp),
            _ => None,
        }
    }

    /// While help is open: 1/2/3 pick a preset, anything else closes it.
    fn handle_help_key(&mut self, key: &KeyEvent) {
        let preset = match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                KeymapPreset::ALL.get(c as usize - '1' as usize).copied()
            }
            _ => None,
        };
        match preset {
            Some(preset) if preset != self.config.keymap.preset => {
                info!(preset = preset.name(), "keymap preset changed");
                self.config.keymap.preset = preset;
                self.config_changed = true;
            }
            Some(_) => {}
            None => self.global.show_help_overlay = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_help_overlay_switches_preset() {
        let now = Instant::now();
        let mut app = AppState::new(ScreenId::OnboardingEstimate, Config::default(), now).unwrap();
        app.handle_event(key(KeyCode::Char('?')), now).unwrap();
        assert!(app.global().show_help_overlay);

        app.handle_event(key(KeyCode::Char('2')), now).unwrap();
        assert_eq!(app.config().keymap.preset, KeymapPreset::Vim);
        assert!(app.global().show_help_overlay);
        assert!(app.take_config_changed());
        assert!(!app.take_config_changed());

        // Any other key closes the overlay without reaching the screen.
        app.handle_event(key(KeyCode::Enter), now).unwrap();
        assert!(!app.global().show_help_overlay);
        assert_eq!(app.current_screen(), ScreenId::OnboardingEstimate);
    }

    #[test]
    fn test_q_is_typed_into_focused_field() {
        let now = Instant::now();
        let mut app = AppState::new(ScreenId::Login, Config::default(), now).unwrap();
        app.handle_event(key(KeyCode::Char('q')), now).unwrap();
        assert!(!app.should_quit());
        assert_eq!(app.screen().as_login().map(|s| s.email().to_string()), Some("q".into()));

        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            now,
        )
        .unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits_outside_text_fields() {
        let now = Instant::now();
        let mut app = AppState::new(ScreenId::Dashboard, Config::default(), now).unwrap();
        app.handle_event(key(KeyCode::Char('q')), now).unwrap();
        assert!(app.should_quit());
    }
}
