//! Shared test utilities for the workflow integration tests.
//!
//! Provides `Harness`: an `AppState` driven by synthetic crossterm events and
//! a virtual clock, so deferred outcomes fire exactly when a test says so.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use lulu::config::Config;
use lulu::navigation::{NavigationContext, ScreenId};
use lulu::state::{AppState, ScreenState};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

pub struct Harness {
    pub app: AppState,
    pub now: Instant,
    /// Every screen the app has shown, in order, starting with the first.
    pub visited: Vec<ScreenId>,
}

impl Harness {
    pub fn start(screen: ScreenId) -> Self {
        Self::with_config(screen, Config::default())
    }

    pub fn with_config(screen: ScreenId, config: Config) -> Self {
        let now = Instant::now();
        let app = AppState::new(screen, config, now).expect("app starts");
        Self {
            app,
            now,
            visited: vec![screen],
        }
    }

    pub fn current(&self) -> ScreenId {
        self.app.current_screen()
    }

    pub fn context(&self) -> &NavigationContext {
        self.app.context()
    }

    pub fn screen(&self) -> &ScreenState {
        self.app.screen()
    }

    pub fn event(&mut self, event: Event) {
        self.app.handle_event(event, self.now).expect("event handled");
        self.record();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn press_times(&mut self, code: KeyCode, times: usize) {
        for _ in 0..times {
            self.press(code);
        }
    }

    pub fn press_mod(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.event(Event::Key(KeyEvent::new(code, modifiers)));
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.event(Event::Paste(text.to_string()));
    }

    /// Move the virtual clock forward and tick once.
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        self.app.tick(self.now).expect("tick");
        self.record();
    }

    /// Full-frame render, as one string of cell symbols.
    pub fn render(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).expect("terminal");
        let now = self.now;
        let app = &mut self.app;
        terminal
            .draw(|frame| app.render(frame, now).expect("render"))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn record(&mut self) {
        let current = self.current();
        if self.visited.last() != Some(&current) {
            self.visited.push(current);
        }
    }
}

/// Fill the login form and submit it.
pub fn log_in(h: &mut Harness, email: &str, password: &str) {
    h.type_str(email);
    h.press(KeyCode::Tab);
    h.type_str(password);
    h.press(KeyCode::Enter);
}

/// Type a six digit code and verify it.
pub fn enter_code(h: &mut Harness, code: &str) {
    h.type_str(code);
    h.press(KeyCode::Enter);
}
