use crate::config::Config;
use crate::navigation::ScreenId;
use crate::state::AppState;
use crate::tui::Tui;
use crate::utils::format_path_for_display;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// How long the loop waits for input before ticking.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application: the terminal plus the state it drives.
pub struct App {
    state: AppState,
    config_path: PathBuf,
    tui: Tui,
}

impl App {
    pub fn new(start: ScreenId, config: Config, config_path: PathBuf) -> Result<Self> {
        let state = AppState::new(start, config, Instant::now())?
            .with_config_path(format_path_for_display(&config_path));
        Ok(Self {
            state,
            config_path,
            tui: Tui::new()?,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        let restored = self.tui.exit();
        info!(screen = %self.state.current_screen(), "exiting");
        finish(result, restored)
    }

    fn event_loop(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if self.state.should_quit() {
                return Ok(());
            }

            if let Some(event) = self.tui.poll_event(POLL_INTERVAL)? {
                self.state.handle_event(event, Instant::now())?;
            }
            self.state.tick(Instant::now())?;
            self.persist_config();
        }
    }

    fn draw(&mut self) -> Result<()> {
        let now = Instant::now();
        let state = &mut self.state;
        let mut rendered = Ok(());
        self.tui.draw(|frame| rendered = state.render(frame, now))?;
        rendered
    }

    /// Write the config back after an in-app preset switch.
    fn persist_config(&mut self) {
        if !self.state.take_config_changed() {
            return;
        }
        match self.state.config().save(&self.config_path) {
            Ok(()) => info!(path = %self.config_path.display(), "Saved config"),
            // Keep running on the in-memory config.
            Err(e) => error!("Failed to save config: {:#}", e),
        }
    }
}

/// Combine the loop outcome with terminal restoration. A loop error wins; a
/// restore failure after it is only logged.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore)) => {
            error!("Failed to restore terminal: {:#}", restore);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}
