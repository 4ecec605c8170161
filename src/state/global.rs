//! Global application state shared across all screens.

use crate::widgets::{Toast, ToastManager};
use std::time::Instant;

/// State that survives screen changes.
#[derive(Debug, Default)]
pub struct GlobalState {
    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,
    pub toasts: ToastManager,
}

impl GlobalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, toast: Toast, now: Instant) {
        self.toasts.push(toast, now);
    }
}
