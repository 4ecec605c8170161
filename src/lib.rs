//! Lulu CRM - the sign-in and onboarding flow as a terminal UI
//!
//! Screens, navigation and the simulated backend are all local; the binary
//! in `main.rs` only wires them to a real terminal.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

pub use config::Config;
pub use navigation::{NavigateOptions, NavigationContext, Navigator, ScreenId};
pub use state::AppState;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
