//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Focus & cursor ============
    /// Move focus to the previous element
    MoveUp,
    /// Move focus to the next element
    MoveDown,
    /// Cursor left / decrease slider / previous option
    MoveLeft,
    /// Cursor right / increase slider / next option
    MoveRight,
    /// Large decrease (sliders)
    PageUp,
    /// Large increase (sliders)
    PageDown,
    /// Jump to start of input / minimum value
    Home,
    /// Jump to end of input / maximum value
    End,

    // ============ Selection & Confirmation ============
    /// Activate the focused element or submit the form (Enter)
    Confirm,
    /// Go back (Esc)
    Cancel,
    /// Toggle checkbox / feature / checklist item (Space)
    ToggleSelect,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Show help overlay
    Help,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Field navigation ============
    /// Move to next field
    NextTab,
    /// Move to previous field
    PrevTab,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Previous field",
            Action::MoveDown => "Next field",
            Action::MoveLeft => "Move left / decrease",
            Action::MoveRight => "Move right / increase",
            Action::PageUp => "Decrease by ten steps",
            Action::PageDown => "Increase by ten steps",
            Action::Home => "Start / minimum",
            Action::End => "End / maximum",
            Action::Confirm => "Confirm / submit",
            Action::Cancel => "Go back",
            Action::ToggleSelect => "Toggle selection",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::NextTab => "Next field",
            Action::PrevTab => "Previous field",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::Quit | Action::Help => "Global",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::NextTab | Action::PrevTab => "Field Navigation",
        }
    }
}
