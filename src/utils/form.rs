//! Key interpretation shared by the form screens.
//!
//! Screens never look at raw key codes for navigation. They ask
//! [`interpret`] what a key means given the active keymap and whether a text
//! field has focus, then act on the resulting [`FormKey`].

use crate::keymap::{Action, Keymap};
use crate::utils::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    NextField,
    PrevField,
    /// Activate the focused element (Enter)
    Submit,
    Back,
    Toggle,
    Left,
    Right,
    PageLeft,
    PageRight,
    First,
    Last,
    Backspace,
    Delete,
    /// A printable character to type into the focused field
    Char(char),
    Ignored,
}

/// Translate a key event for a screen.
///
/// With `text_focused`, a printable key without Ctrl/Alt is always typed, even
/// when the preset binds it (vim `h`, `l`, `g`). Up/Down still move focus.
pub fn interpret(key: &KeyEvent, keymap: &Keymap, text_focused: bool) -> FormKey {
    if key.kind != KeyEventKind::Press {
        return FormKey::Ignored;
    }
    let action = keymap.get_action(key.code, key.modifiers);

    if text_focused {
        // Printable keys are always text here, whatever the preset binds them to.
        if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return FormKey::Char(c);
            }
        }
        if let Some(action) = action.filter(TextInput::is_action_allowed_when_focused) {
            return from_action(action);
        }
        return match key.code {
            KeyCode::Up => FormKey::PrevField,
            KeyCode::Down => FormKey::NextField,
            _ => FormKey::Ignored,
        };
    }

    match action {
        Some(action) => from_action(action),
        None => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => FormKey::Char(c),
            _ => FormKey::Ignored,
        },
    }
}

fn from_action(action: Action) -> FormKey {
    match action {
        Action::MoveUp | Action::PrevTab => FormKey::PrevField,
        Action::MoveDown | Action::NextTab => FormKey::NextField,
        Action::MoveLeft => FormKey::Left,
        Action::MoveRight => FormKey::Right,
        Action::PageUp => FormKey::PageLeft,
        Action::PageDown => FormKey::PageRight,
        Action::Home => FormKey::First,
        Action::End => FormKey::Last,
        Action::Confirm => FormKey::Submit,
        Action::Cancel => FormKey::Back,
        Action::ToggleSelect => FormKey::Toggle,
        Action::Backspace => FormKey::Backspace,
        Action::DeleteChar => FormKey::Delete,
        // Handled globally before a screen sees the key.
        Action::Quit | Action::Help => FormKey::Ignored,
    }
}

/// Apply an editing key to a text field. Returns true if it was consumed.
pub fn edit_text(input: &mut TextInput, key: FormKey) -> bool {
    match key {
        FormKey::Char(c) => input.insert_char(c),
        FormKey::Backspace => input.backspace(),
        FormKey::Delete => input.delete(),
        FormKey::Left => input.move_left(),
        FormKey::Right => input.move_right(),
        FormKey::First => input.move_home(),
        FormKey::Last => input.move_end(),
        _ => return false,
    }
    true
}

/// Next element in a focus cycle, wrapping around.
pub fn cycle_next<T: Copy + PartialEq>(order: &[T], current: T) -> T {
    match order.iter().position(|f| *f == current) {
        Some(i) => order[(i + 1) % order.len()],
        None => order.first().copied().unwrap_or(current),
    }
}

/// Previous element in a focus cycle, wrapping around.
pub fn cycle_prev<T: Copy + PartialEq>(order: &[T], current: T) -> T {
    match order.iter().position(|f| *f == current) {
        Some(i) => order[(i + order.len() - 1) % order.len()],
        None => order.first().copied().unwrap_or(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeymapPreset;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letters_type_inside_text_fields() {
        let vim = Keymap {
            preset: KeymapPreset::Vim,
            overrides: vec![],
        };
        assert_eq!(
            interpret(&press(KeyCode::Char('j')), &vim, true),
            FormKey::Char('j')
        );
        assert_eq!(
            interpret(&press(KeyCode::Char('j')), &vim, false),
            FormKey::NextField
        );
        assert_eq!(
            interpret(&press(KeyCode::Char('q')), &Keymap::default(), true),
            FormKey::Char('q')
        );
    }

    #[test]
    fn test_vim_motion_letters_are_typed_in_text_fields() {
        let vim = Keymap {
            preset: KeymapPreset::Vim,
            overrides: vec![],
        };
        for c in ['h', 'l', 'g'] {
            assert_eq!(interpret(&press(KeyCode::Char(c)), &vim, true), FormKey::Char(c));
        }
        let shift_g = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(interpret(&shift_g, &vim, true), FormKey::Char('G'));
        assert_eq!(interpret(&shift_g, &vim, false), FormKey::Last);
        assert_eq!(interpret(&press(KeyCode::Char('h')), &vim, false), FormKey::Left);

        // Arrows and Home keep editing the field.
        assert_eq!(interpret(&press(KeyCode::Left), &vim, true), FormKey::Left);
        assert_eq!(interpret(&press(KeyCode::Home), &vim, true), FormKey::First);
    }

    #[test]
    fn test_emacs_control_keys_still_edit() {
        let emacs = Keymap {
            preset: KeymapPreset::Emacs,
            overrides: vec![],
        };
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(interpret(&ctrl('b'), &emacs, true), FormKey::Left);
        assert_eq!(interpret(&ctrl('a'), &emacs, true), FormKey::First);
        assert_eq!(interpret(&ctrl('h'), &emacs, true), FormKey::Backspace);
    }

    #[test]
    fn test_space_types_in_field_and_toggles_outside() {
        let keymap = Keymap::default();
        assert_eq!(
            interpret(&press(KeyCode::Char(' ')), &keymap, true),
            FormKey::Char(' ')
        );
        assert_eq!(
            interpret(&press(KeyCode::Char(' ')), &keymap, false),
            FormKey::Toggle
        );
    }

    #[test]
    fn test_arrows_move_focus_in_text_fields() {
        let keymap = Keymap::default();
        assert_eq!(interpret(&press(KeyCode::Down), &keymap, true), FormKey::NextField);
        assert_eq!(interpret(&press(KeyCode::Up), &keymap, true), FormKey::PrevField);
        assert_eq!(interpret(&press(KeyCode::Tab), &keymap, true), FormKey::NextField);
        assert_eq!(interpret(&press(KeyCode::Enter), &keymap, true), FormKey::Submit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(interpret(&key, &Keymap::default(), false), FormKey::Ignored);
    }

    #[test]
    fn test_edit_text() {
        let mut input = TextInput::new();
        assert!(edit_text(&mut input, FormKey::Char('x')));
        assert!(edit_text(&mut input, FormKey::Backspace));
        assert!(!edit_text(&mut input, FormKey::Submit));
        assert!(input.is_empty());
    }

    #[test]
    fn test_cycle_wraps() {
        let order = [1, 2, 3];
        assert_eq!(cycle_next(&order, 3), 1);
        assert_eq!(cycle_prev(&order, 1), 3);
        assert_eq!(cycle_next(&order, 9), 1);
    }
}
