//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Form keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    Calculate,
    Clear,
    Backspace,
    Input(char),
    None,
}

/// Map a key event to an action.
///
/// Only characters that can appear in a decimal number are fed into the
/// focused field; everything else is a command or ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Enter => KeyAction::Calculate,
        KeyCode::Delete => KeyAction::Clear,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '-') => {
            KeyAction::Input(c)
        }
        _ => KeyAction::None,
    }
}
