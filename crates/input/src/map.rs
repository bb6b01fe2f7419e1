//! Key mapping from terminal events to engine actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Any non-quit key-down counts as the jump-or-restart press; the engine
/// makes no distinction between keys.
pub fn is_press(key: KeyEvent) -> bool {
    !should_quit(key)
}
