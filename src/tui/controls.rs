//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Tab | KeyCode::Down => app.select_next(),
        KeyCode::BackTab | KeyCode::Up => app.select_prev(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.increase(),
        KeyCode::Char('-') | KeyCode::Left => app.decrease(),
        KeyCode::Char('1') => app.switch_preset("baseline"),
        KeyCode::Char('2') => app.switch_preset("dense"),
        KeyCode::Char('3') => app.switch_preset("sparse_site"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
