mod filter;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use filter::handle_filter_entry;
use navigate::handle_navigation;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Raw mode swallows SIGINT, so Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigation => handle_navigation(app, key),
        Mode::FilterEntry => handle_filter_entry(app, key),
        Mode::Help => {
            // Any key dismisses help and is consumed
            app.mode = Mode::Navigation;
        }
    }
    app.adjust_scroll();
}
