use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Status;
use crate::tui::app::{App, Mode};

/// Status set by a key in navigation mode
fn status_for_key(c: char) -> Option<Status> {
    match c {
        'x' => Some(Status::Checked),
        '-' | '~' | 's' => Some(Status::Obsolete),
        '@' | 'a' => Some(Status::Ongoing),
        ' ' => Some(Status::Open),
        _ => None,
    }
}

pub(super) fn handle_navigation(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }
        KeyCode::Char('/') => {
            app.mode = Mode::FilterEntry;
            app.filter_cursor = app.selection.filter_text().len();
            app.caret_visible = true;
        }
        KeyCode::Tab => {
            app.selection.toggle_view();
            log::debug!("view -> {}", app.selection.view().label());
        }
        KeyCode::Up | KeyCode::Char('k') => app.selection.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.selection.move_cursor(1),
        KeyCode::PageUp => {
            let page = app.list_height() as isize;
            app.selection.move_cursor(-page);
        }
        KeyCode::PageDown => {
            let page = app.list_height() as isize;
            app.selection.move_cursor(page);
        }
        KeyCode::Home | KeyCode::Char('g') => app.selection.move_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.selection.move_to_bottom(),
        KeyCode::Char(c) if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            if let Some(status) = status_for_key(c) {
                set_current_status(app, status);
            }
        }
        _ => {}
    }
}

fn set_current_status(app: &mut App, status: Status) {
    let Some(item) = app.selection.current_item() else {
        return;
    };
    let location = item.location();
    let description = item.description().to_string();

    if let Some(previous) = app.selection.set_status_on_current(status) {
        log::info!("{}: {} -> {}", location, previous, status);
        app.status_message = Some(format!("{} {}", status.marker(), description));
    }
}
