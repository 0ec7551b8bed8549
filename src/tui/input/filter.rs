use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text::{grapheme_after, grapheme_before, token_start_before};

use super::navigate::handle_navigation;

pub(super) fn handle_filter_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => leave_filter(app),
        // Leave the input, then act on the key as navigation would
        KeyCode::Tab | KeyCode::Down => {
            leave_filter(app);
            handle_navigation(app, key);
        }
        _ => edit_filter(app, key),
    }
}

fn leave_filter(app: &mut App) {
    app.mode = Mode::Navigation;
    app.caret_visible = true;
    log::debug!("filter {:?}", app.selection.filter_text());
}

/// Single-line text editing on the filter input. Keys the editor does not
/// understand are ignored.
fn edit_filter(app: &mut App, key: KeyEvent) {
    let mut text = app.selection.filter_text().to_string();
    let mut cursor = app.filter_cursor.min(text.len());

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            text.clear();
            cursor = 0;
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
            let start = token_start_before(&text, cursor);
            text.replace_range(start..cursor, "");
            cursor = start;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            text.insert(cursor, c);
            cursor += c.len_utf8();
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = grapheme_before(&text, cursor) {
                text.replace_range(prev..cursor, "");
                cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = grapheme_after(&text, cursor) {
                text.replace_range(cursor..next, "");
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = grapheme_before(&text, cursor) {
                cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = grapheme_after(&text, cursor) {
                cursor = next;
            }
        }
        (_, KeyCode::Home) => cursor = 0,
        (_, KeyCode::End) => cursor = text.len(),
        _ => return,
    }

    app.filter_cursor = cursor;
    app.caret_visible = true;
    if text != app.selection.filter_text() {
        app.selection.set_filter_text(&text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Item};

    fn app_in_filter(lines: &[&str]) -> App {
        let items = lines
            .iter()
            .enumerate()
            .map(|(i, l)| Item::parse("t.md", i + 1, *l).unwrap())
            .collect();
        let mut app = App::new(items, &Config::default(), 1);
        app.mode = Mode::FilterEntry;
        app
    }

    fn key(app: &mut App, code: KeyCode) {
        handle_filter_entry(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_filter_entry(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_filter_entry(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT));
        }
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut app = app_in_filter(&["[ ] a #ui", "[ ] b #db"]);
        type_str(&mut app, "#db");
        assert_eq!(app.selection.filter_text(), "#db");
        assert_eq!(app.filter_cursor, 3);
        assert_eq!(app.selection.visible_len(), 1);
        key(&mut app, KeyCode::Backspace);
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.filter_text(), "#");
        assert_eq!(app.selection.visible_len(), 2);
        key(&mut app, KeyCode::Backspace);
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.filter_text(), "");
        assert_eq!(app.filter_cursor, 0);
    }

    #[test]
    fn test_caret_movement_and_mid_insert() {
        let mut app = app_in_filter(&["[ ] a"]);
        type_str(&mut app, "#ac");
        key(&mut app, KeyCode::Left);
        type_str(&mut app, "b");
        assert_eq!(app.selection.filter_text(), "#abc");
        key(&mut app, KeyCode::Home);
        key(&mut app, KeyCode::Delete);
        assert_eq!(app.selection.filter_text(), "abc");
        key(&mut app, KeyCode::End);
        key(&mut app, KeyCode::Right);
        assert_eq!(app.filter_cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut app = app_in_filter(&["[ ] a"]);
        type_str(&mut app, "#café");
        key(&mut app, KeyCode::Left);
        key(&mut app, KeyCode::Backspace);
        assert_eq!(app.selection.filter_text(), "#caé");
        key(&mut app, KeyCode::Delete);
        assert_eq!(app.selection.filter_text(), "#ca");
    }

    #[test]
    fn test_ctrl_w_and_ctrl_u() {
        let mut app = app_in_filter(&["[ ] a"]);
        type_str(&mut app, "#one #two");
        ctrl(&mut app, 'w');
        assert_eq!(app.selection.filter_text(), "#one ");
        ctrl(&mut app, 'u');
        assert_eq!(app.selection.filter_text(), "");
        assert_eq!(app.filter_cursor, 0);
    }

    #[test]
    fn test_enter_is_ignored() {
        let mut app = app_in_filter(&["[ ] a"]);
        type_str(&mut app, "#a");
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::FilterEntry);
        assert_eq!(app.selection.filter_text(), "#a");
    }

    #[test]
    fn test_esc_returns_to_navigation() {
        let mut app = app_in_filter(&["[ ] a"]);
        app.caret_visible = false;
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigation);
        assert!(app.caret_visible);
    }
}
