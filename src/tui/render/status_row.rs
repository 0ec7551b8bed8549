use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::{cell_width, grapheme_after};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigation => {
            let spans = if let Some(ref msg) = app.status_message {
                vec![Span::styled(
                    format!(" {}", msg),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                )]
            } else if !app.selection.filter_text().is_empty() {
                // Keep the filter visible, dimmed, after leaving the input
                vec![Span::styled(
                    format!("/{}", app.selection.filter_text()),
                    Style::default().fg(app.theme.dim).bg(bg),
                )]
            } else {
                Vec::new()
            };
            (spans, "/ filter  tab view  x done  ? help  q quit")
        }
        Mode::FilterEntry => (filter_input_spans(app), "esc done  tab view"),
        Mode::Help => (Vec::new(), "any key to close"),
    };

    if app.show_key_hints {
        let content_width: usize = spans.iter().map(|s| cell_width(&s.content)).sum();
        let hint_width = cell_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `/text` with the caret drawn at the edit position
fn filter_input_spans(app: &App) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let text = app.selection.filter_text();
    let cursor = app.filter_cursor.min(text.len());
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![
        Span::styled("/", Style::default().fg(app.theme.yellow).bg(bg)),
        Span::styled(text[..cursor].to_string(), text_style),
    ];

    match grapheme_after(text, cursor) {
        // Caret over a character: reverse it while visible
        Some(next) => {
            let under = text[cursor..next].to_string();
            let style = if app.caret_visible {
                text_style.add_modifier(Modifier::REVERSED)
            } else {
                text_style
            };
            spans.push(Span::styled(under, style));
            spans.push(Span::styled(text[next..].to_string(), text_style));
        }
        // Caret at the end: block cursor
        None => {
            let caret = if app.caret_visible { "\u{258C}" } else { " " };
            spans.push(Span::styled(
                caret,
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn status_line(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn navigation_shows_hints() {
        let app = app_with_lines(&["[ ] a"]);
        let line = status_line(&app);
        assert!(line.ends_with("? help  q quit"), "{}", line);
    }

    #[test]
    fn navigation_shows_filter_dimmed() {
        let mut app = app_with_lines(&["[ ] a #ui"]);
        app.selection.set_filter_text("#ui");
        assert!(status_line(&app).starts_with("/#ui"));
    }

    #[test]
    fn status_message_wins_over_filter() {
        let mut app = app_with_lines(&["[ ] a #ui"]);
        app.selection.set_filter_text("#ui");
        app.status_message = Some("[x] a".into());
        assert!(status_line(&app).starts_with(" [x] a"));
    }

    #[test]
    fn filter_entry_caret_at_end() {
        let mut app = app_with_lines(&["[ ] a #ui"]);
        app.mode = Mode::FilterEntry;
        app.selection.set_filter_text("#u");
        app.filter_cursor = 2;
        let line = status_line(&app);
        assert!(line.starts_with("/#u\u{258C}"), "{}", line);
        assert!(line.ends_with("esc done  tab view"), "{}", line);

        app.caret_visible = false;
        assert!(status_line(&app).starts_with("/#u "));
    }

    #[test]
    fn filter_entry_caret_mid_text_keeps_text() {
        let mut app = app_with_lines(&["[ ] a"]);
        app.mode = Mode::FilterEntry;
        app.selection.set_filter_text("#abc");
        app.filter_cursor = 1;
        assert!(status_line(&app).starts_with("/#abc"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = app_with_lines(&["[ ] a"]);
        app.show_key_hints = false;
        assert_eq!(status_line(&app), "");
    }
}
