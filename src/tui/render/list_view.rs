use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::{Item, View};
use crate::tui::app::App;
use crate::util::text::{cell_width, fit_to_cells};

use super::push_highlighted_spans;

/// Render the list of visible items
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    app.scroll_to_fit(area.height as usize);
    let app: &App = app;

    if app.selection.is_empty() {
        let line = if app.selection.filter_text().trim().is_empty() {
            let msg = match app.selection.view() {
                View::Active => " Nothing to do",
                View::Resolved => " Nothing resolved yet",
            };
            Line::from(Span::styled(msg, Style::default().fg(app.theme.dim).bg(bg)))
        } else {
            let msg = " no matching tasks ";
            let padding = (area.width as usize).saturating_sub(msg.len() + 1);
            let warn_style = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.red)
                .add_modifier(Modifier::BOLD);
            Line::from(vec![
                Span::styled(" ".repeat(padding), Style::default().bg(bg)),
                Span::styled(msg, warn_style),
            ])
        };
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let cursor = app.selection.cursor().unwrap_or(0);
    let scroll = app.scroll_offset;
    let height = area.height as usize;
    let filter_re = app.filter_re();
    let width = area.width as usize;

    let lines: Vec<Line> = app
        .selection
        .visible()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(row, item)| render_item_line(app, item, row == cursor, width, filter_re.as_ref()))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// One row: cursor bar, marker, description with colored tags, location
fn render_item_line<'a>(
    app: &'a App,
    item: &Item,
    is_cursor: bool,
    width: usize,
    filter_re: Option<&Regex>,
) -> Line<'a> {
    let theme = &app.theme;
    let row_bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let text_style = Style::default()
        .fg(if is_cursor { theme.text_bright } else { theme.text })
        .bg(row_bg);
    let match_style = Style::default()
        .fg(theme.filter_match_fg)
        .bg(theme.filter_match_bg);

    let mut spans: Vec<Span> = Vec::new();

    // Column 0: cursor accent
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(theme.selection_border).bg(row_bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
    }

    let status = item.status();
    spans.push(Span::styled(
        status.marker(),
        Style::default()
            .fg(theme.status_color(status))
            .bg(row_bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ", Style::default().bg(row_bg)));

    // Location is right-aligned; the description gets what is left
    let location = item.location();
    let location_width = cell_width(&location) + 2;
    let used = 5; // accent + marker + space
    let budget = width.saturating_sub(used + location_width);
    let description = fit_to_cells(item.description(), budget);
    let description_width = cell_width(&description);

    for (i, word) in description.split(' ').enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", text_style));
        }
        if word.len() > 1 && word.starts_with('#') {
            let tag_style = Style::default()
                .fg(tag_fg(app, word, is_cursor))
                .bg(row_bg);
            push_highlighted_spans(&mut spans, word, tag_style, match_style, filter_re);
        } else {
            spans.push(Span::styled(word.to_string(), text_style));
        }
    }

    if used + description_width + location_width <= width {
        let pad = width - used - description_width - location_width + 1;
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        spans.push(Span::styled(
            location,
            Style::default().fg(theme.dim).bg(row_bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
    }

    Line::from(spans)
}

/// Tag color; a truncated tag (ending in `…`) is looked up without the ellipsis
fn tag_fg(app: &App, word: &str, is_cursor: bool) -> Color {
    let tag = word.trim_end_matches('\u{2026}');
    let color = app.theme.tag_color(tag);
    if color == app.theme.text && is_cursor {
        app.theme.text_bright
    } else {
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn list_shows_marker_description_and_location() {
        let mut app = app_with_lines(&["[ ] write spec #design", "- [@] review"]);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("\u{258E}[ ] write spec #design"), "{}", lines[0]);
        assert!(lines[0].ends_with("test.md:1"), "{}", lines[0]);
        assert!(lines[1].starts_with(" [@] review"), "{}", lines[1]);
        assert!(lines[1].ends_with("test.md:2"), "{}", lines[1]);
    }

    #[test]
    fn list_shows_current_status_not_source_marker() {
        let mut app = app_with_lines(&["[ ] a", "[ ] b"]);
        app.selection.set_status_on_current(crate::model::Status::Ongoing);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.lines().next().unwrap().contains("[@] a"));
    }

    #[test]
    fn list_empty_active() {
        let mut app = app_with_lines(&["[x] done"]);
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " Nothing to do");
    }

    #[test]
    fn list_empty_with_filter() {
        let mut app = app_with_lines(&["[ ] a #ui"]);
        app.selection.set_filter_text("#zzz");
        let output = render_to_string(TERM_W, 4, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.ends_with("no matching tasks"), "{}", output);
    }

    #[test]
    fn list_scrolls_to_cursor() {
        let lines: Vec<String> = (1..=10).map(|i| format!("[ ] task {}", i)).collect();
        let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
        let mut app = app_with_lines(&refs);
        app.resize(TERM_W, 6); // 3 list rows
        app.selection.move_to_bottom();
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" [ ] task 8"));
        assert!(rows[2].starts_with("\u{258E}[ ] task 10"));
    }

    #[test]
    fn long_description_is_truncated() {
        let long = format!("[ ] {}", "word ".repeat(30));
        let mut app = app_with_lines(&[long.as_str()]);
        let output = render_to_string(40, 2, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let row = output.lines().next().unwrap();
        assert!(row.contains('\u{2026}'), "{}", row);
        assert!(row.ends_with("test.md:1"), "{}", row);
    }
}
