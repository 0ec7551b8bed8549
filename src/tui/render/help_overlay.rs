use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::Status;
use crate::tui::app::App;

/// Render the help overlay (opened with ?, closed by any key)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Navigation", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor up/down", key_style, desc_style);
    add_binding(&mut lines, " PgUp/PgDn", "Move by a page", key_style, desc_style);
    add_binding(&mut lines, " g/G", "Jump to top/bottom", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Switch Active/Resolved", key_style, desc_style);
    add_binding(&mut lines, " /", "Filter by #tag", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Status", header_style)));
    let status_rows = [
        (" x", Status::Checked),
        (" - ~ s", Status::Obsolete),
        (" @ a", Status::Ongoing),
        (" Space", Status::Open),
    ];
    for (key, status) in status_rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<16}", key), key_style),
            Span::styled(
                status.marker(),
                Style::default().fg(app.theme.status_color(status)).bg(bg),
            ),
            Span::styled(format!(" Mark {}", status), desc_style),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Filter input", header_style)));
    add_binding(&mut lines, " Esc", "Leave input, keep filter", key_style, desc_style);
    add_binding(&mut lines, " Tab/\u{2193}", "Leave input and act", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+W/Ctrl+U", "Delete word/clear", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "This help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+C", "Quit from anywhere", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
