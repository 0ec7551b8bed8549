use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::View;
use crate::ops::selection::filter_tags;
use crate::tui::app::App;
use crate::util::text::{cell_width, fit_to_cells};

/// Render the tab bar: view tabs with counts, with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render tabs and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "[ ]",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(" ", bg_style));

    for view in [View::Active, View::Resolved] {
        let is_current = app.selection.view() == view;
        let count = app.selection.count_in(view);
        let style = tab_style(app, is_current);
        let count_bg = if is_current { app.theme.selection_bg } else { bg };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
        spans.push(Span::styled(
            format!("{} ", count),
            Style::default().fg(app.theme.cyan).bg(count_bg),
        ));
        sep_cols.push(spans_width(&spans));
        spans.push(sep.clone());
    }

    // Scan root on the right, if it fits
    let used = spans_width(&spans);
    let width = area.width as usize;
    let root = app.root.display().to_string();
    if used + 2 < width {
        let root = fit_to_cells(&root, width - used - 2);
        let pad = width - used - cell_width(&root) - 1;
        spans.push(Span::styled(" ".repeat(pad), bg_style));
        spans.push(Span::styled(root, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    // Filter indicator: "filter: #a #b" in each tag's color
    let mut indicator_spans: Vec<Span> = Vec::new();
    let tags = filter_tags(app.selection.filter_text());
    if !tags.is_empty() {
        indicator_spans.push(Span::styled(
            "filter:",
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
        for tag in tags {
            indicator_spans.push(Span::styled(" ", Style::default().bg(bg)));
            indicator_spans.push(Span::styled(
                tag.to_string(),
                Style::default().fg(app.theme.tag_color(tag)).bg(bg),
            ));
        }
    }

    let indicator_width = spans_width(&indicator_spans);
    // +2: one space before indicator, one space after (right edge buffer)
    let separator_end = if indicator_spans.is_empty() {
        width
    } else {
        width.saturating_sub(indicator_width + 2)
    };

    let mut sep_text = String::with_capacity(separator_end * 3);
    for col in 0..separator_end {
        if sep_cols.contains(&col) {
            sep_text.push('\u{2534}');
        } else {
            sep_text.push('\u{2500}');
        }
    }

    let mut spans = vec![Span::styled(sep_text, Style::default().fg(dim).bg(bg))];
    if !indicator_spans.is_empty() {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.extend(indicator_spans);
    }

    let sep_widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(sep_widget, area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}

fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| cell_width(&s.content)).sum()
}
