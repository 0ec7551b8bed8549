//! Cell widths and caret movement for task descriptions and the filter input.
//!
//! Widths use the same grapheme rules ratatui lays text out with, so a fitted
//! description lines up with the right-aligned location column.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '\u{2026}';

/// Terminal cells taken by `s`
pub fn cell_width(s: &str) -> usize {
    s.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Cut `s` down to `max_cells`, ending with `…` when anything was dropped.
/// A wide grapheme that would straddle the limit is dropped whole.
pub fn fit_to_cells(s: &str, max_cells: usize) -> String {
    if cell_width(s) <= max_cells {
        return s.to_string();
    }
    let Some(budget) = max_cells.checked_sub(1) else {
        return String::new();
    };

    let mut used = 0;
    let mut fitted: String = s
        .graphemes(true)
        .take_while(|g| {
            used += g.width();
            used <= budget
        })
        .collect();
    fitted.push(ELLIPSIS);
    fitted
}

/// Byte offset of the grapheme after the caret at `at`, or `None` at the end
pub fn grapheme_after(s: &str, at: usize) -> Option<usize> {
    s.get(at..)?
        .graphemes(true)
        .next()
        .map(|g| at + g.len())
}

/// Byte offset of the grapheme before the caret at `at`, or `None` at the start
pub fn grapheme_before(s: &str, at: usize) -> Option<usize> {
    s.get(..at)?
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the whitespace-delimited token left of `at`, skipping any
/// whitespace directly before the caret. Ctrl+W deletes from here to `at`.
pub fn token_start_before(s: &str, at: usize) -> usize {
    let head = s.get(..at).unwrap_or(s).trim_end();
    head.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}
