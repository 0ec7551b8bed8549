use crate::model::{Item, Status, View};

/// What is currently shown and where the cursor is.
///
/// Owns the full item list. `visible` holds indices into `items` for the
/// entries that match the current view and tag filter, in original order.
#[derive(Debug, Clone)]
pub struct Selection {
    items: Vec<Item>,
    view: View,
    filter_text: String,
    visible: Vec<usize>,
    cursor: usize,
}

impl Selection {
    pub fn new(items: Vec<Item>) -> Self {
        let mut selection = Selection {
            items,
            view: View::Active,
            filter_text: String::new(),
            visible: Vec::new(),
            cursor: 0,
        };
        selection.recompute();
        selection
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Cursor position, `None` when nothing is visible
    pub fn cursor(&self) -> Option<usize> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.cursor)
        }
    }

    /// Indices into `items()` of the visible entries
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible(&self) -> impl Iterator<Item = &Item> + '_ {
        self.visible.iter().map(|&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of items in `view`, ignoring the tag filter
    pub fn count_in(&self, view: View) -> usize {
        self.items
            .iter()
            .filter(|item| view.contains(item.status()))
            .count()
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
        self.recompute();
    }

    pub fn toggle_view(&mut self) {
        self.set_view(self.view.toggle());
    }

    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_text = text.to_string();
        self.recompute();
    }

    /// Move the cursor by `delta`, clamped to the visible range
    pub fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn move_to_top(&mut self) {
        if !self.visible.is_empty() {
            self.cursor = 0;
        }
    }

    pub fn move_to_bottom(&mut self) {
        if !self.visible.is_empty() {
            self.cursor = self.visible.len() - 1;
        }
    }

    pub fn current_item(&self) -> Option<&Item> {
        let idx = *self.visible.get(self.cursor)?;
        self.items.get(idx)
    }

    /// Set the status of the item under the cursor, then recompute the
    /// visible list (the item may leave the current view). Returns the
    /// previous status, or `None` when nothing is selected.
    pub fn set_status_on_current(&mut self, status: Status) -> Option<Status> {
        let idx = *self.visible.get(self.cursor)?;
        let item = self.items.get_mut(idx)?;
        let previous = item.status();
        item.set_status(status);
        self.recompute();
        Some(previous)
    }

    fn recompute(&mut self) {
        let filter_tags = filter_tags(&self.filter_text);
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.view.contains(item.status()))
            .filter(|(_, item)| filter_tags.is_empty() || matches_filter(item, &filter_tags))
            .map(|(i, _)| i)
            .collect();

        if self.cursor + 1 >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }
}

/// Tag tokens in the filter input
pub fn filter_tags(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| word.starts_with('#'))
        .collect()
}

/// An item matches when one of its tags starts with one of the filter tags.
/// A complete tag name also matches longer tags sharing its prefix
/// (`#des` and `#design` both match `#designer`).
pub fn matches_filter(item: &Item, filter_tags: &[&str]) -> bool {
    item.tags()
        .iter()
        .any(|tag| filter_tags.iter().any(|f| tag.starts_with(f)))
}
