use serde::Serialize;

use crate::parse::marker::{parse_tags, split_marker};

/// Task status, derived from the checkbox marker at scan time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Ongoing,
    Checked,
    Obsolete,
}

impl Status {
    /// Canonical marker used when displaying a task
    pub fn marker(self) -> &'static str {
        match self {
            Status::Open => "[ ]",
            Status::Ongoing => "[@]",
            Status::Checked => "[x]",
            Status::Obsolete => "[~]",
        }
    }

    /// The view this status belongs to
    pub fn view(self) -> View {
        match self {
            Status::Open | Status::Ongoing => View::Active,
            Status::Checked | Status::Obsolete => View::Resolved,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::Ongoing => write!(f, "ongoing"),
            Status::Checked => write!(f, "checked"),
            Status::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Coarse partition of items: what still needs doing vs. what is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Active,
    Resolved,
}

impl View {
    pub fn toggle(self) -> View {
        match self {
            View::Active => View::Resolved,
            View::Resolved => View::Active,
        }
    }

    pub fn contains(self, status: Status) -> bool {
        status.view() == self
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Active => "Active",
            View::Resolved => "Resolved",
        }
    }
}

/// A single task line found in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// File the line was found in, as discovered
    pub source_path: String,
    /// 1-based line number at scan time
    pub line_number: usize,
    /// The line exactly as read
    pub raw_text: String,
    status: Status,
    tags: Vec<String>,
    /// Byte offset in `raw_text` where the text after the marker starts
    #[serde(skip)]
    body_start: usize,
}

impl Item {
    /// Build an item from a marker line. Returns `None` if the line carries no
    /// recognized marker.
    pub fn parse(
        source_path: impl Into<String>,
        line_number: usize,
        raw_text: impl Into<String>,
    ) -> Option<Item> {
        let raw_text = raw_text.into();
        let (status, body_start) = split_marker(&raw_text)?;
        let tags = parse_tags(&raw_text[body_start..]);
        Some(Item {
            source_path: source_path.into(),
            line_number,
            raw_text,
            status,
            tags,
            body_start,
        })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Overwrite the status. Any status may follow any other.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// `#tag` tokens in line order, `#` included, duplicates kept
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Text after the marker, trimmed
    pub fn description(&self) -> &str {
        self.raw_text[self.body_start..].trim()
    }

    /// `path:line` location string
    pub fn location(&self) -> String {
        format!("{}:{}", self.source_path, self.line_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open_item_with_tag() {
        let item = Item::parse("notes.md", 3, "[ ] write spec #design").unwrap();
        assert_eq!(item.status(), Status::Open);
        assert_eq!(item.tags(), ["#design"]);
        assert_eq!(item.line_number, 3);
        assert_eq!(item.source_path, "notes.md");
        assert_eq!(item.description(), "write spec #design");
    }

    #[test]
    fn test_parse_rejects_plain_line() {
        assert!(Item::parse("a.md", 1, "just some prose").is_none());
        assert!(Item::parse("a.md", 1, "").is_none());
        assert!(Item::parse("a.md", 1, "[?] unknown marker").is_none());
    }

    #[test]
    fn test_no_tags_is_empty_not_missing() {
        let item = Item::parse("a.md", 1, "[x] done thing").unwrap();
        assert!(item.tags().is_empty());
    }

    #[test]
    fn test_duplicate_tags_are_kept_in_order() {
        let item = Item::parse("a.md", 1, "[@] #b fix #a stuff #b").unwrap();
        assert_eq!(item.tags(), ["#b", "#a", "#b"]);
    }

    #[test]
    fn test_set_status_any_transition() {
        let mut item = Item::parse("a.md", 1, "[ ] task").unwrap();
        for status in [
            Status::Checked,
            Status::Open,
            Status::Obsolete,
            Status::Ongoing,
            Status::Checked,
        ] {
            item.set_status(status);
            assert_eq!(item.status(), status);
        }
        // raw text is never rewritten
        assert_eq!(item.raw_text, "[ ] task");
    }

    #[test]
    fn test_status_views() {
        assert_eq!(Status::Open.view(), View::Active);
        assert_eq!(Status::Ongoing.view(), View::Active);
        assert_eq!(Status::Checked.view(), View::Resolved);
        assert_eq!(Status::Obsolete.view(), View::Resolved);
        assert!(View::Resolved.contains(Status::Obsolete));
        assert!(!View::Active.contains(Status::Checked));
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(View::Active.toggle(), View::Resolved);
        assert_eq!(View::Resolved.toggle(), View::Active);
        assert_eq!(View::default(), View::Active);
    }

    #[test]
    fn test_location() {
        let item = Item::parse("docs/todo.txt", 12, "- [~] dropped").unwrap();
        assert_eq!(item.location(), "docs/todo.txt:12");
        assert_eq!(item.description(), "dropped");
    }
}
