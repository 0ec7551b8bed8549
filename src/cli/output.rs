use serde::Serialize;

use crate::model::{Item, Status};

/// JSON shape of one item in `tuido list --json`
#[derive(Serialize)]
pub struct ItemJson<'a> {
    pub path: &'a str,
    pub line: usize,
    pub status: Status,
    pub description: &'a str,
    pub tags: &'a [String],
}

pub fn item_to_json(item: &Item) -> ItemJson<'_> {
    ItemJson {
        path: &item.source_path,
        line: item.line_number,
        status: item.status(),
        description: item.description(),
        tags: item.tags(),
    }
}

/// `path:line [m] description`
pub fn format_item_line(item: &Item) -> String {
    format!(
        "{} {} {}",
        item.location(),
        item.status().marker(),
        item.description()
    )
}
