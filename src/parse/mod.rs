pub mod marker;

pub use marker::{is_marker_line, parse_tags, split_marker};
