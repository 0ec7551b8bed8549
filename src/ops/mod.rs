pub mod selection;
pub mod tag_colors;

pub use selection::Selection;
pub use tag_colors::{TagColorTable, assign_tag_colors};
