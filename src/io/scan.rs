use std::fs;
use std::path::{Path, PathBuf};

use crate::io::discover::discover_files;
use crate::model::{Item, ScanConfig};
use crate::parse::is_marker_line;

/// Error type for startup scanning
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{0} is not a directory")]
    RootNotADirectory(PathBuf),
    #[error("could not read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Marker lines in `text`, as `(line_number, raw_text)` pairs in file order.
/// Line numbers are 1-based.
pub fn scan_lines(text: &str) -> Vec<(usize, String)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_marker_line(line))
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

/// Read a file and return its marker lines. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn scan_file(path: &Path) -> Result<Vec<(usize, String)>, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_lines(&String::from_utf8_lossy(&bytes)))
}

/// Discover, read and parse every task under `root`.
///
/// Source paths are stored relative to `root` when possible.
pub fn load_items(root: &Path, config: &ScanConfig) -> Result<Vec<Item>, ScanError> {
    let files = discover_files(root, config)?;
    let mut items = Vec::new();

    for path in &files {
        let lines = match scan_file(path) {
            Ok(lines) => lines,
            Err(err) if config.skip_unreadable => {
                log::warn!("{}", err);
                continue;
            }
            Err(err) => return Err(err),
        };
        if lines.is_empty() {
            continue;
        }

        let display = display_path(root, path);
        log::debug!("{}: {} tasks", display, lines.len());
        items.extend(
            lines
                .into_iter()
                .filter_map(|(line_number, raw)| Item::parse(display.clone(), line_number, raw)),
        );
    }

    log::info!("loaded {} tasks from {} files", items.len(), files.len());
    Ok(items)
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
