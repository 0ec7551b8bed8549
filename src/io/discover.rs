use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::io::scan::ScanError;
use crate::model::ScanConfig;

/// Walk `root` and collect files whose lowercased path ends with one of the
/// configured suffixes. Entries that cannot be read are skipped with a
/// warning; only an unreadable root aborts.
pub fn discover_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotADirectory(root.to_path_buf()));
    }
    // Surface permission errors on the root itself instead of skipping them
    std::fs::read_dir(root).map_err(|source| ScanError::ReadDir {
        path: root.to_path_buf(),
        source,
    })?;

    let suffixes: Vec<String> = config
        .extensions
        .iter()
        .map(|ext| ext.to_lowercase())
        .collect();

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(config.skip_hidden && is_hidden_dir(entry)));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if has_suffix(entry.path(), &suffixes) {
            files.push(entry.into_path());
        }
    }

    log::info!("discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Whether the lowercased path ends with one of `suffixes` (already lowercase)
pub fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    let lowered = path.to_string_lossy().to_lowercase();
    suffixes.iter().any(|s| lowered.ends_with(s.as_str()))
}

fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
