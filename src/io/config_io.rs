use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the per-directory config file
pub const CONFIG_FILE: &str = ".tuido.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the config. An explicit path must exist; otherwise `<root>/.tuido.toml`
/// is used when present, and defaults when it is not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = root.join(CONFIG_FILE);
            if !path.exists() {
                log::debug!("no {} in {}, using defaults", CONFIG_FILE, root.display());
                return Ok(Config::default());
            }
            path
        }
    };

    let text = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&text).map_err(|source| ConfigError::ParseError {
        path: path.clone(),
        source,
    })?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[scan]
extensions = [".org"]
skip_hidden = true
skip_unreadable = true

[ui]
show_key_hints = false
color_seed = 42

[ui.colors]
highlight = "#FF0000"

[ui.tag_colors]
"#bug" = "#FF4444"
"##
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(sample_config()).unwrap();
        assert_eq!(config.scan.extensions, vec![".org"]);
        assert!(config.scan.skip_hidden);
        assert!(config.scan.skip_unreadable);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.color_seed, Some(42));
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF0000");
        assert_eq!(config.ui.tag_colors.get("#bug").unwrap(), "#FF4444");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.scan.extensions, vec![".md", ".txt", ".xit"]);
        assert!(!config.scan.skip_hidden);
        assert!(!config.scan.skip_unreadable);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.color_seed, None);
    }

    #[test]
    fn test_load_from_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), sample_config()).unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.ui.color_seed, Some(42));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.scan.extensions, vec![".md", ".txt", ".xit"]);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(tmp.path(), Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[scan\nextensions = 3").unwrap();
        let err = load_config(tmp.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
