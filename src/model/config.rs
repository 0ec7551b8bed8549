use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `.tuido.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path suffixes to scan, matched against the lowercased path
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Skip directories whose name starts with `.`
    #[serde(default)]
    pub skip_hidden: bool,
    /// Skip files that cannot be read instead of aborting the run
    #[serde(default)]
    pub skip_unreadable: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            extensions: default_extensions(),
            skip_hidden: false,
            skip_unreadable: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![".md".into(), ".txt".into(), ".xit".into()]
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Fixed seed for the tag hue offset. Unset = seeded from the clock.
    #[serde(default)]
    pub color_seed: Option<u64>,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            color_seed: None,
            colors: HashMap::new(),
            tag_colors: HashMap::new(),
        }
    }
}
