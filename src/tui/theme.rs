use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Status, UiConfig};
use crate::ops::TagColorTable;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub filter_match_bg: Color,
    pub filter_match_fg: Color,
    /// Colors assigned from the hue wheel at startup
    pub assigned_tags: TagColorTable,
    /// User overrides from `[ui.tag_colors]`; these win over assigned colors
    pub tag_overrides: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            filter_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            filter_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            assigned_tags: TagColorTable::default(),
            tag_overrides: HashMap::new(),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config and the startup tag colors
    pub fn from_config(ui: &UiConfig, assigned_tags: TagColorTable) -> Self {
        let mut theme = Theme {
            assigned_tags,
            ..Theme::default()
        };

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring invalid color {} = {:?}", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_border" => theme.selection_border = color,
                "filter_match_bg" => theme.filter_match_bg = color,
                "filter_match_fg" => theme.filter_match_fg = color,
                _ => log::warn!("unknown theme color {}", key),
            }
        }

        // Overrides may be written with or without the leading '#'
        for (tag, value) in &ui.tag_colors {
            if let Some(color) = parse_hex_color(value) {
                let key = if tag.starts_with('#') {
                    tag.clone()
                } else {
                    format!("#{}", tag)
                };
                theme.tag_overrides.insert(key, color);
            }
        }

        theme
    }

    /// Color for a tag: override, then assigned, then the text color
    pub fn tag_color(&self, tag: &str) -> Color {
        self.tag_overrides
            .get(tag)
            .copied()
            .or_else(|| self.assigned_tags.color(tag))
            .unwrap_or(self.text)
    }

    /// Color for a status marker
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Open => self.text,
            Status::Ongoing => self.highlight,
            Status::Checked => self.green,
            Status::Obsolete => self.dim,
        }
    }
}
