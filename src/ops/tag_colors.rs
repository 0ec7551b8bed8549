use std::collections::HashMap;

use rand::Rng;
use ratatui::style::Color;

use crate::model::Item;

/// Saturation used for every tag color
const SATURATION: f64 = 0.65;
/// Lightness used for every tag color; bright enough for a dark background
const LIGHTNESS: f64 = 0.62;

/// One tag's assigned color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagColor {
    /// Hue in degrees, `0.0..360.0`
    pub hue: f64,
    pub color: Color,
}

/// Colors for every tag found in the item set. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct TagColorTable {
    entries: HashMap<String, TagColor>,
}

impl TagColorTable {
    pub fn get(&self, tag: &str) -> Option<&TagColor> {
        self.entries.get(tag)
    }

    pub fn color(&self, tag: &str) -> Option<Color> {
        self.entries.get(tag).map(|c| c.color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TagColor)> {
        self.entries.iter()
    }
}

/// Spread tag colors evenly around the hue wheel.
///
/// Every tag occurrence takes a slot, so 360° is divided by the total number
/// of occurrences. A tag gets the hue of the slot of its last occurrence,
/// shifted by a random offset drawn once from `rng`.
pub fn assign_tag_colors<R: Rng>(items: &[Item], rng: &mut R) -> TagColorTable {
    let slots: Vec<&String> = items.iter().flat_map(|item| item.tags()).collect();
    let mut entries = HashMap::new();
    if slots.is_empty() {
        return TagColorTable { entries };
    }

    let offset: f64 = rng.gen_range(0.0..360.0);
    let interval = 360.0 / slots.len() as f64;

    for (i, tag) in slots.into_iter().enumerate() {
        let hue = (offset + i as f64 * interval) % 360.0;
        entries.insert(
            tag.clone(),
            TagColor {
                hue,
                color: hsl_to_rgb(hue, SATURATION, LIGHTNESS),
            },
        );
    }

    log::debug!("assigned colors to {} tags", entries.len());
    TagColorTable { entries }
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`) to an RGB
/// color, clamping each channel to `0..=255`.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
