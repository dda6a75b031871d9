use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

/// Colour used for categories a map was not built with.
pub const DEFAULT_COLOR: &str = "#999999";

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct `#rrggbb` colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            let rgb: Srgb<u8> = rgb.into_format();
            format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → colour
// ---------------------------------------------------------------------------

/// Maps the distinct values of a categorical column to distinct colours.
///
/// Built once from the full dataset so a category keeps its colour when
/// filters remove other categories from a chart.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, String>,
}

impl ColorMap {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keys: Vec<String> = categories.into_iter().map(Into::into).collect();
        keys.sort();
        keys.dedup();

        let palette = generate_palette(keys.len());
        ColorMap {
            mapping: keys.into_iter().zip(palette).collect(),
        }
    }

    pub fn color_for(&self, category: &str) -> &str {
        self.mapping
            .get(category)
            .map(String::as_str)
            .unwrap_or(DEFAULT_COLOR)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
