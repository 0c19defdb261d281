use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Species → Color32
// ---------------------------------------------------------------------------

/// The customary palmerpenguins colours: darkorange, purple, cyan4.
pub const SPECIES_COLORS: [(&str, Color32); 3] = [
    ("Adelie", Color32::from_rgb(255, 140, 0)),
    ("Chinstrap", Color32::from_rgb(160, 32, 240)),
    ("Gentoo", Color32::from_rgb(0, 139, 139)),
];

fn fixed_color(species: &str) -> Option<Color32> {
    SPECIES_COLORS
        .iter()
        .find(|(name, _)| *name == species)
        .map(|&(_, c)| c)
}

/// Stable species colours shared by the checkboxes, scatter plot and grid.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// The three known species keep their fixed colours. Any other label gets
    /// a palette colour in order of first appearance.
    pub fn new<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mapping = BTreeMap::new();
        let mut others: Vec<&str> = Vec::new();
        for label in labels {
            match fixed_color(label) {
                Some(c) => {
                    mapping.insert(label.to_string(), c);
                }
                None if !others.contains(&label) => others.push(label),
                None => {}
            }
        }
        mapping.extend(
            others
                .iter()
                .zip(generate_palette(others.len()))
                .map(|(label, c)| (label.to_string(), c)),
        );

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, species: &str) -> Color32 {
        self.mapping
            .get(species)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn known_species_have_fixed_colours() {
        let forward = ColorMap::new(["Adelie", "Gentoo", "Chinstrap"]);
        let reversed = ColorMap::new(["Chinstrap", "Gentoo", "Adelie"]);
        for (species, colour) in SPECIES_COLORS {
            assert_eq!(forward.color_for(species), colour);
            assert_eq!(reversed.color_for(species), colour);
        }
        assert_eq!(forward.color_for("Emperor"), Color32::GRAY);
    }

    #[test]
    fn other_labels_follow_first_appearance() {
        let cm = ColorMap::new(["Emperor", "Adelie", "King", "Emperor"]);
        let palette = generate_palette(2);
        assert_eq!(cm.color_for("Emperor"), palette[0]);
        assert_eq!(cm.color_for("King"), palette[1]);
        assert_eq!(cm.color_for("Adelie"), SPECIES_COLORS[0].1);
    }
}
