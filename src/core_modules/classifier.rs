// THEORY:
// The classifier answers one question: which palette entry does this color look
// most like? Distance is the mean squared error over the three channels,
//
//     mse = ((r1 - r2)^2 + (g1 - g2)^2 + (b1 - b2)^2) / 3
//
// computed in `f64`. The scan is a single pass with a strict `<` comparison, so
// among entries at the same distance the first one in palette order wins. An empty
// palette is an error rather than "no match".

use crate::core_modules::palette::{Palette, PaletteEntry};
use crate::core_modules::pixel::pixel::Pixel;
use crate::error::{ColorError, Result};
use tracing::trace;

pub type Distance = f64;

/// The closest palette entry to a sample and how far away it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'p> {
    pub entry: &'p PaletteEntry,
    pub distance: Distance,
}

/// Mean squared error between two colors; alpha is ignored.
pub fn mean_squared_error(sample: &Pixel, reference: &Pixel) -> Distance {
    let delta = |a: u8, b: u8| {
        let difference = a as i32 - b as i32;
        (difference * difference) as Distance
    };
    (delta(sample.red, reference.red)
        + delta(sample.green, reference.green)
        + delta(sample.blue, reference.blue))
        / 3.0
}

/// Finds the palette entry nearest to `sample`.
pub fn classify<'p>(sample: &Pixel, palette: &'p Palette) -> Result<Classification<'p>> {
    let mut best: Option<Classification<'p>> = None;

    for entry in palette {
        let distance = mean_squared_error(sample, &entry.color);
        trace!(name = %entry.name, distance, "palette candidate");
        if best.as_ref().is_none_or(|current| distance < current.distance) {
            best = Some(Classification { entry, distance });
        }
    }

    best.ok_or(ColorError::EmptyPalette)
}

/// The `count` nearest entries in ascending distance. Ties keep palette order.
pub fn rank<'p>(sample: &Pixel, palette: &'p Palette, count: usize) -> Vec<Classification<'p>> {
    let mut ranked: Vec<Classification<'p>> = palette
        .iter()
        .map(|entry| Classification {
            distance: mean_squared_error(sample, &entry.color),
            entry,
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> Palette {
        Palette::new(vec![
            PaletteEntry::new("Red", 255, 0, 0),
            PaletteEntry::new("Green", 0, 255, 0),
            PaletteEntry::new("Blue", 0, 0, 255),
        ])
    }

    #[test]
    fn mse_matches_the_formula() {
        let a = Pixel::rgb(10, 20, 30);
        let b = Pixel::rgb(13, 16, 30);
        assert_eq!(mean_squared_error(&a, &b), (9.0 + 16.0) / 3.0);
        assert_eq!(mean_squared_error(&a, &a), 0.0);
        assert_eq!(mean_squared_error(&Pixel::rgb(0, 0, 0), &Pixel::rgb(255, 255, 255)), 65025.0);
    }

    #[test]
    fn picks_the_nearest_entry() {
        let palette = primaries();
        let result = classify(&Pixel::rgb(200, 30, 40), &palette).unwrap();
        assert_eq!(result.entry.name, "Red");
        assert_eq!(result.distance, (55.0 * 55.0 + 30.0 * 30.0 + 40.0 * 40.0) / 3.0);
    }

    #[test]
    fn classification_is_repeatable() {
        let palette = Palette::basic();
        let sample = Pixel::rgb(123, 45, 67);
        let first = classify(&sample, &palette).unwrap();
        let second = classify(&sample, &palette).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn first_entry_wins_a_tie() {
        // Mid gray is equidistant from both entries.
        let palette = Palette::new(vec![
            PaletteEntry::new("First", 128, 128, 10),
            PaletteEntry::new("Second", 128, 128, 246),
        ]);
        let sample = Pixel::rgb(128, 128, 128);
        assert_eq!(classify(&sample, &palette).unwrap().entry.name, "First");

        let reversed = Palette::new(palette.iter().rev().cloned().collect());
        assert_eq!(classify(&sample, &reversed).unwrap().entry.name, "Second");
    }

    #[test]
    fn duplicate_colors_resolve_to_the_earlier_name() {
        // Aqua and Cyan share #00FFFF in the basic table; Aqua comes first.
        let palette = Palette::basic();
        let result = classify(&Pixel::rgb(0, 255, 255), &palette).unwrap();
        assert_eq!(result.entry.name, "Aqua");
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn empty_palette_is_an_error() {
        assert!(matches!(
            classify(&Pixel::rgb(1, 2, 3), &Palette::empty()),
            Err(ColorError::EmptyPalette)
        ));
    }

    #[test]
    fn rank_orders_by_distance_and_truncates() {
        let palette = primaries();
        let ranked = rank(&Pixel::rgb(10, 200, 120), &palette, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].entry.name, "Green");
        assert_eq!(ranked[1].entry.name, "Blue");
        assert!(ranked[0].distance <= ranked[1].distance);
        assert!(rank(&Pixel::rgb(0, 0, 0), &Palette::empty(), 3).is_empty());
    }

    #[test]
    fn shades_report_a_category() {
        let palette = Palette::shades();
        let result = classify(&Pixel::rgb(0xDC, 0x14, 0x3C), &palette).unwrap();
        assert_eq!(result.entry.name, "crimson");
        assert_eq!(result.entry.category.as_deref(), Some("red"));
    }
}
