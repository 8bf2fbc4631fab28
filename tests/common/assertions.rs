//! Assertion helpers for tests.

use palette_search::{LinearColor, Palette, Srgb};
use pretty_assertions::assert_eq;

/// Palette colors as `#RRGGBB`
pub fn hex_colors(palette: &Palette) -> Vec<String> {
    palette.iter().map(|&c| Srgb::from(c).to_hex()).collect()
}

/// Assert a palette's colors, in order
pub fn assert_colors(palette: &Palette, expected: &[&str]) {
    assert_eq!(
        hex_colors(palette),
        expected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        "colors of palette {:?}",
        palette.name()
    );
}

/// Assert two colors are equal after 8-bit encoding, within `tolerance`
/// per channel
pub fn assert_color_near(actual: LinearColor, expected: LinearColor, tolerance: u8) {
    let a = Srgb::from(actual).to_bytes();
    let e = Srgb::from(expected).to_bytes();
    let close = a
        .iter()
        .zip(e.iter())
        .all(|(x, y)| x.abs_diff(*y) <= tolerance);
    assert!(close, "expected {e:?}, got {a:?} (tolerance {tolerance})");
}
