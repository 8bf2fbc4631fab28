//! Hex code decoding and binary float helpers used by the palette parsers.

use super::linear::LinearColor;
use super::srgb::Srgb;

/// Decode a hex color code into a linear color.
///
/// Accepts `RRGGBB` or `RRGGBBAA`, with or without a leading `#` and
/// surrounding whitespace. Six digits are opaque.
///
/// Returns `None` for any other length or when a character is not a hex
/// digit.
///
/// # Example
/// ```
/// use palette_search::{parse_hex, LinearColor};
///
/// assert_eq!(parse_hex("#FFFFFF"), Some(LinearColor::WHITE));
/// assert_eq!(parse_hex("#FFF"), None);
/// assert_eq!(parse_hex("zzzzzz"), None);
/// ```
pub fn parse_hex(hex: &str) -> Option<LinearColor> {
    decode(hex, true)
}

/// Decode a hex color code, returning transparent black when the code has
/// the wrong length.
///
/// Unlike [`parse_hex`], a character that is not a hex digit reads as
/// nibble 0. The sentinel is indistinguishable from a valid `#00000000`;
/// use [`parse_hex`] when the difference matters.
///
/// # Example
/// ```
/// use palette_search::{hex_to_color, LinearColor};
///
/// let red = hex_to_color("#FF0000");
/// assert_eq!((red.r, red.g, red.b, red.a), (1.0, 0.0, 0.0, 1.0));
/// assert_eq!(hex_to_color("12"), LinearColor::TRANSPARENT);
/// assert_eq!(hex_to_color("GG0000"), hex_to_color("000000"));
/// ```
pub fn hex_to_color(hex: &str) -> LinearColor {
    decode(hex, false).unwrap_or(LinearColor::TRANSPARENT)
}

fn decode(hex: &str, strict: bool) -> Option<LinearColor> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    let nibbles = hex
        .chars()
        .map(|c| match c.to_digit(16) {
            Some(digit) => Some(digit as u8),
            None if strict => None,
            None => Some(0),
        })
        .collect::<Option<Vec<u8>>>()?;

    let byte = |i: usize| nibbles[i] * 16 + nibbles[i + 1];
    let srgb = match nibbles.len() {
        6 => Srgb::new(byte(0), byte(2), byte(4)),
        8 => Srgb::with_alpha(byte(0), byte(2), byte(4), byte(6)),
        _ => return None,
    };

    Some(LinearColor::from(srgb))
}

/// Reverse the byte order of an IEEE-754 single.
///
/// Reading big-endian payload bytes as little-endian and reversing them
/// yields the intended value on any host.
#[inline]
pub fn reverse_float_bytes(f: f32) -> f32 {
    f32::from_bits(f.to_bits().swap_bytes())
}
