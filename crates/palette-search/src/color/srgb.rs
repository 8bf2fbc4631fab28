//! 8-bit sRGB color type
//!
//! sRGB is the encoding palette files are written in. Every palette entry
//! passes through this form once on its way to [`LinearColor`].

use super::linear::LinearColor;
use super::lut::linear_to_srgb;

/// A color in 8-bit-per-channel sRGB encoding, with straight alpha.
///
/// This is the byte form used by palette files and by the XYZ/CIELUV
/// conversions, which operate on gamma-encoded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: u8,
    /// Green channel (gamma-encoded)
    pub g: u8,
    /// Blue channel (gamma-encoded)
    pub b: u8,
    /// Alpha channel (linear coverage)
    pub a: u8,
}

impl Srgb {
    /// Create an opaque sRGB color.
    ///
    /// # Example
    /// ```
    /// use palette_search::Srgb;
    /// let red = Srgb::new(255, 0, 0);
    /// assert_eq!(red.a, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an sRGB color with an explicit alpha.
    #[inline]
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B], dropping alpha.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Render as `#RRGGBB`, or `#RRGGBBAA` when the color is not opaque.
    ///
    /// # Example
    /// ```
    /// use palette_search::Srgb;
    /// assert_eq!(Srgb::new(255, 128, 0).to_hex(), "#FF8000");
    /// assert_eq!(Srgb::with_alpha(0, 0, 0, 0).to_hex(), "#00000000");
    /// ```
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Quantize a 0.0..=1.0 value to a byte, rounding to nearest.
#[inline]
fn quantize(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<LinearColor> for Srgb {
    /// Gamma-encode a linear color and round each channel to 8 bits.
    ///
    /// Channels outside 0.0..=1.0 saturate.
    fn from(linear: LinearColor) -> Self {
        Self {
            r: quantize(linear_to_srgb(linear.r)),
            g: quantize(linear_to_srgb(linear.g)),
            b: quantize(linear_to_srgb(linear.b)),
            a: quantize(if linear.a.is_nan() { 0.0 } else { linear.a }),
        }
    }
}
