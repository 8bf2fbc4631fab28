//! Linear RGBA color type
//!
//! `LinearColor` is the working representation of a palette entry. Palette
//! equality and the RGB search space both operate on these values.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB with straight alpha.
///
/// Channels are typically in 0.0..=1.0 but are never clamped; conversions
/// that need bytes saturate at that point instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearColor {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
    /// Alpha channel
    pub a: f32,
}

impl LinearColor {
    /// Fully transparent black. Also the failure sentinel of
    /// [`hex_to_color`](crate::hex_to_color).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from linear channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from linear channel values.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns true when alpha is zero.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl From<Srgb> for LinearColor {
    /// Decode sRGB bytes through the gamma lookup table. Alpha is linear.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb8_to_linear(srgb.r),
            g: srgb8_to_linear(srgb.g),
            b: srgb8_to_linear(srgb.b),
            a: srgb.a as f32 / 255.0,
        }
    }
}
