//! CIE XYZ (D65, 2° observer) from 8-bit sRGB.
//!
//! Tristimulus values are on the 0..100 scale (white Y = 100).

use crate::color::Srgb;

/// sRGB primaries to XYZ, rows X, Y, Z.
pub(crate) const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// Inverse of [`SRGB_TO_XYZ`], rows R, G, B.
pub(crate) const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

const DECODE_THRESHOLD: f32 = 0.04045;
const ENCODE_THRESHOLD: f32 = 0.0031308;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

fn decode_channel(byte: u8) -> f32 {
    let c = byte as f32 / 255.0;
    let linear = if c > DECODE_THRESHOLD {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    };
    linear * 100.0
}

fn encode_channel(linear: f32) -> u8 {
    let c = if linear > ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * linear
    };
    // Truncates toward zero; `as` saturates out-of-range and maps NaN to 0
    (c * 255.0) as u8
}

fn mul(matrix: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    let row = |r: &[f32; 3]| r[0] * v[0] + r[1] * v[1] + r[2] * v[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

impl Xyz {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert back to opaque 8-bit sRGB.
    ///
    /// Channels are truncated, not rounded, so a round trip through XYZ may
    /// lose one code value.
    pub fn to_srgb(self) -> Srgb {
        let [r, g, b] = mul(
            &XYZ_TO_SRGB,
            [self.x / 100.0, self.y / 100.0, self.z / 100.0],
        );
        Srgb::new(encode_channel(r), encode_channel(g), encode_channel(b))
    }
}

impl From<Srgb> for Xyz {
    /// Alpha is ignored.
    fn from(srgb: Srgb) -> Self {
        let linear = [
            decode_channel(srgb.r),
            decode_channel(srgb.g),
            decode_channel(srgb.b),
        ];
        let [x, y, z] = mul(&SRGB_TO_XYZ, linear);
        Self { x, y, z }
    }
}
