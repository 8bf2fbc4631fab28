//! HSV and the hue cylinder.
//!
//! HSV is computed directly on linear channels. For distance searches the
//! triplet is folded onto a cylinder: hue is the angle around the Z axis,
//! saturation the radius and value the height, so hues 359° and 1° end up
//! next to each other.

use super::vec3::Vec3;
use crate::color::LinearColor;

/// Hue (degrees, 0.0..360.0), saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Convert back to an opaque linear color.
    ///
    /// Any hue is accepted; it is wrapped into one turn.
    pub fn to_linear(self) -> LinearColor {
        let sector = self.h / 60.0;
        let sector_floor = sector.floor();
        let fraction = sector - sector_floor;

        let values = [
            self.v,
            self.v * (1.0 - self.s),
            self.v * (1.0 - fraction * self.s),
            self.v * (1.0 - (1.0 - fraction) * self.s),
        ];
        const SWIZZLE: [[usize; 3]; 6] = [
            [0, 3, 1],
            [2, 0, 1],
            [1, 0, 3],
            [1, 2, 0],
            [3, 1, 0],
            [0, 1, 2],
        ];

        let index = if sector_floor.is_finite() {
            (sector_floor as i64).rem_euclid(6) as usize
        } else {
            0
        };
        let [r, g, b] = SWIZZLE[index];
        LinearColor::rgb(values[r], values[g], values[b])
    }

    /// Position on the hue cylinder: `(s·cos h, s·sin h, v)`.
    pub fn to_cylinder(self) -> Vec3 {
        let angle = self.h.to_radians();
        Vec3::new(self.s * angle.cos(), self.s * angle.sin(), self.v)
    }

    /// Inverse of [`to_cylinder`](Self::to_cylinder).
    ///
    /// Points on the axis (zero radius) get hue 0.
    pub fn from_cylinder(position: Vec3) -> Self {
        let mut h = position.y.atan2(position.x).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        // atan2 of a tiny negative y can round up to exactly one turn
        if h >= 360.0 {
            h -= 360.0;
        }
        let s = (position.x * position.x + position.y * position.y).sqrt();
        Self::new(h, s, position.z)
    }
}

impl From<LinearColor> for Hsv {
    /// Alpha is dropped.
    fn from(color: LinearColor) -> Self {
        let LinearColor { r, g, b, .. } = color;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let range = max - min;

        let h = if max == min {
            0.0
        } else if max == r {
            (((g - b) / range) * 60.0 + 360.0) % 360.0
        } else if max == g {
            ((b - r) / range) * 60.0 + 120.0
        } else {
            ((r - g) / range) * 60.0 + 240.0
        };
        let s = if max == 0.0 { 0.0 } else { range / max };

        Self::new(h, s, max)
    }
}
