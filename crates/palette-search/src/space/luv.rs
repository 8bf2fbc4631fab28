//! CIE L*u*v* relative to the D65 reference white.

use super::xyz::Xyz;

const REFERENCE_X: f32 = 95.047;
const REFERENCE_Y: f32 = 100.0;
const REFERENCE_Z: f32 = 108.883;

const EPSILON: f32 = 0.008856;
const KAPPA_SLOPE: f32 = 7.787;
const OFFSET: f32 = 16.0 / 116.0;

fn reference_uv() -> (f32, f32) {
    let denominator = REFERENCE_X + 15.0 * REFERENCE_Y + 3.0 * REFERENCE_Z;
    (
        4.0 * REFERENCE_X / denominator,
        9.0 * REFERENCE_Y / denominator,
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Luv {
    pub l: f32,
    pub u: f32,
    pub v: f32,
}

impl Luv {
    #[inline]
    pub fn new(l: f32, u: f32, v: f32) -> Self {
        Self { l, u, v }
    }

    /// Solve for XYZ.
    ///
    /// `L <= 0` is black: the chromaticity terms divide by `13·L`, so the
    /// result is pinned to the origin instead of NaN.
    pub fn to_xyz(self) -> Xyz {
        if self.l <= 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let mut var_y = (self.l + 16.0) / 116.0;
        if var_y.powi(3) > EPSILON {
            var_y = var_y.powi(3);
        } else {
            var_y = (var_y - OFFSET) / KAPPA_SLOPE;
        }

        let (ref_u, ref_v) = reference_uv();
        let var_u = self.u / (13.0 * self.l) + ref_u;
        let var_v = self.v / (13.0 * self.l) + ref_v;

        let y = var_y * 100.0;
        let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

        Xyz::new(x, y, z)
    }
}

impl From<Xyz> for Luv {
    /// A zero chromaticity denominator (XYZ black) gives `u = v = 0`.
    fn from(xyz: Xyz) -> Self {
        let denominator = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        let (var_u, var_v) = if denominator == 0.0 {
            reference_uv()
        } else {
            (4.0 * xyz.x / denominator, 9.0 * xyz.y / denominator)
        };

        let mut var_y = xyz.y / 100.0;
        if var_y > EPSILON {
            var_y = var_y.cbrt();
        } else {
            var_y = KAPPA_SLOPE * var_y + OFFSET;
        }

        let (ref_u, ref_v) = reference_uv();
        let l = 116.0 * var_y - 16.0;
        let u = 13.0 * l * (var_u - ref_u);
        let v = 13.0 * l * (var_v - ref_v);

        Self { l, u, v }
    }
}
