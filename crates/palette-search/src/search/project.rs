//! Projection of palette colors into the space a search runs in.
//!
//! Axis searches in HSV need each component to mean one thing, so they use
//! the plain `(hue / 360, saturation, value)` triplet instead of the hue
//! cylinder. Every other combination uses the space's regular conversion.

use super::SearchType;
use crate::color::LinearColor;
use crate::palette::Palette;
use crate::space::{convert_linear_to_space, convert_space_to_linear, ColorSpace, Hsv, Vec3};

fn uses_flat_hsv(space: ColorSpace, search_type: SearchType) -> bool {
    space == ColorSpace::Hsv && search_type.axis().is_some()
}

/// Project one color for a search of `search_type` in `space`.
pub fn project_color(color: LinearColor, space: ColorSpace, search_type: SearchType) -> Vec3 {
    if uses_flat_hsv(space, search_type) {
        let hsv = Hsv::from(color);
        Vec3::new(hsv.h / 360.0, hsv.s, hsv.v)
    } else {
        convert_linear_to_space(color, space)
    }
}

/// Project every palette color, keeping index correspondence.
pub fn project_palette(palette: &Palette, space: ColorSpace, search_type: SearchType) -> Vec<Vec3> {
    palette
        .iter()
        .map(|&color| project_color(color, space, search_type))
        .collect()
}

/// Inverse of [`project_color`]. The result is always opaque.
pub fn unproject_color(point: Vec3, space: ColorSpace, search_type: SearchType) -> LinearColor {
    if uses_flat_hsv(space, search_type) {
        Hsv::new(point.x * 360.0, point.y, point.z).to_linear()
    } else {
        convert_space_to_linear(point, space)
    }
}
