//! Color-space conversions.
//!
//! | Space | Components | Computed from |
//! |-------|------------|---------------|
//! | [`ColorSpace::Rgb`] | linear r, g, b | [`LinearColor`] directly |
//! | [`ColorSpace::Hsv`] | hue cylinder x, y, value | [`LinearColor`] via [`Hsv`] |
//! | [`ColorSpace::Xyz`] | X, Y, Z (0..100) | 8-bit [`Srgb`] |
//! | [`ColorSpace::Cieluv`] | L*, u*, v* | 8-bit [`Srgb`] via [`Xyz`] |
//!
//! XYZ and CIELUV go through the byte form, so their inverses are only exact
//! to one code value per channel.

mod hsv;
mod luv;
mod vec3;
mod xyz;

use std::fmt;
use std::str::FromStr;

use crate::color::{LinearColor, Srgb};

pub use hsv::Hsv;
pub use luv::Luv;
pub use vec3::{Axis, Vec3};
pub use xyz::Xyz;

#[cfg(test)]
pub(crate) use xyz::{SRGB_TO_XYZ, XYZ_TO_SRGB};

/// The space colors are projected into before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsv,
    Xyz,
    Cieluv,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Xyz,
        ColorSpace::Cieluv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Xyz => "xyz",
            ColorSpace::Cieluv => "cieluv",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a color space or search type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    /// What was being parsed ("color space", "search type")
    pub kind: &'static str,
    /// The rejected input
    pub name: String,
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.name)
    }
}

impl std::error::Error for ParseNameError {}

impl FromStr for ColorSpace {
    type Err = ParseNameError;

    /// Case-insensitive; `luv` is accepted for CIELUV.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "hsv" => Ok(ColorSpace::Hsv),
            "xyz" => Ok(ColorSpace::Xyz),
            "cieluv" | "luv" => Ok(ColorSpace::Cieluv),
            _ => Err(ParseNameError {
                kind: "color space",
                name: s.to_string(),
            }),
        }
    }
}

/// Project a linear color into `space`. Alpha is dropped.
pub fn convert_linear_to_space(color: LinearColor, space: ColorSpace) -> Vec3 {
    match space {
        ColorSpace::Rgb => Vec3::new(color.r, color.g, color.b),
        ColorSpace::Hsv => Hsv::from(color).to_cylinder(),
        ColorSpace::Xyz => {
            let xyz = Xyz::from(Srgb::from(color));
            Vec3::new(xyz.x, xyz.y, xyz.z)
        }
        ColorSpace::Cieluv => {
            let luv = Luv::from(Xyz::from(Srgb::from(color)));
            Vec3::new(luv.l, luv.u, luv.v)
        }
    }
}

/// Inverse of [`convert_linear_to_space`]. The result is always opaque.
pub fn convert_space_to_linear(point: Vec3, space: ColorSpace) -> LinearColor {
    match space {
        ColorSpace::Rgb => LinearColor::rgb(point.x, point.y, point.z),
        ColorSpace::Hsv => Hsv::from_cylinder(point).to_linear(),
        ColorSpace::Xyz => LinearColor::from(Xyz::new(point.x, point.y, point.z).to_srgb()),
        ColorSpace::Cieluv => {
            LinearColor::from(Luv::new(point.x, point.y, point.z).to_xyz().to_srgb())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_colors() -> Vec<LinearColor> {
        [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (12, 200, 180),
            (128, 128, 128),
            (250, 240, 10),
            (40, 20, 90),
            (255, 255, 255),
            (0, 0, 0),
        ]
        .into_iter()
        .map(|(r, g, b)| LinearColor::from(Srgb::new(r, g, b)))
        .collect()
    }

    #[test]
    fn test_rgb_and_hsv_round_trip() {
        for space in [ColorSpace::Rgb, ColorSpace::Hsv] {
            for color in sample_colors() {
                let back = convert_space_to_linear(convert_linear_to_space(color, space), space);
                for (a, b) in [(color.r, back.r), (color.g, back.g), (color.b, back.b)] {
                    assert!((a - b).abs() < 1e-3, "{space}: {color:?} -> {back:?}");
                }
                assert_eq!(back.a, 1.0);
            }
        }
    }

    #[test]
    fn test_xyz_and_luv_round_trip_within_one_step() {
        for space in [ColorSpace::Xyz, ColorSpace::Cieluv] {
            for color in sample_colors() {
                let back = convert_space_to_linear(convert_linear_to_space(color, space), space);
                let original = Srgb::from(color).to_bytes();
                let returned = Srgb::from(back).to_bytes();
                for (o, n) in original.into_iter().zip(returned) {
                    assert!(
                        (o as i32 - n as i32).abs() <= 1,
                        "{space}: {original:?} came back as {returned:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rgb_space_is_identity() {
        let color = LinearColor::new(0.25, 1.5, -0.1, 0.3);
        assert_eq!(
            convert_linear_to_space(color, ColorSpace::Rgb),
            Vec3::new(0.25, 1.5, -0.1)
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("HSV".parse::<ColorSpace>(), Ok(ColorSpace::Hsv));
        assert_eq!("luv".parse::<ColorSpace>(), Ok(ColorSpace::Cieluv));
        assert_eq!(" xyz ".parse::<ColorSpace>(), Ok(ColorSpace::Xyz));
        let err = "lab".parse::<ColorSpace>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color space: \"lab\"");

        for space in ColorSpace::ALL {
            assert_eq!(space.to_string().parse::<ColorSpace>(), Ok(space));
        }
    }
}
