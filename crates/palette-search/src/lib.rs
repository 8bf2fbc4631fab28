#![allow(clippy::excessive_precision, clippy::module_inception)]

//! palette-search: palette file parsing and bracketing color search
//!
//! This library reads artist palettes from common palette file formats and
//! maps an arbitrary color onto two palette colors plus a blend factor. The
//! pair "brackets" the input, so a shader or quantizer can dither or blend
//! between them.
//!
//! # Quick Start
//!
//! ```
//! use palette_search::{
//!     find_closest, hex_to_color, parse_palette, project_color, project_palette,
//!     unproject_color, ColorSpace, SearchType, Srgb,
//! };
//!
//! let text = "#000000\n#808080\n#FFFFFF\n";
//! let palette = parse_palette(text, text.as_bytes(), "grays.hex").unwrap();
//!
//! let space = ColorSpace::Rgb;
//! let search = SearchType::ClosestOffset;
//! let points = project_palette(&palette, space, search);
//! let target = project_color(hex_to_color("#A0A0A0"), space, search);
//!
//! let bracket = find_closest(&points, target, search, space).unwrap();
//! let a = Srgb::from(unproject_color(bracket.color_a, space, search));
//! let b = Srgb::from(unproject_color(bracket.color_b, space, search));
//! assert_eq!(a.to_hex(), "#808080");
//! assert_eq!(b.to_hex(), "#FFFFFF");
//! assert!((0.0..=1.0).contains(&bracket.blend));
//! ```
//!
//! # Data Flow
//!
//! ```text
//! file bytes / text
//!     |
//!     v
//! Palette            (format sniffed from line 0, colors deduplicated)
//!     |
//!     v
//! Vec<Vec3>          (project_palette: RGB, HSV cylinder, XYZ or CIELUV)
//!     |
//!     v
//! Bracket            (find_closest: offset, line or single-axis search)
//!     |
//!     v
//! LinearColor x 2    (unproject_color) + blend
//! ```
//!
//! # Supported Formats
//!
//! | Format | Signature on line 0 | Content |
//! |--------|---------------------|---------|
//! | JASC-PAL | `JASC` | `R G B` per line after a 3-line header |
//! | GIMP | `GIMP` | `R G B [name]`, `#` comments |
//! | paint.net | `paint.net` | `AARRGGBB`, `;` comments |
//! | Adobe Swatch Exchange | `ASEF` | `"#RRGGBB"` swatch names, else `RGB ` float blocks |
//! | Hex list | anything else | one `#RRGGBB` or `#RRGGBBAA` per line |
//!
//! # Color Representation
//!
//! - [`Srgb`]: 8-bit gamma-encoded, the form files are written in
//! - [`LinearColor`]: linear f32 RGBA, the form palettes store
//!
//! RGB and HSV search spaces work on [`LinearColor`] directly. XYZ and
//! CIELUV work on the 8-bit form, so inverting them is exact to one code
//! value.

pub mod color;
pub mod palette;
pub mod search;
pub mod space;


pub use color::{hex_to_color, parse_hex, reverse_float_bytes, LinearColor, Srgb};
pub use palette::{
    load_palette, palette_name_from_path, parse_palette, Palette, PaletteError, PaletteFormat,
};
pub use search::{
    find_closest, find_closest_and_offset, find_closest_line, find_closest_on_axis,
    project_color, project_palette, unproject_color, Bracket, SearchError, SearchType,
};
pub use space::{
    convert_linear_to_space, convert_space_to_linear, Axis, ColorSpace, Hsv, Luv,
    ParseNameError, Vec3, Xyz,
};
