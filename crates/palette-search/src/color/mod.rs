//! Color types and hex/binary decoding.
//!
//! Palette entries are held as [`LinearColor`]; [`Srgb`] is the 8-bit
//! gamma-encoded form they are read from.
//!
//! # Example
//!
//! ```
//! use palette_search::{LinearColor, Srgb};
//!
//! let srgb = Srgb::new(128, 64, 32);
//! let linear = LinearColor::from(srgb);
//! assert_eq!(Srgb::from(linear), srgb);
//! ```

mod codec;
mod linear;
mod lut;
mod srgb;

pub use codec::{hex_to_color, parse_hex, reverse_float_bytes};
pub use linear::LinearColor;
pub use srgb::Srgb;
