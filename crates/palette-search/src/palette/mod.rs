//! Palette types and file parsing
//!
//! A [`Palette`] is read from one file. The format is sniffed from the first
//! line of content (never from the extension) by [`PaletteFormat::detect`],
//! then the matching line or byte parser fills the palette.

mod error;
mod format;
mod load;
mod palette;
mod parse;

pub use error::PaletteError;
pub use format::PaletteFormat;
pub use load::{load_palette, palette_name_from_path};
pub use palette::Palette;
pub use parse::parse_palette;
