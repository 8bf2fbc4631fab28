//! Error type for palette loading

use std::fmt;
use std::io;

/// Error returned when a palette file cannot be loaded.
#[derive(Debug)]
pub enum PaletteError {
    /// The file could not be read
    Io(io::Error),
    /// The content has no non-blank lines
    EmptyContent,
}

impl From<io::Error> for PaletteError {
    fn from(err: io::Error) -> Self {
        PaletteError::Io(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Io(err) => write!(f, "cannot read palette file: {}", err),
            PaletteError::EmptyContent => write!(f, "palette file is empty"),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::Io(err) => Some(err),
            PaletteError::EmptyContent => None,
        }
    }
}
