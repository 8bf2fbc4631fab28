use palette_search::{PaletteError, ParseNameError, SearchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("Invalid option: {0}")]
    InvalidOption(#[from] ParseNameError),

    #[error("Invalid color: {0:?} (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),

    #[error("Palette {name:?} has {count} colors, at least 2 are needed to bracket")]
    TooFewColors { name: String, count: usize },

    #[error("Palette not found: {0}")]
    PaletteNotFound(String),

    #[error("No palette selected")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
