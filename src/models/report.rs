//! Serializable views printed by the CLI (`--json`)

use palette_search::{ColorSpace, LinearColor, Palette, SearchType, Srgb};
use serde::Serialize;

use crate::services::MatchResult;

fn hex(color: LinearColor) -> String {
    Srgb::from(color).to_hex()
}

/// Summary of a loaded palette
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaletteReport {
    pub name: String,
    /// `None` for palettes not read from a file
    pub format: Option<&'static str>,
    pub count: usize,
    /// Colors as `#RRGGBB`, in file order
    pub colors: Vec<String>,
}

impl From<&Palette> for PaletteReport {
    fn from(palette: &Palette) -> Self {
        Self {
            name: palette.name().to_string(),
            format: palette.format().map(|f| f.name()),
            count: palette.len(),
            colors: palette.iter().copied().map(hex).collect(),
        }
    }
}

/// One bracketing search and its outcome
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchReport {
    pub palette: String,
    pub space: &'static str,
    pub search: &'static str,
    pub target: String,
    pub color_a: String,
    pub color_b: String,
    pub index_a: usize,
    pub index_b: usize,
    pub blend: f32,
    pub collapsed: bool,
}

impl MatchReport {
    pub fn new(
        palette: &Palette,
        space: ColorSpace,
        search: SearchType,
        result: &MatchResult,
    ) -> Self {
        Self {
            palette: palette.name().to_string(),
            space: space.name(),
            search: search.name(),
            target: hex(result.target),
            color_a: hex(result.color_a),
            color_b: hex(result.color_b),
            index_a: result.index_a,
            index_b: result.index_b,
            blend: result.blend,
            collapsed: result.is_collapsed(),
        }
    }
}
