use palette_search::{
    find_closest, load_palette, parse_hex, parse_palette, project_color, project_palette,
    unproject_color, ColorSpace, LinearColor, Palette, SearchType, Vec3,
};
use std::io;
use std::path::Path;

use crate::assets::AssetLoader;
use crate::error::AppError;
use crate::services::file_chooser::FileChooser;

/// Load a palette file from disk
pub fn load_palette_file(path: &Path) -> Result<Palette, AppError> {
    let palette = load_palette(path)?;
    log_loaded(&palette, &path.display().to_string());
    Ok(palette)
}

/// Load a palette by file name from the palettes directory or the embedded
/// samples
pub fn load_named_palette(loader: &AssetLoader, name: &str) -> Result<Palette, AppError> {
    let bytes = loader.read_palette(name).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::PaletteNotFound(name.to_string()),
        _ => AppError::Io(e),
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let palette = parse_palette(&text, &bytes, name)?;
    log_loaded(&palette, name);
    Ok(palette)
}

/// Ask `chooser` for a palette file and load it
pub fn choose_palette(
    chooser: &mut dyn FileChooser,
    extensions: &[String],
) -> Result<Palette, AppError> {
    let Some(path) = chooser.choose("Select a palette file", extensions) else {
        tracing::debug!("Palette selection cancelled");
        return Err(AppError::Cancelled);
    };
    load_palette_file(&path)
}

/// Parse a `#RRGGBB` / `#RRGGBBAA` command-line color
pub fn parse_color(hex: &str) -> Result<LinearColor, AppError> {
    parse_hex(hex).ok_or_else(|| AppError::InvalidColor(hex.to_string()))
}

fn log_loaded(palette: &Palette, source: &str) {
    let format = palette.format().map(|f| f.name()).unwrap_or("memory");
    tracing::info!(
        source,
        name = palette.name(),
        format,
        colors = palette.len(),
        "Loaded palette"
    );
    if palette.is_empty() {
        tracing::warn!(source, "Palette has no readable colors");
    }
}

/// Outcome of matching one color against a palette
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub target: LinearColor,
    pub color_a: LinearColor,
    pub color_b: LinearColor,
    /// Palette indices of the two bracket colors
    pub index_a: usize,
    pub index_b: usize,
    pub blend: f32,
}

impl MatchResult {
    /// Both bracket colors are the same palette entry
    pub fn is_collapsed(&self) -> bool {
        self.index_a == self.index_b
    }
}

/// A palette projected once for repeated bracketing searches
pub struct PaletteMatcher {
    palette: Palette,
    points: Vec<Vec3>,
    space: ColorSpace,
    search_type: SearchType,
}

impl PaletteMatcher {
    /// Project `palette` into `space`.
    ///
    /// Palettes with fewer than two colors cannot bracket anything and are
    /// rejected.
    pub fn new(
        palette: Palette,
        space: ColorSpace,
        search_type: SearchType,
    ) -> Result<Self, AppError> {
        if palette.len() < 2 {
            return Err(AppError::TooFewColors {
                name: palette.name().to_string(),
                count: palette.len(),
            });
        }

        let points = project_palette(&palette, space, search_type);
        tracing::debug!(
            palette = palette.name(),
            %space,
            %search_type,
            points = points.len(),
            "Projected palette"
        );

        Ok(Self {
            palette,
            points,
            space,
            search_type,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn search_type(&self) -> SearchType {
        self.search_type
    }

    /// Find the two palette colors bracketing `color`
    pub fn match_color(&self, color: LinearColor) -> Result<MatchResult, AppError> {
        let target = project_color(color, self.space, self.search_type);
        let bracket = find_closest(&self.points, target, self.search_type, self.space)?;

        let result = MatchResult {
            target: color,
            color_a: unproject_color(bracket.color_a, self.space, self.search_type),
            color_b: unproject_color(bracket.color_b, self.space, self.search_type),
            index_a: bracket.index_a,
            index_b: bracket.index_b,
            blend: bracket.blend,
        };

        tracing::debug!(
            index_a = result.index_a,
            index_b = result.index_b,
            blend = result.blend,
            "Matched color"
        );
        Ok(result)
    }
}
