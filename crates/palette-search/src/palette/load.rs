//! Reading palette files from disk.

use std::fs;
use std::path::Path;

use super::error::PaletteError;
use super::palette::Palette;
use super::parse::parse_palette;

/// Read and parse the palette file at `path`.
///
/// The whole file is read once; the text view used by the line parsers is
/// decoded from the same bytes, with invalid UTF-8 replaced.
///
/// # Errors
///
/// - [`PaletteError::Io`] when the file cannot be read
/// - [`PaletteError::EmptyContent`] when it has no non-blank lines
pub fn load_palette(path: impl AsRef<Path>) -> Result<Palette, PaletteError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_palette(&text, &bytes, &path.to_string_lossy())
}

/// Base name of a file path without its extension.
///
/// Both `/` and `\` separate directories. A leading dot is part of the name,
/// not an extension.
///
/// ```
/// use palette_search::palette_name_from_path;
///
/// assert_eq!(palette_name_from_path("C:\\art\\endesga-32.hex"), "endesga-32");
/// assert_eq!(palette_name_from_path("pico8"), "pico8");
/// ```
pub fn palette_name_from_path(path: &str) -> &str {
    let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
    match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_strips_directories_and_extension() {
        assert_eq!(palette_name_from_path("/a/b/sweetie-16.gpl"), "sweetie-16");
        assert_eq!(palette_name_from_path("a\\b/c.d.pal"), "c.d");
        assert_eq!(palette_name_from_path(".hidden"), ".hidden");
        assert_eq!(palette_name_from_path("dir/"), "");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_palette("/definitely/not/here.pal");
        assert!(matches!(result, Err(PaletteError::Io(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("palette-search-{}.gpl", std::process::id()));
        fs::write(&path, "GIMP Palette\n0 0 0\n255 255 255\n").unwrap();
        let palette = load_palette(&path);
        fs::remove_file(&path).unwrap();

        let palette = palette.unwrap();
        assert_eq!(palette.len(), 2);
        assert!(palette.name().starts_with("palette-search-"));
    }
}
