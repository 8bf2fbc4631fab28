//! Ordered, deduplicated color palette.

use super::format::PaletteFormat;
use crate::color::LinearColor;

/// An ordered set of colors with a display name.
///
/// Colors keep insertion order; a color equal to one already present is
/// dropped. Palettes read from a file also record the detected
/// [`PaletteFormat`].
///
/// # Example
///
/// ```
/// use palette_search::{LinearColor, Palette};
///
/// let palette = Palette::from_colors(
///     "mono",
///     [LinearColor::BLACK, LinearColor::WHITE, LinearColor::BLACK],
/// );
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.name(), "mono");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    name: String,
    colors: Vec<LinearColor>,
    format: Option<PaletteFormat>,
}

impl Palette {
    /// Build a palette from colors in memory.
    pub fn from_colors<I>(name: impl Into<String>, colors: I) -> Self
    where
        I: IntoIterator<Item = LinearColor>,
    {
        let mut palette = Self::named(name, None);
        palette.extend(colors);
        palette
    }

    pub(crate) fn named(name: impl Into<String>, format: Option<PaletteFormat>) -> Self {
        Self {
            name: name.into(),
            colors: Vec::new(),
            format,
        }
    }

    /// Append `color` unless an equal color is already present. Returns
    /// whether it was added.
    pub(crate) fn insert(&mut self, color: LinearColor) -> bool {
        // Palettes are tens of colors; a scan keeps exact f32 equality
        if self.colors.contains(&color) {
            return false;
        }
        self.colors.push(color);
        true
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[LinearColor] {
        &self.colors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinearColor> {
        self.colors.iter()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The format the palette was parsed from; `None` for palettes built
    /// with [`Palette::from_colors`].
    pub fn format(&self) -> Option<PaletteFormat> {
        self.format
    }
}

impl Extend<LinearColor> for Palette {
    fn extend<T: IntoIterator<Item = LinearColor>>(&mut self, iter: T) {
        for color in iter {
            self.insert(color);
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a LinearColor;
    type IntoIter = std::slice::Iter<'a, LinearColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
