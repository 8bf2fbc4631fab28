//! Palette file format sniffing.

use std::fmt;

/// Palette file formats, detected from the first line of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteFormat {
    /// JASC-PAL (Paint Shop Pro): three header lines, then `R G B` lines
    Jasc,
    /// GIMP palette: `GIMP Palette` header, `#` comments, `R G B name` lines
    Gimp,
    /// paint.net: `;` comments, `AARRGGBB` lines
    PaintNet,
    /// Adobe Swatch Exchange
    Asef,
    /// One hex code per line
    #[default]
    Hex,
}

impl PaletteFormat {
    /// Signatures in priority order; the first one found in the line wins.
    const SIGNATURES: [(&'static str, PaletteFormat); 4] = [
        ("JASC", PaletteFormat::Jasc),
        ("ASEF", PaletteFormat::Asef),
        ("GIMP", PaletteFormat::Gimp),
        ("paint.net", PaletteFormat::PaintNet),
    ];

    /// Detect the format from the first line of a file. Anything without a
    /// known signature is [`PaletteFormat::Hex`].
    ///
    /// # Example
    /// ```
    /// use palette_search::PaletteFormat;
    ///
    /// assert_eq!(PaletteFormat::detect("JASC-PAL"), PaletteFormat::Jasc);
    /// assert_eq!(PaletteFormat::detect("#FF0000"), PaletteFormat::Hex);
    /// ```
    pub fn detect(first_line: &str) -> Self {
        Self::SIGNATURES
            .iter()
            .find(|(signature, _)| first_line.contains(signature))
            .map(|&(_, format)| format)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteFormat::Jasc => "jasc",
            PaletteFormat::Gimp => "gimp",
            PaletteFormat::PaintNet => "paint.net",
            PaletteFormat::Asef => "asef",
            PaletteFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
