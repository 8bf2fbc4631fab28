//! Per-format palette parsers.
//!
//! Every parser is lenient: lines it cannot read are skipped rather than
//! failing the whole file. Only content with no non-blank lines is an error.

use super::error::PaletteError;
use super::format::PaletteFormat;
use super::load::palette_name_from_path;
use super::palette::Palette;
use crate::color::{parse_hex, reverse_float_bytes, LinearColor, Srgb};

/// Comment text that carries a palette name (GIMP and paint.net).
const NAME_MARKER: &str = "Palette Name: ";

/// JASC-PAL header: signature, version, color count.
const JASC_HEADER_LINES: usize = 3;

/// Byte offsets of the six hex digits after a `"` in an ASEF swatch name.
/// Names are UTF-16BE, so every other byte is a character.
const ASEF_NAME_OFFSETS: [usize; 6] = [4, 6, 8, 10, 12, 14];

/// Color model tag of an ASEF RGB block, followed by three big-endian f32.
const ASEF_RGB_SIGNATURE: [u8; 4] = *b"RGB ";
const ASEF_RGB_BLOCK_LEN: usize = 16;

/// Parse one palette file.
///
/// `text` and `bytes` are two views of the same content; only the ASEF
/// parser needs the raw bytes. `file_name` may be a bare name or a full
/// path: the palette is named after its base name unless the file names
/// itself.
///
/// # Errors
///
/// [`PaletteError::EmptyContent`] when `text` has no non-blank lines.
///
/// # Example
///
/// ```
/// use palette_search::{parse_palette, PaletteFormat};
///
/// let text = "JASC-PAL\n0100\n2\n0 0 0\n255 255 255\n";
/// let palette = parse_palette(text, text.as_bytes(), "mono.pal").unwrap();
/// assert_eq!(palette.format(), Some(PaletteFormat::Jasc));
/// assert_eq!(palette.name(), "mono");
/// assert_eq!(palette.len(), 2);
/// ```
pub fn parse_palette(text: &str, bytes: &[u8], file_name: &str) -> Result<Palette, PaletteError> {
    // Any of \n, \r\n or a lone \r ends a line
    let lines: Vec<&str> = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect();
    let Some(first) = lines.first() else {
        return Err(PaletteError::EmptyContent);
    };

    let format = PaletteFormat::detect(first);
    let mut palette = Palette::named(palette_name_from_path(file_name), Some(format));

    match format {
        PaletteFormat::Jasc => parse_jasc(&mut palette, &lines),
        PaletteFormat::Gimp => parse_gimp(&mut palette, &lines),
        PaletteFormat::PaintNet => parse_paint_net(&mut palette, &lines),
        PaletteFormat::Asef => parse_asef(&mut palette, bytes),
        PaletteFormat::Hex => parse_hex_lines(&mut palette, &lines),
    }

    Ok(palette)
}

fn parse_jasc(palette: &mut Palette, lines: &[&str]) {
    for line in lines.iter().skip(JASC_HEADER_LINES) {
        if let Some(srgb) = parse_triplet(line) {
            palette.insert(LinearColor::from(srgb));
        }
    }
}

fn parse_gimp(palette: &mut Palette, lines: &[&str]) {
    for line in lines.iter().skip(1) {
        if line.contains('#') {
            if let Some(name) = comment_name(line) {
                palette.set_name(name);
            }
            continue;
        }

        let trimmed = line.trim();
        if let Some(name) = trimmed.strip_prefix("Name:") {
            let name = name.trim();
            if !name.is_empty() {
                palette.set_name(name);
            }
            continue;
        }
        if trimmed.starts_with("Columns:") {
            continue;
        }

        if let Some(srgb) = parse_triplet(line) {
            palette.insert(LinearColor::from(srgb));
        }
    }
}

fn parse_paint_net(palette: &mut Palette, lines: &[&str]) {
    for line in lines.iter().skip(1) {
        if line.contains(';') {
            if let Some(name) = comment_name(line) {
                palette.set_name(name);
            }
            continue;
        }

        // AARRGGBB: the alpha pair is dropped
        let line = line.trim();
        let code = line.char_indices().nth(2).map_or("", |(i, _)| &line[i..]);
        if let Some(color) = parse_hex(code) {
            palette.insert(color);
        }
    }
}

fn parse_asef(palette: &mut Palette, bytes: &[u8]) {
    palette.extend(scan_quoted_hex(bytes));
    if palette.is_empty() {
        palette.extend(scan_rgb_blocks(bytes));
    }
}

fn parse_hex_lines(palette: &mut Palette, lines: &[&str]) {
    palette.extend(lines.iter().filter_map(|line| parse_hex(line)));
}

/// Read `R G B` decimal channels, ignoring anything after the third.
/// Values are clamped to 0..=255.
fn parse_triplet(line: &str) -> Option<Srgb> {
    let mut channels = line
        .split_whitespace()
        .map(|token| token.parse::<i32>().ok().map(|v| v.clamp(0, 255) as u8));
    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some(Srgb::new(r, g, b))
}

/// The name in a `Palette Name: X` comment: everything after the first `:`.
fn comment_name(line: &str) -> Option<&str> {
    if !line.contains(NAME_MARKER) {
        return None;
    }
    line.split_once(':')
        .map(|(_, name)| name.trim())
        .filter(|name| !name.is_empty())
}

/// Find `"#RRGGBB"` swatch names in an ASEF file.
///
/// Every `"` byte starts a candidate. The candidate is accepted when all six
/// sampled bytes are ASCII hex digits.
fn scan_quoted_hex(bytes: &[u8]) -> Vec<LinearColor> {
    let mut colors = Vec::new();
    let mut pos = 0;
    while let Some(found) = bytes[pos..].iter().position(|&b| b == b'"') {
        let quote = pos + found;
        pos = quote + 1;

        let Some(window) = bytes.get(quote..quote + 15) else {
            break;
        };
        let code: Option<String> = ASEF_NAME_OFFSETS
            .iter()
            .map(|&offset| window[offset])
            .map(|b| b.is_ascii_hexdigit().then_some(b as char))
            .collect();
        if let Some(color) = code.as_deref().and_then(parse_hex) {
            colors.push(color);
        }
    }
    colors
}

/// Read every `RGB ` block of an ASEF file as three big-endian floats in
/// 0.0..=1.0.
fn scan_rgb_blocks(bytes: &[u8]) -> Vec<LinearColor> {
    let mut colors = Vec::new();
    let mut i = 0;
    while i + ASEF_RGB_BLOCK_LEN <= bytes.len() {
        if bytes[i..i + 4] != ASEF_RGB_SIGNATURE {
            i += 1;
            continue;
        }

        let mut channels = [0u8; 3];
        let payload = &bytes[i + 4..i + ASEF_RGB_BLOCK_LEN];
        for (channel, chunk) in channels.iter_mut().zip(payload.chunks_exact(4)) {
            let raw = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            // Float-to-int `as` truncates and saturates; NaN becomes 0
            *channel = (reverse_float_bytes(raw) * 255.0) as u8;
        }
        colors.push(LinearColor::from(Srgb::from_bytes(channels)));
        i += ASEF_RGB_BLOCK_LEN;
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Palette {
        parse_palette(text, text.as_bytes(), "test.txt").unwrap()
    }

    fn srgb(palette: &Palette) -> Vec<Srgb> {
        palette.iter().map(|&c| Srgb::from(c)).collect()
    }

    fn utf16be(s: &str) -> Vec<u8> {
        s.bytes().flat_map(|b| [0, b]).collect()
    }

    #[test]
    fn test_jasc() {
        let palette = parse("JASC-PAL\n0100\n0003\n255 0 0\n0 255 0\n0 0 255\n");
        assert_eq!(palette.format(), Some(PaletteFormat::Jasc));
        assert_eq!(
            srgb(&palette),
            vec![
                Srgb::new(255, 0, 0),
                Srgb::new(0, 255, 0),
                Srgb::new(0, 0, 255)
            ]
        );
        assert_eq!(palette.name(), "test");
    }

    #[test]
    fn test_jasc_header_is_not_colors() {
        // Header lines are skipped by position, not by content
        let palette = parse("JASC-PAL\n1 2 3\n4 5 6\n7 8 9\n");
        assert_eq!(srgb(&palette), vec![Srgb::new(7, 8, 9)]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let palette = parse("JASC-PAL\r\n0100\r\n\r\n2\r\n   \r\n10 20 30\r\n40 50 60\r\n");
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(10, 20, 30), Srgb::new(40, 50, 60)]
        );
    }

    #[test]
    fn test_gimp() {
        let text = "GIMP Palette\n\
                    Name: Sunset\n\
                    Columns: 4\n\
                    # a comment\n\
                    255\t128\t0\tOrange\n\
                    20 20 20 Ink\n";
        let palette = parse(text);
        assert_eq!(palette.format(), Some(PaletteFormat::Gimp));
        assert_eq!(palette.name(), "Sunset");
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(255, 128, 0), Srgb::new(20, 20, 20)]
        );
    }

    #[test]
    fn test_gimp_comment_name() {
        let text = "GIMP Palette\n#Palette Name: Lost Century\n#Description: x\n0 0 0\n";
        let palette = parse(text);
        assert_eq!(palette.name(), "Lost Century");
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_short_and_out_of_range_triplets() {
        let text = "GIMP Palette\n12 34\nred green blue\n300 -5 7\n";
        let palette = parse(text);
        assert_eq!(srgb(&palette), vec![Srgb::new(255, 0, 7)]);
    }

    #[test]
    fn test_paint_net() {
        let text = ";paint.net Palette File\n\
                    ;Palette Name: Pico\n\
                    ;Colors: 2\n\
                    FF1D2B53\n\
                    80FF004D\n";
        let palette = parse(text);
        assert_eq!(palette.format(), Some(PaletteFormat::PaintNet));
        assert_eq!(palette.name(), "Pico");
        // Alpha pair is skipped, both colors come out opaque
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(0x1D, 0x2B, 0x53), Srgb::new(0xFF, 0x00, 0x4D)]
        );
    }

    #[test]
    fn test_hex_lines() {
        let palette = parse("#ff0000\nnot a color\n00ff00\n#FF0000\n#12\n");
        assert_eq!(palette.format(), Some(PaletteFormat::Hex));
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(255, 0, 0), Srgb::new(0, 255, 0)]
        );
    }

    #[test]
    fn test_hex_keeps_alpha() {
        let palette = parse("FF000080\n");
        assert_eq!(palette.colors()[0].a, 128.0 / 255.0);
    }

    #[test]
    fn test_hex_title_line_is_skipped() {
        let palette = parse_palette("Pico-8\n#000000\n#FFFFFF\n", b"", "pico.hex").unwrap();
        assert_eq!(palette.format(), Some(PaletteFormat::Hex));
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)]
        );

        // Six or eight characters are not enough to make a color
        let palette = parse("Colors\nzzzzzz\nPalette1\n#00FF00\n");
        assert_eq!(srgb(&palette), vec![Srgb::new(0, 255, 0)]);
    }

    #[test]
    fn test_paint_net_non_hex_line_is_skipped() {
        let text = ";paint.net Palette File\nFFGGGGGG\nFF102030\n";
        assert_eq!(srgb(&parse(text)), vec![Srgb::new(0x10, 0x20, 0x30)]);
    }

    #[test]
    fn test_lone_carriage_return_line_endings() {
        let palette = parse("#FF0000\r#00FF00\r#0000FF\r");
        assert_eq!(
            srgb(&palette),
            vec![
                Srgb::new(255, 0, 0),
                Srgb::new(0, 255, 0),
                Srgb::new(0, 0, 255)
            ]
        );

        let palette = parse("JASC-PAL\r0100\r2\r1 2 3\r4 5 6\r");
        assert_eq!(palette.format(), Some(PaletteFormat::Jasc));
        assert_eq!(srgb(&palette), vec![Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)]);

        // Mixed endings in one file
        let palette = parse("GIMP Palette\rName: Mixed\r\n10 20 30\n40 50 60\r");
        assert_eq!(palette.name(), "Mixed");
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_empty_content() {
        assert!(matches!(
            parse_palette("", b"", "x.hex"),
            Err(PaletteError::EmptyContent)
        ));
        assert!(matches!(
            parse_palette(" \n\t\n", b" \n\t\n", "x.hex"),
            Err(PaletteError::EmptyContent)
        ));
    }

    #[test]
    fn test_name_from_path() {
        let palette = parse_palette("#000000", b"#000000", "/home/a/palettes/dawn.v2.hex").unwrap();
        assert_eq!(palette.name(), "dawn.v2");
    }

    #[test]
    fn test_asef_quoted_names() {
        let mut bytes = b"ASEF\x00\x01\x00\x00".to_vec();
        bytes.extend(utf16be("\"#FF8000\""));
        bytes.extend([0u8; 16]);
        bytes.extend(utf16be("\"#1a2b3c\""));
        bytes.extend([0u8; 16]);
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let palette = parse_palette(&text, &bytes, "swatches.ase").unwrap();
        assert_eq!(palette.format(), Some(PaletteFormat::Asef));
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(0xFF, 0x80, 0x00), Srgb::new(0x1A, 0x2B, 0x3C)]
        );
    }

    #[test]
    fn test_asef_quote_near_end_stops_scan() {
        assert!(scan_quoted_hex(b"\"abc").is_empty());
        assert!(scan_quoted_hex(b"").is_empty());
    }

    #[test]
    fn test_asef_binary_fallback() {
        let mut bytes = b"ASEF\x00\x01\x00\x00\x00\x00\x00\x02".to_vec();
        for rgb in [[1.0f32, 0.5, 0.0], [0.0, 0.0, 1.0]] {
            bytes.extend(ASEF_RGB_SIGNATURE);
            for channel in rgb {
                bytes.extend(channel.to_be_bytes());
            }
            bytes.extend([0, 2]);
        }
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let palette = parse_palette(&text, &bytes, "blocks.ase").unwrap();
        // 0.5 * 255 truncates to 127
        assert_eq!(
            srgb(&palette),
            vec![Srgb::new(255, 127, 0), Srgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_asef_truncated_block_ignored() {
        let mut bytes = b"ASEF".to_vec();
        bytes.extend(ASEF_RGB_SIGNATURE);
        bytes.extend(1.0f32.to_be_bytes());
        assert!(scan_rgb_blocks(&bytes).is_empty());
    }

    #[test]
    fn test_asef_out_of_range_floats_saturate() {
        let mut bytes = ASEF_RGB_SIGNATURE.to_vec();
        for channel in [2.0f32, -1.0, f32::NAN] {
            bytes.extend(channel.to_be_bytes());
        }
        let colors = scan_rgb_blocks(&bytes);
        assert_eq!(Srgb::from(colors[0]), Srgb::new(255, 0, 0));
    }
}
