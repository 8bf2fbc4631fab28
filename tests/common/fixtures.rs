//! Test fixtures: palette file contents and builders.

use std::path::{Path, PathBuf};

/// JASC-PAL with a header count that does not match the colors
pub const JASC_PAL: &str = "JASC-PAL\n0100\n16\n255 0 0\n0 255 0\n0 0 255\n";

/// GIMP palette naming itself through a comment
pub const GIMP_GPL: &str = "GIMP Palette\n\
#Palette Name: Forest\n\
#Description: greens\n\
 10  40  10\tdeep\n\
 40 120  40\tleaf\n\
200 230 150\tlight\n";

/// paint.net palette with a duplicate entry
pub const PAINT_NET_TXT: &str = ";paint.net Palette File\n\
;Palette Name: Embers\n\
FF200000\n\
FF802000\n\
FFFF8000\n\
FF802000\n";

pub const HEX_LIST: &str = "#000000\n#808080\n#FFFFFF\n";

/// Build an ASE file whose swatch names are quoted hex codes.
///
/// Names are written UTF-16BE as `"#RRGGBB"`, which is what the quoted-name
/// scan reads. The RGB payload is black for every swatch.
pub fn ase_with_quoted_names(codes: &[&str]) -> Vec<u8> {
    let blocks = codes
        .iter()
        .map(|code| swatch_block(&format!("\"#{code}\""), [0.0, 0.0, 0.0]))
        .collect();
    ase_file(blocks)
}

/// Build an ASE file with plain swatch names and RGB float payloads
pub fn ase_with_rgb(colors: &[(&str, [f32; 3])]) -> Vec<u8> {
    ase_file(
        colors
            .iter()
            .map(|(name, rgb)| swatch_block(name, *rgb))
            .collect(),
    )
}

fn ase_file(blocks: Vec<Vec<u8>>) -> Vec<u8> {
    let mut out = b"ASEF".to_vec();
    out.extend_from_slice(&1u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&(blocks.len() as u32).to_be_bytes());
    for block in blocks {
        out.extend_from_slice(&1u16.to_be_bytes());
        out.extend_from_slice(&(block.len() as u32).to_be_bytes());
        out.extend(block);
    }
    out
}

fn swatch_block(name: &str, rgb: [f32; 3]) -> Vec<u8> {
    let mut block = Vec::new();
    let units: Vec<u16> = name.encode_utf16().chain(std::iter::once(0)).collect();
    block.extend_from_slice(&(units.len() as u16).to_be_bytes());
    for unit in units {
        block.extend_from_slice(&unit.to_be_bytes());
    }
    block.extend_from_slice(b"RGB ");
    for channel in rgb {
        block.extend_from_slice(&channel.to_be_bytes());
    }
    block.extend_from_slice(&2u16.to_be_bytes());
    block
}

/// Write `contents` to `dir/name` and return the path
pub fn write_palette(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
