use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Entries in the linear-to-sRGB table (12-bit input resolution)
const ENCODE_STEPS: usize = 4096;

/// IEC 61966-2-1 decoding curve
fn decode(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encoding curve
fn encode(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn write_table(
    out: &mut impl Write,
    doc: &str,
    name: &str,
    values: impl ExactSizeIterator<Item = f64>,
) -> io::Result<()> {
    writeln!(out, "/// {doc}")?;
    writeln!(out, "pub static {name}: [f32; {}] = [", values.len())?;
    for (i, value) in values.enumerate() {
        if i % 8 == 0 {
            write!(out, "\n   ")?;
        }
        write!(out, " {:.9},", value as f32)?;
    }
    writeln!(out, "\n];\n")
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").map_err(io::Error::other)?;
    let mut out = BufWriter::new(File::create(Path::new(&out_dir).join("gamma_lut.rs"))?);

    // Decoding is exact per byte; palettes only ever hold 8-bit channels
    write_table(
        &mut out,
        "Linear value of each 8-bit sRGB code",
        "SRGB8_TO_LINEAR",
        (0..256).map(|code| decode(code as f64 / 255.0)),
    )?;

    writeln!(out, "const ENCODE_STEPS: usize = {ENCODE_STEPS};\n")?;
    let last = (ENCODE_STEPS - 1) as f64;
    write_table(
        &mut out,
        "sRGB value at `index / 4095` linear, interpolated by `linear_to_srgb`",
        "LINEAR_TO_SRGB",
        (0..ENCODE_STEPS).map(|i| encode(i as f64 / last)),
    )?;

    out.flush()?;
    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
