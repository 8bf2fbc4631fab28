//! Gamma curves backed by tables that build.rs generates.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

const ENCODE_LAST: usize = ENCODE_STEPS - 1;

/// Decode an 8-bit sRGB channel to linear light.
///
/// Exact per code value: the table holds one entry per byte.
#[inline]
pub fn srgb8_to_linear(srgb: u8) -> f32 {
    SRGB8_TO_LINEAR[srgb as usize]
}

/// Encode a linear value to sRGB in 0.0..=1.0, interpolating between
/// table entries.
///
/// Out-of-range input saturates; NaN encodes as black.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    if linear.is_nan() {
        return 0.0;
    }

    let scaled = linear.clamp(0.0, 1.0) * ENCODE_LAST as f32;
    let index = (scaled as usize).min(ENCODE_LAST - 1);
    let (lo, hi) = (LINEAR_TO_SRGB[index], LINEAR_TO_SRGB[index + 1]);
    lo + (hi - lo) * (scaled - index as f32)
}
