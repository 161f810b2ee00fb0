//! Fixed-point quantization of octahedral coordinates
//!
//! A coordinate pair in `[-1, 1]²` is mapped to `[0, 1]²`, scaled to
//! `2^bits - 1`, truncated and packed as `(x << bits) | y`.

use crate::math::Vec2f;

/// Bits per coordinate of [`PackedNorm32`](super::PackedNorm32)
pub const BITS_32: u32 = 16;
/// Bits per coordinate of [`PackedNorm24`](super::PackedNorm24)
pub const BITS_24: u32 = 12;
/// Bits per coordinate of [`PackedNorm16`](super::PackedNorm16)
pub const BITS_16: u32 = 8;

#[inline]
const fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

/// Quantize a pair in `[-1, 1]²` to two `bits`-wide fields
///
/// Truncates toward zero, so `0.0` lands on `2^(bits-1) - 1`.
#[inline]
pub fn quantize(v: Vec2f, bits: u32) -> u32 {
    let mask = mask(bits);
    let scaled = (v * 0.5 + 0.5) * mask as f32;
    let x = scaled.x() as u32 & mask;
    let y = scaled.y() as u32 & mask;
    (x << bits) | y
}

/// Inverse of [`quantize`]
#[inline]
pub fn dequantize(packed: u32, bits: u32) -> Vec2f {
    let mask = mask(bits);
    let fields = Vec2f::new([((packed >> bits) & mask) as f32, (packed & mask) as f32]);
    fields / mask as f32 * 2.0 - 1.0
}
