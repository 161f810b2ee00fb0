//! Octahedral normal packing
//!
//! Unit normals are projected onto an octahedron, unfolded into the square
//! `[-1, 1]²` and quantized to fixed point:
//!
//! | Type             | Bits per axis | Layout                          |
//! |------------------|---------------|---------------------------------|
//! | [`PackedNorm32`] | 16            | `u32`, x in bits 16..32         |
//! | [`PackedNorm24`] | 12            | 3 bytes LE, x in bits 12..24    |
//! | [`PackedNorm16`] | 8             | `u16`, x in bits 8..16          |
//!
//! The input to the `pack_*` functions must be non-zero and should be unit
//! length; a zero vector divides by zero during projection.

pub mod batch;
pub mod octahedral;
mod packed24;
pub mod quantize;

pub use batch::{
    pack_oct16_batch, pack_oct24_batch, pack_oct32_batch, packed24_as_bytes, packed24_from_bytes,
    unpack_oct16_batch, unpack_oct24_batch, unpack_oct32_batch, write_oct16_strided,
    write_oct24_strided, write_oct32_strided,
};
pub use packed24::PackedNorm24;

use crate::math::Norm3f;
use octahedral::{project, unproject};
use quantize::{BITS_16, BITS_24, BITS_32, dequantize, quantize};

/// Normal packed into 32 bits, 16 per axis
pub type PackedNorm32 = u32;

/// Normal packed into 16 bits, 8 per axis
pub type PackedNorm16 = u16;

/// Pack a non-zero normal into 16 + 16 bits, x field high
#[inline]
pub fn pack_oct32(norm: Norm3f) -> PackedNorm32 {
    quantize(project(norm), BITS_32)
}

/// Decode a [`PackedNorm32`] into a unit normal
#[inline]
pub fn unpack_oct32(packed: PackedNorm32) -> Norm3f {
    unproject(dequantize(packed, BITS_32))
}

/// Pack a non-zero normal into 12 + 12 bits stored as 3 LE bytes
#[inline]
pub fn pack_oct24(norm: Norm3f) -> PackedNorm24 {
    PackedNorm24::from_u32(quantize(project(norm), BITS_24))
}

/// Decode a [`PackedNorm24`] into a unit normal
#[inline]
pub fn unpack_oct24(packed: PackedNorm24) -> Norm3f {
    unproject(dequantize(packed.to_u32(), BITS_24))
}

/// Pack a non-zero normal into 8 + 8 bits, x field high
#[inline]
pub fn pack_oct16(norm: Norm3f) -> PackedNorm16 {
    // Two 8-bit fields always fit
    quantize(project(norm), BITS_16) as PackedNorm16
}

/// Decode a [`PackedNorm16`] into a unit normal
#[inline]
pub fn unpack_oct16(packed: PackedNorm16) -> Norm3f {
    unproject(dequantize(u32::from(packed), BITS_16))
}
