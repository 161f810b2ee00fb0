//! Batch packing for vertex buffers
//!
//! These functions process whole buffers of normals. The inner loops are
//! compiled for several instruction sets with `multiversion` and the best
//! one is picked at runtime.

use std::mem::size_of;

use bytemuck::Pod;
use multiversion::multiversion;

use crate::error::{Error, Result};
use crate::math::Norm3f;
use crate::packing::{
    PackedNorm16, PackedNorm24, PackedNorm32, pack_oct16, pack_oct24, pack_oct32, unpack_oct16,
    unpack_oct24, unpack_oct32,
};

#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
fn map_batch<S, D, F>(src: &[S], dst: &mut [D], f: F)
where
    S: Copy,
    F: Fn(S) -> D,
{
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = f(*s);
    }
}

#[inline]
fn check_capacity(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(Error::BufferSize {
            expected: needed,
            actual,
        });
    }
    Ok(())
}

/// Pack `src` into the first `src.len()` slots of `dst`
pub fn pack_oct32_batch(src: &[Norm3f], dst: &mut [PackedNorm32]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, pack_oct32);
    Ok(())
}

/// Pack `src` into the first `src.len()` slots of `dst`
pub fn pack_oct24_batch(src: &[Norm3f], dst: &mut [PackedNorm24]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, pack_oct24);
    Ok(())
}

/// Pack `src` into the first `src.len()` slots of `dst`
pub fn pack_oct16_batch(src: &[Norm3f], dst: &mut [PackedNorm16]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, pack_oct16);
    Ok(())
}

/// Unpack `src` into the first `src.len()` slots of `dst`
pub fn unpack_oct32_batch(src: &[PackedNorm32], dst: &mut [Norm3f]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, unpack_oct32);
    Ok(())
}

/// Unpack `src` into the first `src.len()` slots of `dst`
pub fn unpack_oct24_batch(src: &[PackedNorm24], dst: &mut [Norm3f]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, unpack_oct24);
    Ok(())
}

/// Unpack `src` into the first `src.len()` slots of `dst`
pub fn unpack_oct16_batch(src: &[PackedNorm16], dst: &mut [Norm3f]) -> Result<()> {
    check_capacity(src.len(), dst.len())?;
    map_batch(src, dst, unpack_oct16);
    Ok(())
}

fn write_strided<P, F>(
    src: &[Norm3f],
    dst: &mut [u8],
    offset: usize,
    stride: usize,
    pack: F,
) -> Result<()>
where
    P: Pod,
    F: Fn(Norm3f) -> P,
{
    let element = size_of::<P>();
    if stride < element {
        return Err(Error::Stride { stride, element });
    }
    let Some(last) = src.len().checked_sub(1) else {
        return Ok(());
    };
    let needed = last
        .checked_mul(stride)
        .and_then(|n| n.checked_add(offset))
        .and_then(|n| n.checked_add(element))
        .ok_or(Error::BufferSize {
            expected: usize::MAX,
            actual: dst.len(),
        })?;
    check_capacity(needed, dst.len())?;

    for (n, slot) in src.iter().zip(dst[offset..].chunks_mut(stride)) {
        slot[..element].copy_from_slice(bytemuck::bytes_of(&pack(*n)));
    }
    Ok(())
}

/// Write packed normals into an interleaved vertex buffer
///
/// Normal `i` lands at byte `offset + i * stride`, in host byte order.
/// Bytes between the normals are left untouched.
pub fn write_oct32_strided(
    src: &[Norm3f],
    dst: &mut [u8],
    offset: usize,
    stride: usize,
) -> Result<()> {
    write_strided(src, dst, offset, stride, pack_oct32)
}

/// Write packed normals into an interleaved vertex buffer
///
/// Normal `i` occupies bytes `offset + i * stride ..+ 3`, least significant
/// byte first.
pub fn write_oct24_strided(
    src: &[Norm3f],
    dst: &mut [u8],
    offset: usize,
    stride: usize,
) -> Result<()> {
    write_strided(src, dst, offset, stride, pack_oct24)
}

/// Write packed normals into an interleaved vertex buffer
///
/// Normal `i` lands at byte `offset + i * stride`, in host byte order.
pub fn write_oct16_strided(
    src: &[Norm3f],
    dst: &mut [u8],
    offset: usize,
    stride: usize,
) -> Result<()> {
    write_strided(src, dst, offset, stride, pack_oct16)
}

/// View packed 24-bit normals as tightly packed bytes
#[inline]
pub fn packed24_as_bytes(packed: &[PackedNorm24]) -> &[u8] {
    bytemuck::cast_slice(packed)
}

/// View tightly packed bytes as 24-bit normals
///
/// Fails when the length is not a multiple of 3.
pub fn packed24_from_bytes(bytes: &[u8]) -> Result<&[PackedNorm24]> {
    bytemuck::try_cast_slice(bytes).map_err(|_| Error::BufferSize {
        expected: bytes.len().next_multiple_of(size_of::<PackedNorm24>()),
        actual: bytes.len(),
    })
}
