//! 24-bit packed normals
//!
//! Three bytes, least significant first. The struct is `#[repr(transparent)]`
//! over `[u8; 3]` and implements [`bytemuck::Pod`], so slices of it can be
//! viewed as raw vertex-buffer bytes without copying.

use bytemuck::{Pod, Zeroable};

use crate::error::Error;

/// A 24-bit unsigned value stored as 3 little-endian bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct PackedNorm24([u8; 3]);

impl PackedNorm24 {
    /// The representable bits of a `u32`
    pub const MASK: u32 = 0x00FF_FFFF;

    /// Keep the low 24 bits of `value`
    #[inline]
    pub const fn from_u32(value: u32) -> Self {
        Self([value as u8, (value >> 8) as u8, (value >> 16) as u8])
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        (self.0[2] as u32) << 16 | (self.0[1] as u32) << 8 | self.0[0] as u32
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        self.0
    }

    /// Raw bytes, least significant first
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; 3] {
        &mut self.0
    }
}

impl From<PackedNorm24> for u32 {
    fn from(p: PackedNorm24) -> Self {
        p.to_u32()
    }
}

impl From<[u8; 3]> for PackedNorm24 {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<PackedNorm24> for [u8; 3] {
    fn from(p: PackedNorm24) -> Self {
        p.to_bytes()
    }
}

impl TryFrom<&[u8]> for PackedNorm24 {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 3] = bytes.try_into().map_err(|_| Error::BufferSize {
            expected: 3,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_layout() {
        let p = PackedNorm24::from_u32(0x12_3456);
        assert_eq!(p.to_bytes(), [0x56, 0x34, 0x12]);
        assert_eq!(p.to_u32(), 0x12_3456);
        assert_eq!(u32::from(p), 0x12_3456);
    }

    #[test]
    fn test_masks_high_bits() {
        for value in [0xFF00_0000u32, 0xDEAD_BEEF, u32::MAX, 0x0100_0001] {
            assert_eq!(PackedNorm24::from_u32(value).to_u32(), value & PackedNorm24::MASK);
        }
    }

    #[test]
    fn test_byte_view_mutation() {
        let mut p = PackedNorm24::default();
        p.as_bytes_mut()[2] = 0x80;
        assert_eq!(p.to_u32(), 0x80_0000);
        assert_eq!(bytemuck::bytes_of(&p), p.as_bytes());
    }

    #[test]
    fn test_try_from_slice() {
        let p = PackedNorm24::try_from(&[1u8, 2, 3][..]).unwrap();
        assert_eq!(p.to_u32(), 0x03_0201);

        let err = PackedNorm24::try_from(&[1u8, 2][..]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_size_and_alignment() {
        assert_eq!(std::mem::size_of::<PackedNorm24>(), 3);
        assert_eq!(std::mem::align_of::<PackedNorm24>(), 1);
    }
}
