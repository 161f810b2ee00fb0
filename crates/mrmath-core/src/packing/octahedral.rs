//! Octahedral mapping between unit vectors and `[-1, 1]²`
//!
//! The sphere is projected onto the octahedron `|x| + |y| + |z| = 1`; the
//! upper half maps straight down onto the square's inner diamond and the
//! lower half is folded out into the corners by [`oct_wrap`].

use crate::math::{Norm3f, Vec2f};

/// Componentwise sign, with zero counted as positive
#[inline]
pub fn sign_non_zero(v: Vec2f) -> Vec2f {
    v.map(|c| if c >= 0.0 { 1.0 } else { -1.0 })
}

/// Fold a point across the diamond edge into the opposite triangle
#[inline]
pub fn oct_wrap(v: Vec2f) -> Vec2f {
    (Vec2f::splat(1.0) - v.swapped().abs()) * sign_non_zero(v)
}

/// Project a unit vector onto the octahedral square
///
/// `n` must be non-zero; a zero vector divides by zero.
#[inline]
pub fn project(n: Norm3f) -> Vec2f {
    let l1 = n.x().abs() + n.y().abs() + n.z().abs();
    let p = Vec2f::new([n.x(), n.y()]) / l1;
    if n.z() < 0.0 { oct_wrap(p) } else { p }
}

/// Rebuild a unit vector from a point of the octahedral square
#[inline]
pub fn unproject(v: Vec2f) -> Norm3f {
    let z = 1.0 - v.x().abs() - v.y().abs();
    let xy = if z < 0.0 { oct_wrap(v) } else { v };
    Norm3f::new_unchecked(xy.extend(z).normalized_unchecked())
}
