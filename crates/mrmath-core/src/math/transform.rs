//! 4×4 affine transform builders
//!
//! All builders follow the row-vector convention of [`SquareMatrix`]:
//! points transform as `p * M`, translation sits in the last row and a
//! positive angle rotates counter-clockwise when looking down the axis
//! towards the origin (right-handed).

use num_traits::Float;

use crate::math::angle::Radians;
use crate::math::matrix::SquareMatrix;
use crate::math::row::{Row, Scalar};
use crate::math::vector::{Norm3, Vec3};

impl<T: Scalar + Float> SquareMatrix<T, 4> {
    /// Non-uniform scale along the three axes
    pub fn scale(v: Vec3<T>) -> Self {
        let (o, i) = (T::zero(), T::one());
        Self::from_elements([
            v.x(), o, o, o, //
            o, v.y(), o, o, //
            o, o, v.z(), o, //
            o, o, o, i,
        ])
    }

    /// Translation by `v`
    pub fn translate(v: Vec3<T>) -> Self {
        let (o, i) = (T::zero(), T::one());
        Self::from_elements([
            i, o, o, o, //
            o, i, o, o, //
            o, o, i, o, //
            v.x(), v.y(), v.z(), i,
        ])
    }

    /// Rotation about the X axis
    pub fn rotate_x(angle: impl Into<Radians<T>>) -> Self {
        let angle: Radians<T> = angle.into();
        let (si, co) = angle.sin_cos();
        let (o, i) = (T::zero(), T::one());
        Self::from_elements([
            i, o, o, o, //
            o, co, si, o, //
            o, -si, co, o, //
            o, o, o, i,
        ])
    }

    /// Rotation about the Y axis
    pub fn rotate_y(angle: impl Into<Radians<T>>) -> Self {
        let angle: Radians<T> = angle.into();
        let (si, co) = angle.sin_cos();
        let (o, i) = (T::zero(), T::one());
        Self::from_elements([
            co, o, -si, o, //
            o, i, o, o, //
            si, o, co, o, //
            o, o, o, i,
        ])
    }

    /// Rotation about the Z axis
    pub fn rotate_z(angle: impl Into<Radians<T>>) -> Self {
        let angle: Radians<T> = angle.into();
        let (si, co) = angle.sin_cos();
        let (o, i) = (T::zero(), T::one());
        Self::from_elements([
            co, si, o, o, //
            -si, co, o, o, //
            o, o, i, o, //
            o, o, o, i,
        ])
    }

    /// Rotation about an arbitrary unit axis (Rodrigues' formula)
    ///
    /// Sum of a diagonal term, a symmetric term weighted by `1 - cos` and an
    /// antisymmetric term weighted by `sin`. Agrees with
    /// [`rotate_x`](Self::rotate_x) and friends for the coordinate axes.
    /// `axis` must have unit length; anything else gives a skewed matrix.
    pub fn rotate(angle: impl Into<Radians<T>>, axis: Norm3<T>) -> Self {
        let angle: Radians<T> = angle.into();
        let (si, co) = angle.sin_cos();
        let nco = T::one() - co;
        let n = axis.into_vec();
        let (x, y, z) = (n.x(), n.y(), n.z());
        let o = T::zero();

        let diagonal = Self::scale(n * n * nco + co);
        let symmetric = Self::from_elements([
            o, x * y * nco, x * z * nco, o, //
            x * y * nco, o, y * z * nco, o, //
            x * z * nco, y * z * nco, o, o, //
            o, o, o, o,
        ]);
        let antisymmetric = Self::from_elements([
            o, z * si, -y * si, o, //
            -z * si, o, x * si, o, //
            y * si, -x * si, o, o, //
            o, o, o, o,
        ]);

        diagonal + symmetric + antisymmetric
    }

    /// Transform a point (`w = 1`)
    ///
    /// The result is divided by the output `w` unless it is 0 or 1.
    pub fn transform_point(&self, p: Vec3<T>) -> Vec3<T> {
        let v = Row([p.x(), p.y(), p.z(), T::one()]) * *self;
        let out = Row([v[0], v[1], v[2]]);
        let w = v[3];
        if w == T::one() || w == T::zero() {
            out
        } else {
            out / w
        }
    }

    /// Transform a direction (`w = 0`), ignoring translation
    pub fn transform_vector(&self, d: Vec3<T>) -> Vec3<T> {
        let v = Row([d.x(), d.y(), d.z(), T::zero()]) * *self;
        Row([v[0], v[1], v[2]])
    }
}
