//! 2D/3D vectors and unit normals
//!
//! Vectors are plain [`Row`]s with named accessors. [`Norm3`] marks a 3D
//! vector that is expected to have unit length.

use std::ops::Neg;

use num_traits::Float;

use crate::math::row::{Row, Scalar};

/// 2-component vector
pub type Vec2<T> = Row<T, 2>;
/// 3-component vector
pub type Vec3<T> = Row<T, 3>;

pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

impl<T: Copy> Row<T, 2> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    /// `(y, x)`
    #[inline]
    pub fn swapped(self) -> Self {
        Self([self.0[1], self.0[0]])
    }

    /// Append a third component
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Row([self.0[0], self.0[1], z])
    }
}

impl<T: Copy> Row<T, 3> {
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// First two components
    #[inline]
    pub fn xy(&self) -> Vec2<T> {
        Row([self.0[0], self.0[1]])
    }
}

impl<T: Scalar> Row<T, 3> {
    /// Cross product (right-handed)
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }
}

/// A 3D direction of unit length
///
/// Constructors either normalize ([`Norm3::new`], [`Norm3::from_vec`]) or
/// trust the caller ([`Norm3::new_unchecked`]). Normalizing a zero vector
/// yields NaN components; callers must not pass one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Norm3<T>(Vec3<T>);

pub type Norm3f = Norm3<f32>;
pub type Norm3d = Norm3<f64>;

impl<T> Norm3<T> {
    /// Wrap a vector the caller knows to be unit length
    #[inline]
    pub const fn new_unchecked(v: Vec3<T>) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn as_vec(&self) -> &Vec3<T> {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec3<T> {
        self.0
    }
}

impl<T: Scalar + Float> Norm3<T> {
    /// Normalize `(x, y, z)`
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_vec(Row([x, y, z]))
    }

    /// Normalize `v`
    #[inline]
    pub fn from_vec(v: Vec3<T>) -> Self {
        Self(v.normalized_unchecked())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0.x()
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0.y()
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0.z()
    }

    /// Angle between two unit vectors, in radians
    #[inline]
    pub fn angle_to(&self, other: &Self) -> T {
        self.0.dot(&other.0).max(-T::one()).min(T::one()).acos()
    }
}

impl<T: Scalar + Float> Neg for Norm3<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T> From<Norm3<T>> for Vec3<T> {
    fn from(n: Norm3<T>) -> Self {
        n.0
    }
}

macro_rules! axis_constants {
    ($($t:ty),*) => {$(
        impl Norm3<$t> {
            /// +X
            pub const X: Self = Self(Row([1.0, 0.0, 0.0]));
            /// +Y
            pub const Y: Self = Self(Row([0.0, 1.0, 0.0]));
            /// +Z
            pub const Z: Self = Self(Row([0.0, 0.0, 1.0]));
        }
    )*};
}

axis_constants!(f32, f64);
