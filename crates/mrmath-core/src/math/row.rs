//! Fixed-length rows
//!
//! [`Row`] is the storage unit of [`SquareMatrix`](crate::SquareMatrix) and
//! doubles as the 2D/3D vector type. All arithmetic is elementwise over a
//! `[T; N]`, written so the compiler can keep a whole row in one SIMD register
//! for the common `f32 × 4` case.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_traits::{Float, Num};

/// Element types a [`Row`] can hold
///
/// Any integer or floating point primitive qualifies. `Send + Sync` lets
/// rows be filled from several threads when the `rayon` feature is enabled.
pub trait Scalar: Num + Copy + Send + Sync + fmt::Debug {}

impl<T> Scalar for T where T: Num + Copy + Send + Sync + fmt::Debug {}

/// An ordered tuple of `N` numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Row<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Row<T, N> {
    /// Number of elements
    pub const LEN: usize = N;

    /// Create a row from its elements
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self(data)
    }

    /// Create a row by calling `f` with every index in order
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(std::array::from_fn(f))
    }

    /// Borrow the elements
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Take the elements
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Iterate over the elements
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to every element
    #[inline]
    pub fn map<U, F>(self, f: F) -> Row<U, N>
    where
        F: FnMut(T) -> U,
    {
        Row(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Row<T, N> {
    /// Broadcast one value to every element
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }
}

impl<T: Scalar, const N: usize> Row<T, N> {
    /// All zeros
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// One at `index`, zero elsewhere
    #[inline]
    pub fn unit(index: usize) -> Self {
        Self::from_fn(|i| if i == index { T::one() } else { T::zero() })
    }

    /// Sum of all elements
    #[inline]
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        (*self * *other).sum()
    }
}

impl<T: Scalar + Float, const N: usize> Row<T, N> {
    /// Elementwise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Euclidean length
    #[inline]
    pub fn length(&self) -> T {
        self.dot(self).sqrt()
    }

    /// Scale to unit length, leaving a zero-length row untouched
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > T::zero() { self / len } else { self }
    }

    /// Scale to unit length
    ///
    /// A zero-length row produces NaN elements.
    #[inline]
    pub fn normalized_unchecked(self) -> Self {
        self / self.length()
    }
}

impl<T: Scalar, const N: usize> Default for Row<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize> From<[T; N]> for Row<T, N> {
    fn from(data: [T; N]) -> Self {
        Self(data)
    }
}

impl<T, const N: usize> From<Row<T, N>> for [T; N] {
    fn from(row: Row<T, N>) -> Self {
        row.0
    }
}

impl<T, const N: usize> Index<usize> for Row<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Row<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Row-with-row and row-with-scalar forms of each elementwise operator.
macro_rules! impl_elementwise {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T: Scalar, const N: usize> $op for Row<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self::Output {
                Self(std::array::from_fn(|i| self.0[i].$method(rhs.0[i])))
            }
        }

        impl<T: Scalar, const N: usize> $op<T> for Row<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                Self(std::array::from_fn(|i| self.0[i].$method(rhs)))
            }
        }

        impl<T: Scalar, const N: usize> $op_assign for Row<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = (*self).$method(rhs);
            }
        }

        impl<T: Scalar, const N: usize> $op_assign<T> for Row<T, N> {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                *self = (*self).$method(rhs);
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign);
impl_elementwise!(Sub, sub, SubAssign, sub_assign);
impl_elementwise!(Mul, mul, MulAssign, mul_assign);
impl_elementwise!(Div, div, DivAssign, div_assign);

impl<T, const N: usize> Neg for Row<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Row<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
