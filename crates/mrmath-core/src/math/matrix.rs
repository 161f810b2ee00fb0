//! N×N matrices stored as rows
//!
//! Matrices are row-major and act on row vectors: `v' = v * M`, and
//! `A * B` applies `A` first. Every operation works on whole rows so the
//! inner loops are elementwise [`Row`] arithmetic.
//!
//! Determinant and inverse use Gauss–Jordan elimination without row
//! exchange. A pivot whose magnitude is at most `T::epsilon()` is treated as
//! degenerate and the step that would divide by it is skipped, so singular or
//! badly conditioned input yields a degraded result instead of an error.
//! Matrices with a zero leading pivot are affected even when non-singular.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use num_traits::Float;
use tracing::trace;

use crate::error::{Error, Result};
use crate::math::parallel::for_each_row;
use crate::math::row::{Row, Scalar};

/// A square matrix of `N` rows of `N` elements
///
/// Stored in row-major order: `rows[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareMatrix<T, const N: usize> {
    /// Matrix rows
    pub rows: [Row<T, N>; N],
}

pub type Matrix3<T> = SquareMatrix<T, 3>;
pub type Matrix4<T> = SquareMatrix<T, 4>;

pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;

impl<T, const N: usize> SquareMatrix<T, N> {
    /// Create a matrix from its rows
    #[inline]
    pub const fn from_rows(rows: [Row<T, N>; N]) -> Self {
        Self { rows }
    }

    /// Borrow the rows
    #[inline]
    pub const fn rows(&self) -> &[Row<T, N>; N] {
        &self.rows
    }
}

impl<T: Scalar, const N: usize> SquareMatrix<T, N> {
    /// Create a matrix by calling `f(row, col)` for every element
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            rows: std::array::from_fn(|i| Row::from_fn(|j| f(i, j))),
        }
    }

    /// Create a matrix from `N * N` elements in row-major order
    pub fn try_from_slice(elements: &[T]) -> Result<Self> {
        if elements.len() != N * N {
            return Err(Error::Dimension {
                expected: N * N,
                actual: elements.len(),
            });
        }
        Ok(Self::from_fn(|i, j| elements[i * N + j]))
    }

    /// Create a zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self {
            rows: [Row::zero(); N],
        }
    }

    /// Create an identity matrix
    ///
    /// Every call builds the same value; there is no shared state behind it.
    pub fn identity() -> Self {
        let mut rows = [Row::zero(); N];
        for_each_row(&mut rows, |i, row| *row = Row::unit(i));
        Self { rows }
    }

    /// Row `i`
    #[inline]
    pub fn row(&self, i: usize) -> Row<T, N> {
        self.rows[i]
    }

    /// Column `j`
    #[inline]
    pub fn column(&self, j: usize) -> Row<T, N> {
        Row::from_fn(|i| self.rows[i][j])
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other. Each output row is a combination of `other`'s
    /// rows weighted by the matching row of `self`.
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut rows = [Row::zero(); N];
        for i in 0..N {
            for (acc, lhs) in rows.iter_mut().zip(&self.rows) {
                *acc += other.rows[i] * lhs[i];
            }
        }
        Self { rows }
    }

    /// Elementwise sum
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            rows: std::array::from_fn(|i| self.rows[i] + other.rows[i]),
        }
    }

    /// Elementwise difference
    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        Self {
            rows: std::array::from_fn(|i| self.rows[i] - other.rows[i]),
        }
    }

    /// Scale all elements by a scalar
    #[inline]
    pub fn scaled(&self, s: T) -> Self {
        Self {
            rows: self.rows.map(|row| row * s),
        }
    }

    /// Transposed copy
    #[inline]
    pub fn transposed(&self) -> Self {
        Self {
            rows: std::array::from_fn(|i| Row::from_fn(|j| self.rows[j][i])),
        }
    }

    /// Transpose in place
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }
}

/// One row of the `[A | I]` system used by inversion
#[derive(Clone, Copy)]
struct Augmented<T, const N: usize> {
    left: Row<T, N>,
    right: Row<T, N>,
}

impl<T: Scalar, const N: usize> Augmented<T, N> {
    #[inline]
    fn zero() -> Self {
        Self {
            left: Row::zero(),
            right: Row::zero(),
        }
    }

    #[inline]
    fn divide(&mut self, s: T) {
        self.left /= s;
        self.right /= s;
    }

    /// `self -= other * s`
    #[inline]
    fn subtract_scaled(&mut self, other: &Self, s: T) {
        self.left -= other.left * s;
        self.right -= other.right * s;
    }
}

#[inline]
fn is_degenerate<T: Float>(pivot: T) -> bool {
    pivot.abs() <= T::epsilon()
}

impl<T: Scalar + Float, const N: usize> SquareMatrix<T, N> {
    /// Calculate the determinant
    ///
    /// Product of the pivots met during forward elimination. Degenerate
    /// pivots skip their normalization, so the result is only approximate
    /// for near-singular input.
    pub fn determinant(&self) -> T {
        let mut tmp = self.rows;
        let mut det = T::one();

        for i in 1..N {
            let pivot = tmp[i - 1][i - 1];
            det = det * pivot;
            if is_degenerate(pivot) {
                trace!(row = i - 1, "determinant: degenerate pivot, normalization skipped");
            } else {
                tmp[i - 1] /= pivot;
            }

            let pivot_row = tmp[i - 1];
            for row in tmp.iter_mut().skip(i) {
                let factor = row[i - 1];
                *row -= pivot_row * factor;
            }
        }

        match tmp.last() {
            Some(last) => det * last[N - 1],
            None => det,
        }
    }

    /// Calculate the inverse of this matrix
    ///
    /// Never fails: for a singular matrix the degenerate elimination steps
    /// are skipped and the returned matrix is not a true inverse. Check the
    /// [`determinant`](Self::determinant) first when that matters.
    pub fn inversed(&self) -> Self {
        let identity = Self::identity();
        let mut tmp = [Augmented::zero(); N];
        for_each_row(&mut tmp, |i, row| {
            *row = Augmented {
                left: self.rows[i],
                right: identity.rows[i],
            };
        });

        // Zero the lower triangle
        for i in 1..N {
            let pivot = tmp[i - 1].left[i - 1];
            if is_degenerate(pivot) {
                trace!(row = i - 1, "inverse: degenerate pivot in forward pass");
                continue;
            }
            tmp[i - 1].divide(pivot);

            let pivot_row = tmp[i - 1];
            for row in tmp.iter_mut().skip(i) {
                let factor = row.left[i - 1];
                row.subtract_scaled(&pivot_row, factor);
            }
        }
        if let Some(last) = tmp.last_mut() {
            let pivot = last.left[N - 1];
            if is_degenerate(pivot) {
                trace!(row = N - 1, "inverse: degenerate final pivot");
            } else {
                last.divide(pivot);
            }
        }

        // Zero the upper triangle
        for i in (0..N.saturating_sub(1)).rev() {
            let pivot_row = tmp[i + 1];
            if is_degenerate(pivot_row.left[i + 1]) {
                trace!(row = i + 1, "inverse: degenerate pivot in backward pass");
                continue;
            }
            for row in tmp.iter_mut().take(i + 1) {
                let factor = row.left[i + 1];
                row.subtract_scaled(&pivot_row, factor);
            }
        }

        let mut rows = [Row::zero(); N];
        for_each_row(&mut rows, |i, row| *row = tmp[i].right);
        Self { rows }
    }

    /// Invert in place
    #[inline]
    pub fn inverse(&mut self) -> &mut Self {
        *self = self.inversed();
        self
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows
            .iter()
            .zip(&other.rows)
            .all(|(a, b)| a.iter().zip(b.iter()).all(|(x, y)| (*x - *y).abs() <= epsilon))
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: T) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl<T: Scalar> SquareMatrix<T, 3> {
    /// Create a 3×3 matrix from 9 row-major elements
    #[inline]
    pub fn from_elements(e: [T; 9]) -> Self {
        Self::from_fn(|i, j| e[i * 3 + j])
    }
}

impl<T: Scalar> SquareMatrix<T, 4> {
    /// Create a 4×4 matrix from 16 row-major elements
    #[inline]
    pub fn from_elements(e: [T; 16]) -> Self {
        Self::from_fn(|i, j| e[i * 4 + j])
    }
}

macro_rules! identity_constants {
    ($($t:ty),*) => {$(
        impl SquareMatrix<$t, 3> {
            /// 3×3 identity
            pub const IDENTITY: Self = Self::from_rows([
                Row::new([1.0, 0.0, 0.0]),
                Row::new([0.0, 1.0, 0.0]),
                Row::new([0.0, 0.0, 1.0]),
            ]);
        }

        impl SquareMatrix<$t, 4> {
            /// 4×4 identity
            pub const IDENTITY: Self = Self::from_rows([
                Row::new([1.0, 0.0, 0.0, 0.0]),
                Row::new([0.0, 1.0, 0.0, 0.0]),
                Row::new([0.0, 0.0, 1.0, 0.0]),
                Row::new([0.0, 0.0, 0.0, 1.0]),
            ]);
        }
    )*};
}

identity_constants!(f32, f64);

impl<T: Scalar, const N: usize> Default for SquareMatrix<T, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> From<[[T; N]; N]> for SquareMatrix<T, N> {
    fn from(m: [[T; N]; N]) -> Self {
        Self {
            rows: m.map(Row::new),
        }
    }
}

impl<T, const N: usize> Index<usize> for SquareMatrix<T, N> {
    type Output = Row<T, N>;

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl<T, const N: usize> IndexMut<usize> for SquareMatrix<T, N> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

impl<T: Scalar, const N: usize> Mul for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Scalar, const N: usize> MulAssign for SquareMatrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<T: Scalar, const N: usize> Mul<T> for SquareMatrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<T: Scalar, const N: usize> Add for SquareMatrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        SquareMatrix::add(&self, &rhs)
    }
}

impl<T: Scalar, const N: usize> AddAssign for SquareMatrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (row, other) in self.rows.iter_mut().zip(rhs.rows) {
            *row += other;
        }
    }
}

impl<T: Scalar, const N: usize> Sub for SquareMatrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl<T: Scalar, const N: usize> SubAssign for SquareMatrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (row, other) in self.rows.iter_mut().zip(rhs.rows) {
            *row -= other;
        }
    }
}

/// Row vector × matrix
impl<T: Scalar, const N: usize> Mul<SquareMatrix<T, N>> for Row<T, N> {
    type Output = Row<T, N>;

    fn mul(self, rhs: SquareMatrix<T, N>) -> Self::Output {
        let mut acc = Row::zero();
        for (row, &weight) in rhs.rows.iter().zip(self.iter()) {
            acc += *row * weight;
        }
        acc
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for SquareMatrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, ")")
    }
}
