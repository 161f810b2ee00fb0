//! Angle units
//!
//! The rotation builders take anything convertible into [`Radians`], so
//! `Degrees(90.0)` works wherever `Radians(FRAC_PI_2)` does.

use num_traits::Float;

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians<T>(pub T);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees<T>(pub T);

impl<T: Float> Radians<T> {
    /// `(sin, cos)` of the angle
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.0.sin_cos()
    }
}

impl<T: Float> From<Degrees<T>> for Radians<T> {
    fn from(d: Degrees<T>) -> Self {
        Radians(d.0.to_radians())
    }
}

impl<T: Float> From<Radians<T>> for Degrees<T> {
    fn from(r: Radians<T>) -> Self {
        Degrees(r.0.to_degrees())
    }
}
