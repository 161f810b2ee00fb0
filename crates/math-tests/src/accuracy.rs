//! Error statistics
//!
//! Packed normals are judged by the angle between input and decoded
//! direction; matrices by their largest elementwise deviation.

use mrmath_core::{Norm3f, SquareMatrix};

/// Angular error statistics over a set of normals, in degrees
#[derive(Debug, Clone, Default)]
pub struct AngularStats {
    /// Mean error
    pub mean: f64,
    /// Maximum error
    pub max: f64,
    /// 95th percentile
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl AngularStats {
    /// Compute statistics from per-sample errors
    pub fn from_errors(errors: &[f64]) -> Self {
        if errors.is_empty() {
            return Self::default();
        }

        let mut sorted = errors.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let p95_idx = ((count as f64) * 0.95) as usize;

        Self {
            mean,
            max: sorted[count - 1],
            p95: sorted[p95_idx.min(count - 1)],
            count,
        }
    }

    /// Check all errors stay below `limit` degrees
    pub fn within(&self, limit: f64) -> bool {
        self.max <= limit
    }
}

/// Angle between two normals in degrees, computed in `f64`
///
/// Uses `atan2(|a × b|, a · b)`, which stays accurate for tiny angles where
/// `acos` of an `f32`-rounded dot product would not.
pub fn angular_error_degrees(a: Norm3f, b: Norm3f) -> f64 {
    let a = a.as_vec().map(f64::from);
    let b = b.as_vec().map(f64::from);
    a.cross(&b).length().atan2(a.dot(&b)).to_degrees()
}

/// Round-trip `normals` through `codec` and collect the angular error
pub fn angular_stats<F>(normals: &[Norm3f], codec: F) -> AngularStats
where
    F: Fn(Norm3f) -> Norm3f,
{
    let errors: Vec<f64> = normals
        .iter()
        .map(|&n| angular_error_degrees(n, codec(n)))
        .collect();
    AngularStats::from_errors(&errors)
}

/// Largest absolute elementwise difference between two matrices
pub fn max_abs_diff<const N: usize>(a: &SquareMatrix<f64, N>, b: &SquareMatrix<f64, N>) -> f64 {
    let mut max = 0.0f64;
    for i in 0..N {
        for j in 0..N {
            max = max.max((a[i][j] - b[i][j]).abs());
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let errors: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let stats = AngularStats::from_errors(&errors);
        assert_eq!(stats.count, 100);
        assert_eq!(stats.max, 99.0);
        assert_eq!(stats.p95, 95.0);
        assert!((stats.mean - 49.5).abs() < 1e-12);
        assert!(stats.within(99.0));
        assert!(!stats.within(98.0));

        assert_eq!(AngularStats::from_errors(&[]).count, 0);
    }

    #[test]
    fn test_angular_error() {
        assert!(angular_error_degrees(Norm3f::X, Norm3f::X) < 1e-3);
        assert!((angular_error_degrees(Norm3f::X, Norm3f::Y) - 90.0).abs() < 1e-4);
        assert!((angular_error_degrees(Norm3f::Z, -Norm3f::Z) - 180.0).abs() < 1e-4);
    }
}
