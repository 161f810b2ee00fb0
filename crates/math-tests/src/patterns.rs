//! Test input generation
//!
//! Everything is driven by a seeded `ChaCha8Rng` so failures reproduce.

use std::f64::consts::TAU;

use mrmath_core::{Norm3f, SquareMatrix};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sets of unit normals
#[derive(Debug, Clone, Copy)]
pub enum NormalPattern {
    /// ±X, ±Y, ±Z
    Axes,
    /// The 8 normalized cube diagonals
    Diagonals,
    /// Directions on the `z = 0` equator, where the octahedral fold sits
    Equator(usize),
    /// Uniform on the sphere with seed
    Random(u64),
    /// A latitude/longitude grid
    Grid { lat: usize, lon: usize },
}

/// Generate unit normals for a pattern
pub fn generate_normals(pattern: NormalPattern, count: usize) -> Vec<Norm3f> {
    match pattern {
        NormalPattern::Axes => vec![
            Norm3f::X,
            -Norm3f::X,
            Norm3f::Y,
            -Norm3f::Y,
            Norm3f::Z,
            -Norm3f::Z,
        ],
        NormalPattern::Diagonals => {
            let mut out = Vec::with_capacity(8);
            for sx in [-1.0, 1.0] {
                for sy in [-1.0, 1.0] {
                    for sz in [-1.0, 1.0] {
                        out.push(Norm3f::new(sx, sy, sz));
                    }
                }
            }
            out
        }
        NormalPattern::Equator(n) => (0..n)
            .map(|i| {
                let phi = TAU * i as f64 / n as f64;
                Norm3f::new(phi.cos() as f32, phi.sin() as f32, 0.0)
            })
            .collect(),
        NormalPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    // Uniform on the sphere: z uniform in [-1, 1], angle uniform
                    let z: f64 = rng.gen_range(-1.0..=1.0);
                    let phi: f64 = rng.gen_range(0.0..TAU);
                    let r = (1.0 - z * z).max(0.0).sqrt();
                    Norm3f::new((r * phi.cos()) as f32, (r * phi.sin()) as f32, z as f32)
                })
                .collect()
        }
        NormalPattern::Grid { lat, lon } => {
            let mut out = Vec::with_capacity((lat + 1) * lon);
            for i in 0..=lat {
                let theta = std::f64::consts::PI * i as f64 / lat as f64;
                for j in 0..lon {
                    let phi = TAU * j as f64 / lon as f64;
                    out.push(Norm3f::new(
                        (theta.sin() * phi.cos()) as f32,
                        (theta.sin() * phi.sin()) as f32,
                        theta.cos() as f32,
                    ));
                }
            }
            out
        }
    }
}

/// Matrix with elements uniform in `[-1, 1]`
pub fn random_matrix<const N: usize>(rng: &mut ChaCha8Rng) -> SquareMatrix<f64, N> {
    SquareMatrix::from_fn(|_, _| rng.gen_range(-1.0..=1.0))
}

/// Random, diagonally dominant and therefore well-conditioned matrix
///
/// The diagonal is pushed to magnitude `N + 1` with a random sign, which
/// keeps every pivot away from zero even without row exchange.
pub fn random_invertible<const N: usize>(rng: &mut ChaCha8Rng) -> SquareMatrix<f64, N> {
    let mut m = random_matrix::<N>(rng);
    for i in 0..N {
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        m[i][i] = sign * (N as f64 + 1.0 + rng.gen_range(0.0..1.0));
    }
    m
}
