//! # math-tests
//!
//! Property and parity testing framework for mrmath.
//!
//! This crate provides:
//! - Seeded random matrices and unit normals ([`patterns`])
//! - An independent partial-pivoting reference for determinant and inverse
//!   ([`reference`])
//! - Error statistics for matrices and packed normals ([`accuracy`])
//!
//! ## Test Categories
//!
//! 1. **Matrix properties**: identity, transpose, inverse, determinant
//! 2. **Reference parity**: elimination without pivoting vs pivoted LU
//! 3. **Normal packing**: round-trip error per packing tier
//! 4. **PackedNorm24**: exhaustive byte-view round trip

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{AngularStats, angular_error_degrees, angular_stats, max_abs_diff};
pub use patterns::{NormalPattern, generate_normals, random_invertible, random_matrix};

use std::sync::Once;

/// Install a fmt subscriber filtered by `RUST_LOG`, once per process
///
/// Degenerate-pivot events from the elimination code are emitted at
/// `trace` level, so `RUST_LOG=mrmath_core=trace` shows them.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
