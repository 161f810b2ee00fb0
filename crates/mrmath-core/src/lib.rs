//! # mrmath - matrices and packed normals for real-time graphics
//!
//! A small numeric kernel with two independent halves:
//!
//! - [`SquareMatrix`]: a const-generic `N×N` matrix stored as rows, with
//!   composition, transpose, determinant and Gauss–Jordan inversion, plus
//!   4×4 affine builders (scale, translate, axis and arbitrary-axis rotation).
//! - [`packing`]: octahedral compression of unit normals into 32, 24 or 16
//!   bit fixed-point values, with batch routines for vertex buffers.
//!
//! ## Quick Start
//!
//! ```
//! use mrmath_core::{Matrix4f, Norm3f, Radians, Vec3, pack_oct32, unpack_oct32};
//!
//! let model = Matrix4f::scale(Vec3::new([2.0, 2.0, 2.0]))
//!     * Matrix4f::rotate_z(Radians(std::f32::consts::FRAC_PI_2))
//!     * Matrix4f::translate(Vec3::new([1.0, 0.0, 0.0]));
//! let inv = model.inversed();
//! assert!((model * inv).is_identity(1e-5));
//!
//! let n = Norm3f::new(0.0, 0.6, 0.8);
//! let packed = pack_oct32(n);
//! let back = unpack_oct32(packed);
//! assert!((back.z() - 0.8).abs() < 1e-3);
//! ```
//!
//! ## Conventions
//!
//! Matrices are row-major and transform row vectors (`v * M`), so the
//! translation of [`SquareMatrix::translate`] lives in the last row and
//! `A * B` applies `A` first.
//!
//! ## Features
//!
//! - `rayon`: run the independent per-row phases of inversion on the rayon
//!   thread pool. Results are identical either way.

pub mod error;
pub mod math;
pub mod packing;

pub use error::{Error, Result};
pub use math::{
    Degrees, Matrix3, Matrix3d, Matrix3f, Matrix4, Matrix4d, Matrix4f, Norm3, Norm3d, Norm3f,
    Radians, Row, SquareMatrix, Vec2, Vec2f, Vec3, Vec3d, Vec3f,
};
pub use packing::{
    PackedNorm16, PackedNorm24, PackedNorm32, pack_oct16, pack_oct24, pack_oct32, unpack_oct16,
    unpack_oct24, unpack_oct32,
};

/// Version of mrmath
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
