//! Linear algebra
//!
//! This module provides:
//! - [`Row`], the fixed-length tuple everything else is built from
//! - 2D/3D vectors, unit normals and angle units
//! - [`SquareMatrix`] with elimination-based determinant and inverse
//! - 4×4 affine transform builders

pub mod angle;
pub mod matrix;
mod parallel;
pub mod row;
pub mod transform;
pub mod vector;

pub use angle::{Degrees, Radians};
pub use matrix::{Matrix3, Matrix3d, Matrix3f, Matrix4, Matrix4d, Matrix4f, SquareMatrix};
pub use row::{Row, Scalar};
pub use vector::{Norm3, Norm3d, Norm3f, Vec2, Vec2f, Vec3, Vec3d, Vec3f};
