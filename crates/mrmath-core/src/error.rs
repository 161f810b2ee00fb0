//! Error types for mrmath
//!
//! The numeric kernels never fail. Errors only come from the slice-shaped
//! entry points: building a matrix from a flat slice and the batch packing
//! routines that write into caller-provided buffers.

use thiserror::Error;

/// Result type for mrmath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mrmath operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Destination buffer is too short
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Wrong number of scalars for a square matrix
    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    Dimension { expected: usize, actual: usize },

    /// Vertex stride cannot hold one packed element
    #[error("Stride {stride} is smaller than the {element}-byte element")]
    Stride { stride: usize, element: usize },
}
