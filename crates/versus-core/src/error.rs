//! Error types for versus-core
//!
//! Provides a unified error type for the algebra and pixel-array operations.
//! Only shape preconditions are reported here: numeric degeneracies such as
//! `0/0`, `x/0` and `ln(0)` are resolved by the [`scalar`](crate::scalar)
//! edge-case policy and never become errors.

use thiserror::Error;

/// versus-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Two vectors taking part in a binary operation differ in length
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Two pixel arrays differ in row or column count
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Two pixel arrays agree in rows/cols but not in band count
    #[error("band count mismatch: expected {expected}, got {actual}")]
    BandMismatch { expected: usize, actual: usize },

    /// Invalid pixel array dimensions
    #[error("invalid pixel array dimensions: {rows}x{cols}x{bands}")]
    InvalidDimension {
        rows: usize,
        cols: usize,
        bands: usize,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for versus-core operations
pub type Result<T> = std::result::Result<T, Error>;
