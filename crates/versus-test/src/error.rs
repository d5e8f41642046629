//! Error types for the test framework

use thiserror::Error;

/// Failures recorded during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Vector comparison failed on length
    #[error("vector comparison failed at index {index}: length {actual}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Vector comparison failed on an element
    #[error(
        "vector comparison failed at index {index}, element {position}: expected {expected}, got {actual}, delta {delta}"
    )]
    VectorMismatch {
        index: usize,
        position: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Pixel array comparison failed on shape
    #[error("pixel array comparison failed at index {index}: shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        index: usize,
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    /// Pixel array comparison failed on a value
    #[error("pixel array comparison failed at index {index}: ({row}, {col}, {band})")]
    PixelMismatch {
        index: usize,
        row: usize,
        col: usize,
        band: usize,
    },

    /// Boolean check failed
    #[error("check failed at index {index}: {what}")]
    CheckFailed { index: usize, what: String },

    /// A fixture could not be built
    #[error("fixture: {0}")]
    Fixture(#[from] versus_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
