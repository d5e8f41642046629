//! Error types for versus-region

use thiserror::Error;

/// Errors that can occur while comparing label maps
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] versus_core::Error),

    /// An aggregate measure has no defined value for these inputs
    #[error("{measure} is undefined: {reason}")]
    UndefinedAggregate {
        measure: &'static str,
        reason: String,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
