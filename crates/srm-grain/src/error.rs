//! Grain geometry errors.

use thiserror::Error;

/// Result type for grain operations.
pub type GrainResult<T> = Result<T, GrainError>;

/// Errors that can occur while describing or evolving a grain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrainError {
    /// Non-positive or inconsistent dimensions.
    #[error("Invalid grain geometry: {what}")]
    InvalidGeometry { what: &'static str },
}
