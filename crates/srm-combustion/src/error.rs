//! Combustion property errors.

use thiserror::Error;

/// Result type for combustion operations.
pub type CombustionResult<T> = Result<T, CombustionError>;

/// Errors that can occur during combustion property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombustionError {
    /// Propellant or gas property outside its physical range.
    #[error("Invalid propellant property: {what}")]
    InvalidProperty { what: &'static str },

    /// Intermediate or final value outside its physical domain.
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}
