//! Error types for nozzle relations.

use thiserror::Error;

/// Result type for nozzle operations.
pub type NozzleResult<T> = Result<T, NozzleError>;

/// Errors that can occur during nozzle flow calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NozzleError {
    /// Non-positive or inconsistent nozzle dimensions.
    #[error("Invalid nozzle geometry: {what}")]
    InvalidGeometry { what: &'static str },

    /// Gas property outside its physical range.
    #[error("Invalid gas property: {what}")]
    InvalidProperty { what: &'static str },

    /// Optional arguments that must be supplied together were not.
    #[error("Argument mismatch: {what}")]
    ArgumentMismatch { what: &'static str },

    /// The pressure-ratio iteration did not reach tolerance, or converged to
    /// a non-physical value.
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    /// Intermediate value outside its physical domain.
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NozzleError::ConvergenceFailed {
            what: "residual 1e-2 after 50 iterations".into(),
        };
        assert!(err.to_string().contains("Convergence failed"));
    }
}
