//! Error types for the burn simulation pipeline.

use srm_combustion::CombustionError;
use srm_grain::GrainError;
use srm_nozzle::NozzleError;
use thiserror::Error;

/// Errors encountered while simulating a burn.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Grain error: {0}")]
    Grain(#[from] GrainError),

    #[error("Nozzle error: {0}")]
    Nozzle(#[from] NozzleError),

    #[error("Combustion error: {0}")]
    Combustion(#[from] CombustionError),
}

pub type SimResult<T> = Result<T, SimError>;
