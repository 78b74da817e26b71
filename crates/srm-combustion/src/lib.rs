//! Combustion-gas properties for solid-motor performance modeling.
//!
//! Provides:
//! - `PropellantProperties`: validated propellant and exhaust-gas data
//! - `CombustionModel`: pluggable strategy for characteristic velocity and
//!   steady chamber pressure
//! - `EquilibriumCombustion`: the standard mass-balance implementation

pub mod error;
pub mod model;
pub mod propellant;

pub use error::{CombustionError, CombustionResult};
pub use model::{CombustionModel, EquilibriumCombustion};
pub use propellant::PropellantProperties;
