//! Isentropic nozzle flow relations for solid-motor performance.
//!
//! Contains:
//! - geometry (validated throat/exit geometry, expansion ratio)
//! - relations (closed-form area-ratio relation, RPE 8th ed. Eq. 3-25)
//! - solver (Newton iteration for the pressure ratio p_e / p_c)
//! - thrust (thrust coefficient with optional ambient correction)

pub mod error;
pub mod geometry;
pub mod relations;
pub mod solver;
pub mod thrust;

pub use error::{NozzleError, NozzleResult};
pub use geometry::NozzleGeometry;
pub use relations::expansion_ratio;
pub use solver::{pressure_ratio, pressure_ratio_with, SolverConfig};
pub use thrust::thrust_coefficient;
