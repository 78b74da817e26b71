//! Steady-burn performance pipeline for cylindrical-core solid motors.
//!
//! Provides:
//! - Burn pipeline: geometry -> chamber pressure -> burn rate -> exit
//!   pressure -> thrust -> cumulative time integration
//! - `PerformanceHistory` result record with derived metrics
//!
//! The pipeline is a single forward pass over the grain's burn profile:
//! pressure at each sample depends only on the instantaneous burn-area
//! ratio, never on prior history.

pub mod error;
pub mod history;
pub mod pipeline;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use history::PerformanceHistory;
pub use pipeline::{simulate_burn, SimOptions};
