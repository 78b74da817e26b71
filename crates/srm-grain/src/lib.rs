//! Propellant grain geometry and burning-surface evolution.
//!
//! Models a single cylindrical-core grain burning radially outward: the
//! burning surface is the lateral surface of the growing bore.

pub mod error;
pub mod geometry;

pub use error::{GrainError, GrainResult};
pub use geometry::{BurnProfile, GrainGeometry, DEFAULT_RESOLUTION};
