//! Validated nozzle geometry.

use crate::error::{NozzleError, NozzleResult};
use crate::relations::validation;
use srm_core::units::{Area, Length};
use std::f64::consts::PI;

/// Converging-diverging nozzle geometry.
///
/// The throat area is computed from the throat diameter with the circular
/// area formula A_t = pi * D_t^2 / 4. Some informal references omit the
/// quarter factor; the convention here is pinned by a unit test because it
/// scales every downstream pressure and thrust by a factor of four.
#[derive(Clone, Copy, Debug)]
pub struct NozzleGeometry {
    throat_area_m2: f64,
    exit_area_m2: f64,
}

impl NozzleGeometry {
    /// Create a validated geometry from throat diameter and exit area.
    pub fn new(throat_diameter: Length, exit_area: Area) -> NozzleResult<Self> {
        let d_t = validation::validate_dimension(
            throat_diameter.value,
            "throat diameter must be positive and finite",
        )?;
        Self::from_areas(PI * d_t * d_t / 4.0, exit_area.value)
    }

    /// Create a validated geometry directly from areas [m^2].
    pub fn from_areas(throat_area_m2: f64, exit_area_m2: f64) -> NozzleResult<Self> {
        let throat_area_m2 = validation::validate_dimension(
            throat_area_m2,
            "throat area must be positive and finite",
        )?;
        let exit_area_m2 = validation::validate_dimension(
            exit_area_m2,
            "exit area must be positive and finite",
        )?;
        if exit_area_m2 <= throat_area_m2 {
            return Err(NozzleError::InvalidGeometry {
                what: "exit area must exceed throat area for a supersonic nozzle",
            });
        }
        Ok(Self {
            throat_area_m2,
            exit_area_m2,
        })
    }

    /// Throat area [m^2].
    pub fn throat_area_m2(&self) -> f64 {
        self.throat_area_m2
    }

    /// Exit area [m^2].
    pub fn exit_area_m2(&self) -> f64 {
        self.exit_area_m2
    }

    /// Expansion ratio epsilon = A_e / A_t (> 1).
    pub fn expansion_ratio(&self) -> f64 {
        self.exit_area_m2 / self.throat_area_m2
    }
}
