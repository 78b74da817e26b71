//! Cylindrical-core grain geometry and burn profile sampling.

use crate::error::{GrainError, GrainResult};
use srm_core::units::Length;
use srm_core::{ensure_finite, ensure_positive};
use std::f64::consts::PI;

fn dimension(v: f64, what: &'static str) -> GrainResult<f64> {
    ensure_positive(v, what).map_err(|_| GrainError::InvalidGeometry { what })
}

/// Number of radial samples used when none is requested.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Cylindrical grain with a circular core port.
///
/// The grain burns radially outward from the inner radius toward the outer
/// radius; the burning surface at any instant is the lateral surface of the
/// bore. End faces are inhibited.
#[derive(Clone, Copy, Debug)]
pub struct GrainGeometry {
    inner_radius_m: f64,
    outer_radius_m: f64,
    length_m: f64,
}

impl GrainGeometry {
    /// Create a validated grain geometry.
    pub fn new(inner_radius: Length, outer_radius: Length, length: Length) -> GrainResult<Self> {
        let r_in = dimension(inner_radius.value, "inner radius must be positive and finite")?;
        let l = dimension(length.value, "grain length must be positive and finite")?;
        let r_ex = ensure_finite(outer_radius.value, "outer radius").map_err(|_| {
            GrainError::InvalidGeometry {
                what: "outer radius must be finite",
            }
        })?;
        if r_ex <= r_in {
            return Err(GrainError::InvalidGeometry {
                what: "outer radius must exceed inner radius",
            });
        }

        Ok(Self {
            inner_radius_m: r_in,
            outer_radius_m: r_ex,
            length_m: l,
        })
    }

    /// Inner (port) radius [m].
    pub fn inner_radius_m(&self) -> f64 {
        self.inner_radius_m
    }

    /// Outer (case) radius [m].
    pub fn outer_radius_m(&self) -> f64 {
        self.outer_radius_m
    }

    /// Grain length [m].
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Web thickness: radial distance the burn front travels [m].
    pub fn web_thickness_m(&self) -> f64 {
        self.outer_radius_m - self.inner_radius_m
    }

    /// Burning surface area when the front has regressed a distance `x` from
    /// the inner radius [m^2].
    pub fn burn_area_at_m2(&self, x: f64) -> f64 {
        2.0 * PI * (self.inner_radius_m + x) * self.length_m
    }

    /// Sample the burn-front evolution at `resolution` evenly spaced radial
    /// positions from the inner to the outer radius.
    ///
    /// Both the radial positions and the burning areas are strictly
    /// increasing: a cylindrical bore burns progressively.
    pub fn burn_profile(&self, resolution: usize) -> GrainResult<BurnProfile> {
        if resolution < 2 {
            return Err(GrainError::InvalidGeometry {
                what: "burn profile needs at least two samples",
            });
        }

        let web = self.web_thickness_m();
        let dx = web / (resolution - 1) as f64;

        let mut x_m = Vec::with_capacity(resolution);
        let mut burn_area_m2 = Vec::with_capacity(resolution);
        for i in 0..resolution {
            // Pin the final sample to the exact web thickness
            let x = if i == resolution - 1 { web } else { i as f64 * dx };
            x_m.push(x);
            burn_area_m2.push(self.burn_area_at_m2(x));
        }

        Ok(BurnProfile { x_m, burn_area_m2 })
    }
}

/// Ordered samples of burn-front position and burning surface area.
#[derive(Clone, Debug)]
pub struct BurnProfile {
    /// Radial distance burned through, from the inner radius [m]
    pub x_m: Vec<f64>,
    /// Burning surface area at each position [m^2]
    pub burn_area_m2: Vec<f64>,
}

impl BurnProfile {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x_m.len()
    }

    /// True when the profile holds no samples.
    pub fn is_empty(&self) -> bool {
        self.x_m.is_empty()
    }
}
