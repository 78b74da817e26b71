//! Combustion model trait and the standard equilibrium implementation.

use crate::error::{CombustionError, CombustionResult};
use srm_core::units::constants::R_UNIVERSAL;

/// Strategy for combustion-gas performance quantities.
///
/// The burn pipeline treats chamber pressure as an opaque pure function of
/// the burn-area ratio; alternative combustion models (tabulated, two-phase,
/// finite-rate) can be substituted without touching the pipeline.
/// Implementations must be thread-safe (Send + Sync).
pub trait CombustionModel: Send + Sync {
    /// Model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Characteristic velocity c* [m/s] from gas properties.
    fn c_star(
        &self,
        gamma: f64,
        molar_mass_kg_per_mol: f64,
        chamber_temp_k: f64,
    ) -> CombustionResult<f64>;

    /// Steady chamber pressure [Pa] for one burn-area ratio K = A_b / A_t.
    fn chamber_pressure(
        &self,
        burn_area_ratio: f64,
        burn_coefficient: f64,
        burn_exponent: f64,
        density_kg_per_m3: f64,
        c_star_m_per_s: f64,
    ) -> CombustionResult<f64>;

    /// Chamber pressure for an ordered sequence of burn-area ratios, one
    /// pressure per input.
    fn chamber_pressure_profile(
        &self,
        burn_area_ratios: &[f64],
        burn_coefficient: f64,
        burn_exponent: f64,
        density_kg_per_m3: f64,
        c_star_m_per_s: f64,
    ) -> CombustionResult<Vec<f64>> {
        burn_area_ratios
            .iter()
            .map(|&k| {
                self.chamber_pressure(
                    k,
                    burn_coefficient,
                    burn_exponent,
                    density_kg_per_m3,
                    c_star_m_per_s,
                )
            })
            .collect()
    }
}

/// Equilibrium combustion: ideal-gas c* and the steady mass-balance chamber
/// pressure p_c = (K rho a c*)^(1 / (1 - n)).
#[derive(Clone, Copy, Debug, Default)]
pub struct EquilibriumCombustion;

impl CombustionModel for EquilibriumCombustion {
    fn name(&self) -> &str {
        "equilibrium"
    }

    fn c_star(
        &self,
        gamma: f64,
        molar_mass_kg_per_mol: f64,
        chamber_temp_k: f64,
    ) -> CombustionResult<f64> {
        let gamma = validation::validate_gamma(gamma)?;
        let mm = validation::validate_property(
            molar_mass_kg_per_mol,
            "molar mass must be positive and finite",
        )?;
        let t_c = validation::validate_property(
            chamber_temp_k,
            "chamber temperature must be positive and finite",
        )?;

        let r_specific = R_UNIVERSAL / mm;
        let c_star = (gamma * r_specific * t_c).sqrt()
            / (gamma * (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0))));

        validation::validate_physical(c_star, "characteristic velocity")
    }

    fn chamber_pressure(
        &self,
        burn_area_ratio: f64,
        burn_coefficient: f64,
        burn_exponent: f64,
        density_kg_per_m3: f64,
        c_star_m_per_s: f64,
    ) -> CombustionResult<f64> {
        let k = validation::validate_physical(burn_area_ratio, "burn-area ratio must be positive")?;
        if !burn_exponent.is_finite() || burn_exponent >= 1.0 {
            return Err(CombustionError::InvalidProperty {
                what: "burn-rate exponent must be below 1 for a stable motor",
            });
        }
        let a = validation::validate_property(
            burn_coefficient,
            "burn-rate coefficient must be positive and finite",
        )?;
        let rho = validation::validate_property(
            density_kg_per_m3,
            "solid density must be positive and finite",
        )?;
        let c = validation::validate_physical(
            c_star_m_per_s,
            "characteristic velocity must be positive",
        )?;

        let p_c = (k * rho * a * c).powf(1.0 / (1.0 - burn_exponent));
        validation::validate_physical(p_c, "chamber pressure")
    }
}

/// Validation helpers for propellant and gas quantities.
pub(crate) mod validation {
    use super::*;
    use srm_core::{ensure_finite, ensure_positive};

    /// Ensure gamma is finite and strictly above 1.
    pub fn validate_gamma(gamma: f64) -> CombustionResult<f64> {
        let what = "gamma must be finite and strictly greater than 1";
        let g = ensure_finite(gamma, "gamma")
            .map_err(|_| CombustionError::InvalidProperty { what })?;
        if g <= 1.0 {
            return Err(CombustionError::InvalidProperty { what });
        }
        Ok(g)
    }

    /// Ensure a propellant or gas property is positive and finite.
    pub fn validate_property(v: f64, what: &'static str) -> CombustionResult<f64> {
        ensure_positive(v, what).map_err(|_| CombustionError::InvalidProperty { what })
    }

    /// Ensure a flow quantity is positive and finite.
    pub fn validate_physical(v: f64, what: &'static str) -> CombustionResult<f64> {
        ensure_positive(v, what).map_err(|_| CombustionError::NonPhysical { what })
    }
}
