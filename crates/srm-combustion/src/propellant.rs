//! Validated propellant and exhaust-gas properties.

use crate::error::{CombustionError, CombustionResult};
use crate::model::validation;
use srm_core::units::constants::{BURN_RATE_REF_MPS, BURN_RATE_REF_PA};
use srm_core::units::{Density, MolarMass, Temperature};

/// Propellant and exhaust-gas properties for a steady-burn run.
///
/// The burn-rate coefficient `a` in Saint-Robert's law r = a * p^n is derived
/// once from the reference pair (3.19 mm/s at 8.26 MPa) and the exponent `n`,
/// so that the law reproduces the reference rate at the reference pressure.
#[derive(Clone, Copy, Debug)]
pub struct PropellantProperties {
    gamma: f64,
    molar_mass_kg_per_mol: f64,
    chamber_temp_k: f64,
    density_kg_per_m3: f64,
    burn_exponent: f64,
    burn_coefficient: f64,
}

impl PropellantProperties {
    /// Create validated properties, deriving the burn-rate coefficient from
    /// the reference burn-rate/pressure pair.
    pub fn new(
        gamma: f64,
        molar_mass: MolarMass,
        chamber_temp: Temperature,
        density: Density,
        burn_exponent: f64,
    ) -> CombustionResult<Self> {
        let a = BURN_RATE_REF_MPS * BURN_RATE_REF_PA.powf(-burn_exponent);
        Self::with_burn_coefficient(gamma, molar_mass, chamber_temp, density, burn_exponent, a)
    }

    /// Create validated properties with an explicit burn-rate coefficient
    /// [m s^-1 Pa^-n].
    pub fn with_burn_coefficient(
        gamma: f64,
        molar_mass: MolarMass,
        chamber_temp: Temperature,
        density: Density,
        burn_exponent: f64,
        burn_coefficient: f64,
    ) -> CombustionResult<Self> {
        let gamma = validation::validate_gamma(gamma)?;
        let mm = validation::validate_property(
            molar_mass.value,
            "molar mass must be positive and finite",
        )?;
        let t_c = validation::validate_property(
            chamber_temp.value,
            "chamber temperature must be positive and finite",
        )?;
        let rho = validation::validate_property(
            density.value,
            "solid density must be positive and finite",
        )?;
        // The mass-balance exponent 1/(1-n) requires n < 1
        if !burn_exponent.is_finite() || burn_exponent <= 0.0 || burn_exponent >= 1.0 {
            return Err(CombustionError::InvalidProperty {
                what: "burn-rate exponent must lie in (0, 1)",
            });
        }
        let burn_coefficient = validation::validate_property(
            burn_coefficient,
            "burn-rate coefficient must be positive and finite",
        )?;

        Ok(Self {
            gamma,
            molar_mass_kg_per_mol: mm,
            chamber_temp_k: t_c,
            density_kg_per_m3: rho,
            burn_exponent,
            burn_coefficient,
        })
    }

    /// Ratio of specific heats of the exhaust gas.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Exhaust-gas molar mass [kg/mol].
    pub fn molar_mass_kg_per_mol(&self) -> f64 {
        self.molar_mass_kg_per_mol
    }

    /// Combustion chamber temperature [K].
    pub fn chamber_temp_k(&self) -> f64 {
        self.chamber_temp_k
    }

    /// Solid propellant density [kg/m^3].
    pub fn density_kg_per_m3(&self) -> f64 {
        self.density_kg_per_m3
    }

    /// Burn-rate exponent n (dimensionless).
    pub fn burn_exponent(&self) -> f64 {
        self.burn_exponent
    }

    /// Burn-rate coefficient a [m s^-1 Pa^-n].
    pub fn burn_coefficient(&self) -> f64 {
        self.burn_coefficient
    }

    /// Saint-Robert regression rate r = a * p_c^n [m/s].
    pub fn regression_rate_m_per_s(&self, chamber_pressure_pa: f64) -> CombustionResult<f64> {
        let p_c = validation::validate_physical(
            chamber_pressure_pa,
            "chamber pressure must be positive for the burn law",
        )?;
        Ok(self.burn_coefficient * p_c.powf(self.burn_exponent))
    }
}
