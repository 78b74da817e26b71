//! Closed-form isentropic area-ratio relation.

use crate::error::{NozzleError, NozzleResult};

/// Expansion ratio A_e / A_t as a function of the pressure ratio p_e / p_c.
///
/// Rocket Propulsion Elements, 8th ed., Eq. 3-25:
///
/// A_t / A_e = ((g+1)/2)^(1/(g-1)) * (p_e/p_c)^(1/g)
///           * [ (g+1)/(g-1) * (1 - (p_e/p_c)^((g-1)/g)) ]^(1/2)
///
/// The relation is evaluated directly (no iteration); the inverse direction
/// is transcendental and handled by [`crate::solver::pressure_ratio`].
pub fn expansion_ratio(pressure_ratio: f64, gamma: f64) -> NozzleResult<f64> {
    let g = validation::validate_gamma(gamma)?;
    if !pressure_ratio.is_finite() || pressure_ratio <= 0.0 || pressure_ratio >= 1.0 {
        return Err(NozzleError::NonPhysical {
            what: "pressure ratio must lie in (0, 1)",
        });
    }

    let p = pressure_ratio;
    let throat_to_exit = ((g + 1.0) / 2.0).powf(1.0 / (g - 1.0))
        * p.powf(1.0 / g)
        * ((g + 1.0) / (g - 1.0) * (1.0 - p.powf((g - 1.0) / g))).sqrt();

    validation::validate_physical(throat_to_exit, "area ratio")?;
    Ok(1.0 / throat_to_exit)
}

/// Validation helpers for nozzle quantities.
pub(crate) mod validation {
    use crate::error::{NozzleError, NozzleResult};
    use srm_core::{ensure_finite, ensure_positive};

    /// Ensure gamma is finite and strictly above 1.
    pub fn validate_gamma(gamma: f64) -> NozzleResult<f64> {
        let what = "gamma must be finite and strictly greater than 1";
        let g =
            ensure_finite(gamma, "gamma").map_err(|_| NozzleError::InvalidProperty { what })?;
        if g <= 1.0 {
            return Err(NozzleError::InvalidProperty { what });
        }
        Ok(g)
    }

    /// Ensure a nozzle dimension is positive and finite.
    pub fn validate_dimension(v: f64, what: &'static str) -> NozzleResult<f64> {
        ensure_positive(v, what).map_err(|_| NozzleError::InvalidGeometry { what })
    }

    /// Ensure a flow quantity is positive and finite.
    pub fn validate_physical(v: f64, what: &'static str) -> NozzleResult<f64> {
        ensure_positive(v, what).map_err(|_| NozzleError::NonPhysical { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_nozzle_table_point() {
        // gamma = 1.2: p_e/p_c = 0.0245 corresponds to an expansion ratio
        // near 6.065
        let er = expansion_ratio(0.0245, 1.2).unwrap();
        assert!((er - 6.0648).abs() / 6.0648 < 1e-3);
    }

    #[test]
    fn decreasing_in_pressure_ratio() {
        // Larger expansion means lower exit pressure
        let hi = expansion_ratio(0.01, 1.2).unwrap();
        let lo = expansion_ratio(0.1, 1.2).unwrap();
        assert!(hi > lo);
        assert!(lo > 1.0);
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        assert!(expansion_ratio(0.0, 1.2).is_err());
        assert!(expansion_ratio(1.0, 1.2).is_err());
        assert!(expansion_ratio(1.5, 1.2).is_err());
        assert!(expansion_ratio(-0.1, 1.2).is_err());
        assert!(expansion_ratio(0.02, 1.0).is_err());
        assert!(expansion_ratio(0.02, f64::NAN).is_err());
    }
}
