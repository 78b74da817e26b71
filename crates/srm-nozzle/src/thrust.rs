//! Nozzle thrust coefficient.

use crate::error::{NozzleError, NozzleResult};
use crate::relations::validation;

/// Thrust coefficient C_F (Huzel and Huang, Eq. 1-33a).
///
/// C_F = sqrt( 2 g^2 / (g-1) * (2/(g+1))^((g+1)/(g-1))
///           * (1 - (p_e/p_c)^((g-1)/g)) )
///
/// With the ambient correction, C_F += eps * (p_e - p_a) / p_c. Ambient
/// pressure and expansion ratio must be supplied together or not at all;
/// supplying exactly one is an argument error, not a silent default.
pub fn thrust_coefficient(
    chamber_pressure_pa: f64,
    exit_pressure_pa: f64,
    gamma: f64,
    ambient_pressure_pa: Option<f64>,
    expansion_ratio: Option<f64>,
) -> NozzleResult<f64> {
    if ambient_pressure_pa.is_some() != expansion_ratio.is_some() {
        return Err(NozzleError::ArgumentMismatch {
            what: "ambient pressure and expansion ratio must be provided together",
        });
    }
    let g = validation::validate_gamma(gamma)?;
    let chamber_pressure_pa =
        validation::validate_physical(chamber_pressure_pa, "chamber pressure must be positive")?;
    let exit_pressure_pa =
        validation::validate_physical(exit_pressure_pa, "exit pressure must be positive")?;

    let pressure_ratio = exit_pressure_pa / chamber_pressure_pa;
    let radicand = 2.0 * g * g / (g - 1.0)
        * (2.0 / (g + 1.0)).powf((g + 1.0) / (g - 1.0))
        * (1.0 - pressure_ratio.powf((g - 1.0) / g));

    // Negative radicand means p_e >= p_c: an upstream geometry/pressure
    // inconsistency, surfaced instead of producing NaN
    if radicand < 0.0 {
        return Err(NozzleError::NonPhysical {
            what: "thrust coefficient radicand (exit pressure exceeds chamber pressure)",
        });
    }

    let mut c_f = radicand.sqrt();
    if let (Some(p_a), Some(eps)) = (ambient_pressure_pa, expansion_ratio) {
        if !p_a.is_finite() || p_a < 0.0 {
            return Err(NozzleError::InvalidProperty {
                what: "ambient pressure must be non-negative and finite",
            });
        }
        if !eps.is_finite() || eps <= 1.0 {
            return Err(NozzleError::InvalidGeometry {
                what: "expansion ratio must exceed 1 for a supersonic nozzle",
            });
        }
        c_f += eps * (exit_pressure_pa - p_a) / chamber_pressure_pa;
    }

    Ok(c_f)
}
