//! Newton solver for the pressure-ratio direction of the area-ratio relation.

use crate::error::{NozzleError, NozzleResult};
use crate::relations::{expansion_ratio, validation};
use tracing::debug;

/// Pressure-ratio solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Maximum Newton iterations
    pub max_iterations: usize,
    /// Relative tolerance on the area-ratio residual
    pub rel_tol: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            rel_tol: 1e-9,
            line_search_beta: 0.5,
            max_line_search_iters: 20,
        }
    }
}

/// Solve the area-ratio relation for p_e / p_c with default configuration.
pub fn pressure_ratio(expansion_ratio: f64, gamma: f64) -> NozzleResult<f64> {
    pressure_ratio_with(expansion_ratio, gamma, &SolverConfig::default())
}

/// Solve the area-ratio relation for p_e / p_c.
///
/// Newton iteration on the residual eps - A_e/A_t(x, gamma) with a
/// finite-difference derivative, seeded at 1e-3 / eps (the ratio is always
/// small for realistic expansion ratios). Backtracking keeps the iterate
/// inside (0, 1). A residual above tolerance at exit is reported as
/// [`NozzleError::ConvergenceFailed`], never returned as an inaccurate value.
pub fn pressure_ratio_with(
    target_expansion_ratio: f64,
    gamma: f64,
    config: &SolverConfig,
) -> NozzleResult<f64> {
    let gamma = validation::validate_gamma(gamma)?;
    let eps = target_expansion_ratio;
    if !eps.is_finite() || eps <= 1.0 {
        return Err(NozzleError::InvalidGeometry {
            what: "expansion ratio must exceed 1 for a supersonic nozzle",
        });
    }

    let residual = |x: f64| -> NozzleResult<f64> { Ok(eps - expansion_ratio(x, gamma)?) };

    let mut x = 1e-3 / eps;
    let mut r = residual(x)?;
    let tol = config.rel_tol * eps;

    for iter in 0..config.max_iterations {
        if r.abs() <= tol {
            // A converged ratio at or above 1 would mean subsonic exit flow;
            // the domain clamp below keeps the iterate inside (0, 1), so this
            // is a pure postcondition check.
            if x >= 1.0 {
                return Err(NozzleError::ConvergenceFailed {
                    what: format!("converged to non-physical pressure ratio {x}"),
                });
            }
            debug!(iterations = iter, residual = r.abs(), "pressure ratio converged");
            return Ok(x);
        }

        // Finite-difference derivative of the residual
        let h = (1e-8 * x).max(1e-14);
        let r_h = residual(x + h)?;
        let slope = (r_h - r) / h;
        if !slope.is_finite() || slope == 0.0 {
            return Err(NozzleError::ConvergenceFailed {
                what: format!("degenerate slope at iteration {iter}"),
            });
        }

        let step = -r / slope;

        // Backtrack until the iterate stays in (0, 1) and the residual shrinks
        let mut alpha = 1.0;
        let mut accepted = None;
        for _ in 0..config.max_line_search_iters {
            let candidate = x + alpha * step;
            if candidate > 0.0 && candidate < 1.0 {
                let r_candidate = residual(candidate)?;
                accepted = Some((candidate, r_candidate));
                if r_candidate.abs() < r.abs() {
                    break;
                }
            }
            alpha *= config.line_search_beta;
        }
        let Some((x_new, r_new)) = accepted else {
            return Err(NozzleError::ConvergenceFailed {
                what: format!("line search stagnated at iteration {iter}"),
            });
        };

        x = x_new;
        r = r_new;
    }

    Err(NozzleError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations,
            r.abs()
        ),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_recovers_pressure_ratio(
            gamma in 1.1_f64..1.6_f64,
            p in 1e-3_f64..0.3_f64,
        ) {
            let eps = expansion_ratio(p, gamma).unwrap();
            // Only supersonic geometries are solvable
            prop_assume!(eps > 1.0 + 1e-6);
            let back = pressure_ratio(eps, gamma).unwrap();
            prop_assert!((back - p).abs() < 1e-6 * p.max(1e-3));
        }
    }
}
