//! Burn simulation pipeline.
//!
//! Orchestrates the full performance computation as a single forward pass
//! over the grain's burn profile: burn-area ratio -> chamber pressure (via
//! the injected combustion model) -> regression rate -> exit pressure ->
//! thrust -> cumulative time integration.

use crate::error::{SimError, SimResult};
use crate::history::PerformanceHistory;
use srm_combustion::{CombustionModel, PropellantProperties};
use srm_core::units::constants::P_SEA_LEVEL_PA;
use srm_grain::{GrainGeometry, DEFAULT_RESOLUTION};
use srm_nozzle::{pressure_ratio_with, thrust_coefficient, NozzleGeometry, SolverConfig};
use tracing::debug;

/// Options for a burn simulation run.
#[derive(Clone, Copy, Debug)]
pub struct SimOptions {
    /// Number of radial burn-front samples
    pub resolution: usize,
    /// Pressure-ratio solver configuration
    pub solver: SolverConfig,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            solver: SolverConfig::default(),
        }
    }
}

/// Simulate a steady burn and return its performance history.
///
/// The computation is pure: no state is held between calls, and every
/// sample depends only on the instantaneous burn-area ratio. Sea-level
/// ambient pressure is always applied to the thrust coefficient. Any
/// non-physical intermediate (non-positive regression rate, pressure out of
/// domain) aborts the run with a descriptive error; nothing is clamped or
/// substituted.
pub fn simulate_burn(
    propellant: &PropellantProperties,
    grain: &GrainGeometry,
    nozzle: &NozzleGeometry,
    combustion: &dyn CombustionModel,
    options: &SimOptions,
) -> SimResult<PerformanceHistory> {
    if options.resolution < 2 {
        return Err(SimError::InvalidArg {
            what: "resolution must be at least 2",
        });
    }
    if options.solver.max_iterations == 0 {
        return Err(SimError::InvalidArg {
            what: "solver iteration budget must be positive",
        });
    }
    if !options.solver.rel_tol.is_finite() || options.solver.rel_tol <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "solver tolerance must be positive and finite",
        });
    }

    debug!(
        model = combustion.name(),
        resolution = options.resolution,
        expansion_ratio = nozzle.expansion_ratio(),
        "starting burn simulation"
    );

    let profile = grain.burn_profile(options.resolution)?;
    let throat_area = nozzle.throat_area_m2();

    // 1. Burn-area ratio per sample
    let burn_area_ratio: Vec<f64> = profile
        .burn_area_m2
        .iter()
        .map(|&a_b| a_b / throat_area)
        .collect();

    // 2. Characteristic velocity, constant across samples
    let c_star = combustion.c_star(
        propellant.gamma(),
        propellant.molar_mass_kg_per_mol(),
        propellant.chamber_temp_k(),
    )?;

    // 3. Chamber pressure per sample from the injected combustion model
    let chamber_pressure_pa = combustion.chamber_pressure_profile(
        &burn_area_ratio,
        propellant.burn_coefficient(),
        propellant.burn_exponent(),
        propellant.density_kg_per_m3(),
        c_star,
    )?;

    // 4. Saint-Robert regression rate per sample
    let mut regression_rate_m_per_s = Vec::with_capacity(chamber_pressure_pa.len());
    for &p_c in &chamber_pressure_pa {
        let r = propellant.regression_rate_m_per_s(p_c)?;
        if !r.is_finite() || r <= 0.0 {
            return Err(SimError::NonPhysical {
                what: "regression rate must be positive over the whole burn",
            });
        }
        regression_rate_m_per_s.push(r);
    }

    // 5. Exit pressure: epsilon and gamma are constant, so the nozzle
    //    relation is solved once and the ratio applied per sample
    let exit_to_chamber = pressure_ratio_with(
        nozzle.expansion_ratio(),
        propellant.gamma(),
        &options.solver,
    )?;
    let exit_pressure_pa: Vec<f64> = chamber_pressure_pa
        .iter()
        .map(|&p_c| p_c * exit_to_chamber)
        .collect();

    // 6. Sea-level thrust per sample, ambient correction always on
    let mut thrust_n = Vec::with_capacity(chamber_pressure_pa.len());
    for (&p_c, &p_e) in chamber_pressure_pa.iter().zip(&exit_pressure_pa) {
        let c_f = thrust_coefficient(
            p_c,
            p_e,
            propellant.gamma(),
            Some(P_SEA_LEVEL_PA),
            Some(nozzle.expansion_ratio()),
        )?;
        thrust_n.push(throat_area * p_c * c_f);
    }

    // 7. Elapsed time: cumulative trapezoid of dx / r over the burn front
    let mut time_s = Vec::with_capacity(profile.len());
    time_s.push(0.0);
    for i in 1..profile.len() {
        let dx = profile.x_m[i] - profile.x_m[i - 1];
        let dt = 0.5 * (1.0 / regression_rate_m_per_s[i - 1] + 1.0 / regression_rate_m_per_s[i]) * dx;
        time_s.push(time_s[i - 1] + dt);
    }

    let history = PerformanceHistory {
        time_s,
        chamber_pressure_pa,
        regression_rate_m_per_s,
        burn_area_ratio,
        exit_pressure_pa,
        thrust_n,
    };

    debug!(
        burn_time_s = history.burn_time_s(),
        max_thrust_n = history.max_thrust_n(),
        "burn simulation complete"
    );
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use srm_combustion::{CombustionResult, EquilibriumCombustion};
    use srm_core::units::{k, kgpm3, kgpmol, m, m2};

    fn reference_inputs() -> (PropellantProperties, GrainGeometry, NozzleGeometry) {
        let propellant =
            PropellantProperties::new(1.26, kgpmol(0.0241), k(1600.0), kgpm3(1580.0), 0.5).unwrap();
        let grain = GrainGeometry::new(m(0.015), m(0.044), m(1.10)).unwrap();
        let nozzle = NozzleGeometry::new(m(0.00708), m2(2.196_8e-4)).unwrap();
        (propellant, grain, nozzle)
    }

    #[test]
    fn time_axis_is_non_decreasing_from_zero() {
        let (propellant, grain, nozzle) = reference_inputs();
        let history = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &SimOptions::default(),
        )
        .unwrap();

        assert_eq!(history.len(), DEFAULT_RESOLUTION);
        assert_eq!(history.time_s[0], 0.0);
        for i in 1..history.len() {
            assert!(history.time_s[i] >= history.time_s[i - 1]);
        }
    }

    #[test]
    fn progressive_burn_pressure_and_thrust_rise() {
        let (propellant, grain, nozzle) = reference_inputs();
        let history = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &SimOptions::default(),
        )
        .unwrap();

        for i in 1..history.len() {
            assert!(history.burn_area_ratio[i] > history.burn_area_ratio[i - 1]);
            assert!(history.chamber_pressure_pa[i] > history.chamber_pressure_pa[i - 1]);
            assert!(history.thrust_n[i] > history.thrust_n[i - 1]);
        }
    }

    #[test]
    fn exit_pressure_tracks_chamber_pressure() {
        let (propellant, grain, nozzle) = reference_inputs();
        let history = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &SimOptions::default(),
        )
        .unwrap();

        let ratio = history.exit_pressure_pa[0] / history.chamber_pressure_pa[0];
        assert!(ratio > 0.0 && ratio < 1.0);
        for i in 0..history.len() {
            let r = history.exit_pressure_pa[i] / history.chamber_pressure_pa[i];
            assert!((r - ratio).abs() < 1e-12);
        }
    }

    /// Constant-pressure stand-in: makes the time axis hand-checkable.
    struct ConstantPressure {
        p_c_pa: f64,
    }

    impl CombustionModel for ConstantPressure {
        fn name(&self) -> &str {
            "constant-pressure"
        }

        fn c_star(&self, _gamma: f64, _mm: f64, _t_c: f64) -> CombustionResult<f64> {
            Ok(1000.0)
        }

        fn chamber_pressure(
            &self,
            _k: f64,
            _a: f64,
            _n: f64,
            _rho: f64,
            _c_star: f64,
        ) -> CombustionResult<f64> {
            Ok(self.p_c_pa)
        }
    }

    #[test]
    fn constant_pressure_gives_linear_time_axis() {
        let (propellant, grain, nozzle) = reference_inputs();
        let model = ConstantPressure { p_c_pa: 8.26e6 };
        let history = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &model,
            &SimOptions::default(),
        )
        .unwrap();

        // At the reference pressure the burn rate is exactly 3.19 mm/s
        let r = 3.19e-3;
        let expected_burn_time = grain.web_thickness_m() / r;
        assert!((history.burn_time_s() - expected_burn_time).abs() / expected_burn_time < 1e-9);
    }

    /// Model that reports a non-physical chamber pressure.
    struct BrokenCombustion;

    impl CombustionModel for BrokenCombustion {
        fn name(&self) -> &str {
            "broken"
        }

        fn c_star(&self, _gamma: f64, _mm: f64, _t_c: f64) -> CombustionResult<f64> {
            Ok(1000.0)
        }

        fn chamber_pressure(
            &self,
            _k: f64,
            _a: f64,
            _n: f64,
            _rho: f64,
            _c_star: f64,
        ) -> CombustionResult<f64> {
            Ok(-1.0e6)
        }
    }

    #[test]
    fn non_physical_chamber_pressure_aborts_the_run() {
        let (propellant, grain, nozzle) = reference_inputs();
        let err = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &BrokenCombustion,
            &SimOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Combustion(_)));
    }

    #[test]
    fn degenerate_options_are_rejected() {
        let (propellant, grain, nozzle) = reference_inputs();

        let too_coarse = SimOptions {
            resolution: 1,
            ..SimOptions::default()
        };
        let err = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &too_coarse,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));

        let mut no_budget = SimOptions::default();
        no_budget.solver.max_iterations = 0;
        let err = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &no_budget,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));

        let mut bad_tol = SimOptions::default();
        bad_tol.solver.rel_tol = 0.0;
        let err = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &bad_tol,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
    }

    #[test]
    fn resolution_is_configurable() {
        let (propellant, grain, nozzle) = reference_inputs();
        let options = SimOptions {
            resolution: 200,
            ..SimOptions::default()
        };
        let history = simulate_burn(
            &propellant,
            &grain,
            &nozzle,
            &EquilibriumCombustion,
            &options,
        )
        .unwrap();
        assert_eq!(history.len(), 200);
    }
}
