//! Performance history record and derived metrics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time history of a steady burn, as parallel ordered series.
///
/// Produced once by [`crate::pipeline::simulate_burn`] and never mutated
/// afterward. Time is non-decreasing and starts at zero. The rendering
/// layer consumes `(time, chamber pressure, thrust)` read-only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PerformanceHistory {
    /// Elapsed burn time [s]
    pub time_s: Vec<f64>,
    /// Chamber pressure [Pa]
    pub chamber_pressure_pa: Vec<f64>,
    /// Regression rate [m/s]
    pub regression_rate_m_per_s: Vec<f64>,
    /// Burn-area ratio K = A_b / A_t (dimensionless)
    pub burn_area_ratio: Vec<f64>,
    /// Nozzle exit pressure [Pa]
    pub exit_pressure_pa: Vec<f64>,
    /// Sea-level thrust [N]
    pub thrust_n: Vec<f64>,
}

impl PerformanceHistory {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    /// True when the history holds no samples.
    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    /// Total burn time: time of the last sample [s].
    pub fn burn_time_s(&self) -> f64 {
        self.time_s.last().copied().unwrap_or(0.0)
    }

    /// Peak chamber pressure [Pa].
    pub fn max_chamber_pressure_pa(&self) -> f64 {
        self.chamber_pressure_pa
            .iter()
            .fold(0.0_f64, |acc, &p| acc.max(p))
    }

    /// Peak thrust [N].
    pub fn max_thrust_n(&self) -> f64 {
        self.thrust_n.iter().fold(0.0_f64, |acc, &f| acc.max(f))
    }

    /// Total impulse: trapezoidal integral of thrust over time [N s].
    pub fn total_impulse_n_s(&self) -> f64 {
        let mut impulse = 0.0;
        for i in 1..self.len() {
            let dt = self.time_s[i] - self.time_s[i - 1];
            impulse += 0.5 * (self.thrust_n[i] + self.thrust_n[i - 1]) * dt;
        }
        impulse
    }

    /// Iterate `(time, chamber pressure, thrust)` samples for display.
    pub fn thrust_curve(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.time_s
            .iter()
            .zip(&self.chamber_pressure_pa)
            .zip(&self.thrust_n)
            .map(|((&t, &p), &f)| (t, p, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> PerformanceHistory {
        PerformanceHistory {
            time_s: vec![0.0, 1.0, 2.0],
            chamber_pressure_pa: vec![1e6, 2e6, 1.5e6],
            regression_rate_m_per_s: vec![3e-3, 4e-3, 3.5e-3],
            burn_area_ratio: vec![200.0, 250.0, 300.0],
            exit_pressure_pa: vec![2.5e4, 5.0e4, 3.8e4],
            thrust_n: vec![100.0, 300.0, 200.0],
        }
    }

    #[test]
    fn derived_metrics() {
        let h = sample_history();
        assert_eq!(h.len(), 3);
        assert_eq!(h.burn_time_s(), 2.0);
        assert_eq!(h.max_chamber_pressure_pa(), 2e6);
        assert_eq!(h.max_thrust_n(), 300.0);
        // trapezoid: (100+300)/2 * 1 + (300+200)/2 * 1
        assert!((h.total_impulse_n_s() - 450.0).abs() < 1e-12);
    }

    #[test]
    fn thrust_curve_zips_parallel_series() {
        let h = sample_history();
        let points: Vec<_> = h.thrust_curve().collect();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], (1.0, 2e6, 300.0));
    }
}
