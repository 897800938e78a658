//! Per-phase power figures of an unbalanced run.

use std::fmt;

use serde::Serialize;

use crate::units::VoltAmperes;

/// Power factors echoed from the input, and the per-sample consumption
/// `|v_phase(t)|·|i_phase(t)|·pf` of each phase.
///
/// Consumption is kept as a full sequence rather than reduced to a single
/// real-power figure; [`PowerResult::summary`] does the reduction for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerResult {
    pub power_factors: [f64; 3],
    pub consumption: [Vec<f64>; 3],
}

impl PowerResult {
    /// Mean of the per-sample consumption of `phase` (0-based), `None` past
    /// the third phase.
    ///
    /// Over whole cycles this equals the conventional real power of the phase.
    pub fn mean_consumption(&self, phase: usize) -> Option<VoltAmperes> {
        self.consumption.get(phase).map(|samples| mean(samples))
    }

    /// Largest per-sample consumption magnitude of `phase` (0-based).
    pub fn peak_consumption(&self, phase: usize) -> Option<VoltAmperes> {
        self.consumption
            .get(phase)
            .map(|samples| VoltAmperes(crate::waveform::peak(samples)))
    }

    pub fn summary(&self) -> PowerSummary {
        PowerSummary {
            phases: std::array::from_fn(|k| PhasePower {
                phase: k + 1,
                power_factor: self.power_factors[k],
                consumption: mean(&self.consumption[k]),
            }),
        }
    }
}

fn mean(samples: &[f64]) -> VoltAmperes {
    if samples.is_empty() {
        return VoltAmperes(0.0);
    }
    VoltAmperes(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// One line of the power analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhasePower {
    /// 1-based phase number
    pub phase: usize,
    pub power_factor: f64,
    pub consumption: VoltAmperes,
}

/// Scalar per-phase power figures, formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerSummary {
    pub phases: [PhasePower; 3],
}

impl fmt::Display for PhasePower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Phase {} - Power Factor: {:.2}, Power Consumption: {:.2} VA",
            self.phase,
            self.power_factor,
            self.consumption.value()
        )
    }
}

impl fmt::Display for PowerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Power Analysis:")?;
        for phase in &self.phases {
            writeln!(f, "{phase}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PowerResult {
        PowerResult {
            power_factors: [1.0, 0.8, 0.5],
            consumption: [vec![0.0, 10.0, 20.0], vec![4.0, 4.0], vec![-3.0, 1.0]],
        }
    }

    #[test]
    fn test_mean_and_peak() {
        let power = sample();
        assert_eq!(power.mean_consumption(0), Some(VoltAmperes(10.0)));
        assert_eq!(power.mean_consumption(1), Some(VoltAmperes(4.0)));
        assert_eq!(power.peak_consumption(0), Some(VoltAmperes(20.0)));
        assert_eq!(power.peak_consumption(2), Some(VoltAmperes(3.0)));
    }

    #[test]
    fn test_phase_out_of_range_is_none() {
        let power = sample();
        assert_eq!(power.mean_consumption(3), None);
        assert_eq!(power.peak_consumption(3), None);
        assert_eq!(power.mean_consumption(usize::MAX), None);
    }

    #[test]
    fn test_empty_sequence_reduces_to_zero() {
        let power = PowerResult {
            power_factors: [1.0; 3],
            consumption: [vec![], vec![], vec![]],
        };
        assert_eq!(power.mean_consumption(0), Some(VoltAmperes(0.0)));
        assert_eq!(power.peak_consumption(1), Some(VoltAmperes(0.0)));
    }

    #[test]
    fn test_summary_text() {
        let text = sample().summary().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Power Analysis:");
        assert_eq!(
            lines[1],
            "Phase 1 - Power Factor: 1.00, Power Consumption: 10.00 VA"
        );
        assert_eq!(
            lines[2],
            "Phase 2 - Power Factor: 0.80, Power Consumption: 4.00 VA"
        );
        assert_eq!(
            lines[3],
            "Phase 3 - Power Factor: 0.50, Power Consumption: -1.00 VA"
        );
    }
}
