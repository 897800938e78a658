//! Time grid and three-phase line voltage generation shared by both simulators.

use std::f64::consts::PI;

use serde::Serialize;

use crate::units::{Hertz, Radians, Seconds, Volts};

/// Number of samples in every simulated waveform.
pub const SAMPLE_COUNT: usize = 1000;

/// Separation between adjacent phases (2π/3).
pub const PHASE_SHIFT: Radians = Radians(2.0 * PI / 3.0);

/// Offsets applied to phases 1, 2 and 3.
pub const PHASE_OFFSETS: [Radians; 3] = [Radians(0.0), Radians(-PHASE_SHIFT.0), PHASE_SHIFT];

/// Evenly spaced sample instants over `[0, time_period]`, both ends included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimeGrid {
    samples: Vec<f64>,
}

impl TimeGrid {
    /// Build the fixed-size grid. No bounds checking: a zero period yields
    /// a grid of zeros, a negative one runs backwards.
    pub fn linspace(time_period: Seconds) -> Self {
        let end = time_period.value();
        let step = end / (SAMPLE_COUNT - 1) as f64;
        let mut samples: Vec<f64> = (0..SAMPLE_COUNT).map(|i| i as f64 * step).collect();
        if let Some(last) = samples.last_mut() {
            *last = end;
        }
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// Line voltages `V·sin(ωt + offset_k)` for the three phases.
pub fn line_voltages(grid: &TimeGrid, line_voltage: Volts, frequency: Hertz) -> [Vec<f64>; 3] {
    let omega = frequency.angular_frequency();
    let amplitude = line_voltage.value();
    PHASE_OFFSETS.map(|offset| {
        grid.samples()
            .iter()
            .map(|&t| amplitude * (omega * t + offset.value()).sin())
            .collect()
    })
}

/// Phase quantity from a line quantity, sample by sample (`line / √3`).
pub fn line_to_phase(line: &[f64]) -> Vec<f64> {
    let sqrt3 = 3.0_f64.sqrt();
    line.iter().map(|v| v / sqrt3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_fixed_length_and_inclusive_endpoints() {
        let grid = TimeGrid::linspace(Seconds(0.02));
        assert_eq!(grid.samples().len(), SAMPLE_COUNT);
        assert_eq!(grid.samples()[0], 0.0);
        assert_eq!(grid.samples()[SAMPLE_COUNT - 1], 0.02);

        let step = 0.02 / 999.0;
        assert!((grid.samples()[1] - step).abs() < 1e-15);
    }

    #[test]
    fn test_grid_is_monotonic() {
        let grid = TimeGrid::linspace(Seconds(1.0));
        assert!(grid.samples().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_zero_period_is_degenerate() {
        let grid = TimeGrid::linspace(Seconds(0.0));
        assert_eq!(grid.samples().len(), SAMPLE_COUNT);
        assert!(grid.samples().iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_line_voltages_are_offset_by_a_third_of_a_cycle() {
        let grid = TimeGrid::linspace(Seconds(0.02));
        let [va, vb, vc] = line_voltages(&grid, Volts(400.0), Hertz(50.0));
        let omega = Hertz(50.0).angular_frequency();

        for (i, &t) in grid.samples().iter().enumerate() {
            assert!((va[i] - 400.0 * (omega * t).sin()).abs() < 1e-9);
            assert!((vb[i] - 400.0 * (omega * t - 2.0 * PI / 3.0).sin()).abs() < 1e-9);
            assert!((vc[i] - 400.0 * (omega * t + 2.0 * PI / 3.0).sin()).abs() < 1e-9);
            // balanced set sums to zero
            assert!((va[i] + vb[i] + vc[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_line_to_phase() {
        let phase = line_to_phase(&[3.0_f64.sqrt(), 0.0, -2.0 * 3.0_f64.sqrt()]);
        assert!((phase[0] - 1.0).abs() < 1e-12);
        assert_eq!(phase[1], 0.0);
        assert!((phase[2] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_shift_constant() {
        assert_eq!(PHASE_OFFSETS[2], PHASE_SHIFT);
        assert_eq!(PHASE_OFFSETS[1], -PHASE_SHIFT);
    }
}
