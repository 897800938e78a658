//! The view of a simulation result that plotting and export consume.

use num_complex::Complex64;

/// Real-valued line waveforms on a shared time axis.
///
/// Complex-valued results expose their real parts.
pub trait LineWaveforms {
    /// Sample instants, in seconds.
    fn time(&self) -> &[f64];

    /// Line voltages of phases 1, 2 and 3.
    fn line_voltages(&self) -> [Vec<f64>; 3];

    /// Line currents of phases 1, 2 and 3.
    fn line_currents(&self) -> [Vec<f64>; 3];
}

pub(crate) fn real_parts(phases: &[Vec<Complex64>; 3]) -> [Vec<f64>; 3] {
    phases.each_ref().map(|samples| samples.iter().map(|c| c.re).collect())
}

pub(crate) fn to_complex(samples: &[f64]) -> Vec<Complex64> {
    samples.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

/// Largest absolute value in a sequence; zero when empty.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}
