//! Balanced three-phase simulator.
//!
//! One line voltage, one load impedance, one power factor. The impedance is
//! treated as a real divisor, so currents stay in phase with their voltages.

use serde::Serialize;

use crate::grid::{line_to_phase, line_voltages, TimeGrid};
use crate::units::{Hertz, Ohms, Seconds, Volts};
use crate::waveform::LineWaveforms;

/// Waveforms of a balanced run, all on the same [`TimeGrid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedWaveforms {
    pub time: TimeGrid,
    pub line_voltage: [Vec<f64>; 3],
    pub line_current: [Vec<f64>; 3],
    pub phase_voltage: [Vec<f64>; 3],
    pub phase_current: [Vec<f64>; 3],
}

/// Synthesize balanced three-phase waveforms.
///
/// `_power_factor` is accepted for interface parity with the unbalanced
/// simulator and has no effect on the returned currents. Inputs are not
/// range-checked; see [`crate::validate`].
pub fn simulate_balanced(
    line_voltage: Volts,
    load_impedance: Ohms,
    _power_factor: f64,
    frequency: Hertz,
    time_period: Seconds,
) -> BalancedWaveforms {
    let time = TimeGrid::linspace(time_period);
    let line_voltage = line_voltages(&time, line_voltage, frequency);
    let phase_voltage = line_voltage.each_ref().map(|line| line_to_phase(line));
    let z = load_impedance.value();
    let phase_current = phase_voltage
        .each_ref()
        .map(|phase| phase.iter().map(|v| v / z).collect::<Vec<_>>());
    // wye connection
    let line_current = phase_current.clone();

    BalancedWaveforms {
        time,
        line_voltage,
        line_current,
        phase_voltage,
        phase_current,
    }
}

impl LineWaveforms for BalancedWaveforms {
    fn time(&self) -> &[f64] {
        self.time.samples()
    }

    fn line_voltages(&self) -> [Vec<f64>; 3] {
        self.line_voltage.clone()
    }

    fn line_currents(&self) -> [Vec<f64>; 3] {
        self.line_current.clone()
    }
}
