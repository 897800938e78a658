//! Unbalanced three-phase simulator.
//!
//! Each phase carries its own impedance, power factor and load type. The
//! phase current is the phase voltage over the impedance, multiplied by a
//! single fixed rotation `exp(iθ)` for the whole waveform:
//!
//! | load type  | θ                |
//! |------------|------------------|
//! | resistive  | `acos(pf)`       |
//! | inductive  | `-acos(pf)`      |
//! | capacitive | `π - acos(pf)`   |

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::Serialize;

use crate::grid::{line_to_phase, line_voltages, TimeGrid};
use crate::load::{LoadType, PhaseLoad};
use crate::power::PowerResult;
use crate::units::{Hertz, Radians, Seconds, Volts};
use crate::waveform::{real_parts, to_complex, LineWaveforms};

/// Waveforms and power figures of an unbalanced run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnbalancedWaveforms {
    pub time: TimeGrid,
    pub line_voltage: [Vec<Complex64>; 3],
    pub line_current: [Vec<Complex64>; 3],
    pub phase_voltage: [Vec<Complex64>; 3],
    pub phase_current: [Vec<Complex64>; 3],
    pub power: PowerResult,
}

/// Current phasor angle for a load. `pf` outside `[-1, 1]` yields NaN.
pub fn phase_angle(power_factor: f64, load_type: LoadType) -> Radians {
    let base = Radians(power_factor.acos());
    match load_type {
        LoadType::Resistive => base,
        LoadType::Inductive => -base,
        LoadType::Capacitive => Radians(PI) - base,
    }
}

/// `exp(iθ)`
pub fn rotation(angle: Radians) -> Complex64 {
    Complex64::new(0.0, angle.value()).exp()
}

/// Synthesize unbalanced three-phase waveforms and per-phase power.
///
/// Inputs are not range-checked here. A zero impedance divides by zero and
/// leaves that phase's currents and consumption inf/NaN.
pub fn simulate_unbalanced(
    line_voltage: Volts,
    loads: &[PhaseLoad; 3],
    frequency: Hertz,
    time_period: Seconds,
) -> UnbalancedWaveforms {
    let time = TimeGrid::linspace(time_period);
    let real_line = line_voltages(&time, line_voltage, frequency);
    let real_phase = real_line.each_ref().map(|line| line_to_phase(line));

    let phase_current: [Vec<Complex64>; 3] = std::array::from_fn(|k| {
        let load = &loads[k];
        let turn = rotation(phase_angle(load.power_factor, load.load_type));
        let z = load.impedance.value();
        real_phase[k].iter().map(|v| turn * (v / z)).collect()
    });

    let consumption: [Vec<f64>; 3] = std::array::from_fn(|k| {
        let pf = loads[k].power_factor;
        real_phase[k]
            .iter()
            .zip(&phase_current[k])
            .map(|(v, i)| v.abs() * i.norm() * pf)
            .collect()
    });

    let power = PowerResult {
        power_factors: loads.each_ref().map(|load| load.power_factor),
        consumption,
    };

    // wye connection
    let line_current = phase_current.clone();

    UnbalancedWaveforms {
        time,
        line_voltage: real_line.each_ref().map(|line| to_complex(line)),
        line_current,
        phase_voltage: real_phase.each_ref().map(|phase| to_complex(phase)),
        phase_current,
        power,
    }
}

impl LineWaveforms for UnbalancedWaveforms {
    fn time(&self) -> &[f64] {
        self.time.samples()
    }

    fn line_voltages(&self) -> [Vec<f64>; 3] {
        real_parts(&self.line_voltage)
    }

    fn line_currents(&self) -> [Vec<f64>; 3] {
        real_parts(&self.line_current)
    }
}
