//! Simulation request and outcome shapes.

use serde::{Deserialize, Serialize};

use crate::balanced::{simulate_balanced, BalancedWaveforms};
use crate::error::SimResult;
use crate::load::PhaseLoad;
use crate::power::PowerResult;
use crate::unbalanced::{simulate_unbalanced, UnbalancedWaveforms};
use crate::units::{Hertz, Ohms, Seconds, Volts};
use crate::validate;
use crate::waveform::LineWaveforms;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancedInput {
    pub line_voltage: Volts,
    pub load_impedance: Ohms,
    pub power_factor: f64,
    pub frequency: Hertz,
    pub time_period: Seconds,
}

impl BalancedInput {
    pub fn simulate(&self) -> BalancedWaveforms {
        simulate_balanced(
            self.line_voltage,
            self.load_impedance,
            self.power_factor,
            self.frequency,
            self.time_period,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnbalancedInput {
    pub line_voltage: Volts,
    pub frequency: Hertz,
    pub time_period: Seconds,
    pub phases: [PhaseLoad; 3],
}

impl UnbalancedInput {
    pub fn simulate(&self) -> UnbalancedWaveforms {
        simulate_unbalanced(
            self.line_voltage,
            &self.phases,
            self.frequency,
            self.time_period,
        )
    }
}

/// Everything needed for one simulation run, of either variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationInput {
    Balanced(BalancedInput),
    Unbalanced(UnbalancedInput),
}

impl SimulationInput {
    /// Boundary range checks; see [`crate::validate`].
    pub fn validate(&self) -> SimResult<()> {
        match self {
            SimulationInput::Balanced(input) => validate::check_balanced(input),
            SimulationInput::Unbalanced(input) => validate::check_unbalanced(input),
        }
    }

    /// Run the matching simulator. Does not validate.
    pub fn simulate(&self) -> SimulationOutcome {
        match self {
            SimulationInput::Balanced(input) => SimulationOutcome::Balanced(input.simulate()),
            SimulationInput::Unbalanced(input) => SimulationOutcome::Unbalanced(input.simulate()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SimulationInput::Balanced(_) => "balanced",
            SimulationInput::Unbalanced(_) => "unbalanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimulationOutcome {
    Balanced(BalancedWaveforms),
    Unbalanced(UnbalancedWaveforms),
}

impl SimulationOutcome {
    /// Per-phase power figures; only the unbalanced variant computes them.
    pub fn power(&self) -> Option<&PowerResult> {
        match self {
            SimulationOutcome::Balanced(_) => None,
            SimulationOutcome::Unbalanced(waveforms) => Some(&waveforms.power),
        }
    }

    pub fn waveforms(&self) -> &dyn LineWaveforms {
        match self {
            SimulationOutcome::Balanced(waveforms) => waveforms,
            SimulationOutcome::Unbalanced(waveforms) => waveforms,
        }
    }
}
