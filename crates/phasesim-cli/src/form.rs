//! The input form: raw text fields in, a validated [`SimulationInput`] out.
//!
//! Conversion happens in two stages. [`Form::parse`] turns text into numbers
//! and reports malformed text as [`SimError::Format`] with the raw parse
//! error. [`RawInput::resolve`] then maps load type labels according to the
//! [`LoadTypePolicy`] and runs the range checks. Scenario files deserialize
//! straight into [`RawInput`] and share the second stage.

use phasesim_core::units::{Hertz, Ohms, Seconds, Volts};
use phasesim_core::{
    BalancedInput, LoadType, PhaseLoad, SimError, SimResult, SimulationInput, UnbalancedInput,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How load type labels that are not an exact match are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadTypePolicy {
    /// Reject with [`SimError::UnknownLoadType`]
    #[default]
    Strict,
    /// Fall back to resistive and log a warning
    Lenient,
}

impl LoadTypePolicy {
    pub fn from_flag(lenient: bool) -> Self {
        if lenient {
            LoadTypePolicy::Lenient
        } else {
            LoadTypePolicy::Strict
        }
    }

    pub fn resolve(self, label: &str) -> SimResult<LoadType> {
        match (label.parse::<LoadType>(), self) {
            (Ok(kind), _) => Ok(kind),
            (Err(_), LoadTypePolicy::Lenient) => {
                warn!("unrecognized load type {label:?}, treating it as resistive");
                Ok(LoadType::Resistive)
            }
            (Err(err), LoadTypePolicy::Strict) => Err(err),
        }
    }
}

/// Parse one numeric text field, keeping the raw text for the error.
pub fn parse_field(field: &str, raw: &str) -> SimResult<f64> {
    raw.trim().parse::<f64>().map_err(|source| SimError::Format {
        field: field.to_string(),
        raw: raw.to_string(),
        source,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalancedForm {
    pub line_voltage: String,
    pub load_impedance: String,
    pub power_factor: String,
    pub frequency: String,
    pub time_period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseFields {
    pub impedance: String,
    pub power_factor: String,
    pub load_type: String,
}

impl PhaseFields {
    /// Split an `IMPEDANCE,POWER_FACTOR,LOAD_TYPE` triple.
    pub fn from_triple(triple: &str) -> SimResult<Self> {
        let parts: Vec<&str> = triple.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [impedance, power_factor, load_type] => Ok(Self {
                impedance: impedance.to_string(),
                power_factor: power_factor.to_string(),
                load_type: load_type.to_string(),
            }),
            _ => Err(SimError::MalformedPhase(triple.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnbalancedForm {
    pub line_voltage: String,
    pub frequency: String,
    pub time_period: String,
    pub phases: [PhaseFields; 3],
}

impl UnbalancedForm {
    /// Builds the form from `--phase` triples; exactly three are required.
    pub fn with_phase_triples(
        line_voltage: &str,
        frequency: &str,
        time_period: &str,
        triples: &[String],
    ) -> SimResult<Self> {
        let phases: Vec<PhaseFields> = triples
            .iter()
            .map(|triple| PhaseFields::from_triple(triple))
            .collect::<SimResult<_>>()?;
        let count = phases.len();
        let phases: [PhaseFields; 3] = phases
            .try_into()
            .map_err(|_| SimError::PhaseCount(count))?;
        Ok(Self {
            line_voltage: line_voltage.to_string(),
            frequency: frequency.to_string(),
            time_period: time_period.to_string(),
            phases,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    Balanced(BalancedForm),
    Unbalanced(UnbalancedForm),
}

impl Form {
    pub fn parse(&self) -> SimResult<RawInput> {
        match self {
            Form::Balanced(form) => Ok(RawInput::Balanced {
                line_voltage: parse_field("line_voltage", &form.line_voltage)?,
                load_impedance: parse_field("load_impedance", &form.load_impedance)?,
                power_factor: parse_field("power_factor", &form.power_factor)?,
                frequency: parse_field("frequency", &form.frequency)?,
                time_period: parse_field("time_period", &form.time_period)?,
            }),
            Form::Unbalanced(form) => {
                let line_voltage = parse_field("line_voltage", &form.line_voltage)?;
                let frequency = parse_field("frequency", &form.frequency)?;
                let time_period = parse_field("time_period", &form.time_period)?;
                let mut phases = Vec::with_capacity(3);
                for (k, fields) in form.phases.iter().enumerate() {
                    let n = k + 1;
                    phases.push(RawPhase {
                        impedance: parse_field(&format!("phase {n} impedance"), &fields.impedance)?,
                        power_factor: parse_field(
                            &format!("phase {n} power_factor"),
                            &fields.power_factor,
                        )?,
                        load_type: fields.load_type.clone(),
                    });
                }
                Ok(RawInput::Unbalanced {
                    line_voltage,
                    frequency,
                    time_period,
                    phases,
                })
            }
        }
    }

    /// Parse, resolve load types and validate ranges.
    pub fn to_input(&self, policy: LoadTypePolicy) -> SimResult<SimulationInput> {
        self.parse()?.resolve(policy)
    }
}

/// One phase with numeric fields parsed and the load type still a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPhase {
    pub impedance: f64,
    pub power_factor: f64,
    pub load_type: String,
}

/// Numeric input before load type resolution and range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawInput {
    Balanced {
        line_voltage: f64,
        load_impedance: f64,
        power_factor: f64,
        frequency: f64,
        time_period: f64,
    },
    Unbalanced {
        line_voltage: f64,
        frequency: f64,
        time_period: f64,
        phases: Vec<RawPhase>,
    },
}

impl RawInput {
    pub fn resolve(self, policy: LoadTypePolicy) -> SimResult<SimulationInput> {
        let input = match self {
            RawInput::Balanced {
                line_voltage,
                load_impedance,
                power_factor,
                frequency,
                time_period,
            } => SimulationInput::Balanced(BalancedInput {
                line_voltage: Volts(line_voltage),
                load_impedance: Ohms(load_impedance),
                power_factor,
                frequency: Hertz(frequency),
                time_period: Seconds(time_period),
            }),
            RawInput::Unbalanced {
                line_voltage,
                frequency,
                time_period,
                phases,
            } => {
                let count = phases.len();
                let loads = phases
                    .iter()
                    .map(|phase| -> SimResult<PhaseLoad> {
                        Ok(PhaseLoad::new(
                            Ohms(phase.impedance),
                            phase.power_factor,
                            policy.resolve(&phase.load_type)?,
                        ))
                    })
                    .collect::<SimResult<Vec<_>>>()?;
                let phases: [PhaseLoad; 3] = loads
                    .try_into()
                    .map_err(|_| SimError::PhaseCount(count))?;
                SimulationInput::Unbalanced(UnbalancedInput {
                    line_voltage: Volts(line_voltage),
                    frequency: Hertz(frequency),
                    time_period: Seconds(time_period),
                    phases,
                })
            }
        };
        input.validate()?;
        Ok(input)
    }
}
