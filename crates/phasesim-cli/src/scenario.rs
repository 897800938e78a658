//! Scenario files: one simulation request stored as TOML.
//!
//! ```toml
//! kind = "balanced"
//! line_voltage = 230.0
//! load_impedance = 10.0
//! power_factor = 0.9
//! frequency = 50.0
//! time_period = 0.02
//! ```
//!
//! Unbalanced scenarios carry three `[[phases]]` tables with `impedance`,
//! `power_factor` and `load_type`.

use std::fs;
use std::path::Path;

use phasesim_core::{SimError, SimResult, SimulationInput};
use tracing::debug;

use crate::form::{LoadTypePolicy, RawInput};

pub fn parse_scenario(text: &str) -> SimResult<RawInput> {
    toml::from_str(text).map_err(|e| SimError::Config(format!("invalid scenario: {e}")))
}

pub fn load_scenario(path: &Path, policy: LoadTypePolicy) -> SimResult<SimulationInput> {
    let text = fs::read_to_string(path)?;
    debug!("loaded scenario from {}", path.display());
    parse_scenario(&text)?.resolve(policy)
}
