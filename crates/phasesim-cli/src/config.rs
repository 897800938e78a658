//! User configuration for the `phasesim` CLI.
//!
//! Stored in `<config_dir>/phasesim/config.toml` unless `--config` points
//! elsewhere. Every section is optional; unspecified values use defaults.

use std::fs;
use std::path::{Path, PathBuf};

use phasesim_core::{SimError, SimResult};
use phasesim_viz::PlotMarker;
use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhasesimConfig {
    pub render: RenderConfig,
    pub input: InputConfig,
    pub logging: LoggingConfig,
}

/// Size and marker used when a plot is rendered as a text snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u16,
    pub height: u16,
    pub marker: PlotMarker,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            marker: PlotMarker::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Map unrecognized load types to resistive instead of rejecting them.
    pub lenient_load_types: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> SimResult<Option<Level>> {
        self.level
            .as_deref()
            .map(|raw| {
                raw.parse::<Level>()
                    .map_err(|e| SimError::Config(format!("logging.level {raw:?}: {e}")))
            })
            .transpose()
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("phasesim").join("config.toml"))
}

pub fn load_from(path: &Path) -> SimResult<PhasesimConfig> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))
}

/// An explicit path must exist; the default path is optional.
pub fn load_config(explicit: Option<&Path>) -> SimResult<PhasesimConfig> {
    match explicit {
        Some(path) => load_from(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_from(&path),
            _ => Ok(PhasesimConfig::default()),
        },
    }
}
