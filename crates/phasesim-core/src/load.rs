use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::units::Ohms;

/// Character of a per-phase load, deciding the sign convention of its
/// current phasor angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    #[default]
    Resistive,
    Inductive,
    Capacitive,
}

impl LoadType {
    pub const ALL: [LoadType; 3] = [
        LoadType::Resistive,
        LoadType::Inductive,
        LoadType::Capacitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadType::Resistive => "resistive",
            LoadType::Inductive => "inductive",
            LoadType::Capacitive => "capacitive",
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the lowercase label.
impl FromStr for LoadType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoadType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SimError::UnknownLoadType(s.to_string()))
    }
}

/// One phase of an unbalanced load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseLoad {
    pub impedance: Ohms,
    pub power_factor: f64,
    pub load_type: LoadType,
}

impl PhaseLoad {
    pub fn new(impedance: Ohms, power_factor: f64, load_type: LoadType) -> Self {
        Self {
            impedance,
            power_factor,
            load_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_labels() {
        assert_eq!("resistive".parse::<LoadType>().unwrap(), LoadType::Resistive);
        assert_eq!("inductive".parse::<LoadType>().unwrap(), LoadType::Inductive);
        assert_eq!(
            "capacitive".parse::<LoadType>().unwrap(),
            LoadType::Capacitive
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Inductive".parse::<LoadType>().unwrap_err();
        assert!(matches!(err, SimError::UnknownLoadType(ref s) if s == "Inductive"));
        assert!(" resistive".parse::<LoadType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for kind in LoadType::ALL {
            assert_eq!(kind.to_string().parse::<LoadType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let load = PhaseLoad::new(Ohms(10.0), 0.8, LoadType::Capacitive);
        let json = serde_json::to_value(load).unwrap();
        assert_eq!(json["load_type"], "capacitive");
        assert_eq!(json["impedance"], 10.0);
    }
}
