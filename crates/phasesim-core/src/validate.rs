//! Range checks applied at the input boundary.
//!
//! The simulators evaluate their formulas unchecked. Callers that accept
//! user input run these checks first and refuse to simulate when any issue
//! is found; every issue is reported, not just the first.
//!
//! ```
//! use phasesim_core::units::{Hertz, Ohms, Seconds, Volts};
//! use phasesim_core::{validate, BalancedInput, SimError};
//!
//! let input = BalancedInput {
//!     line_voltage: Volts(230.0),
//!     load_impedance: Ohms(0.0),
//!     power_factor: 1.2,
//!     frequency: Hertz(50.0),
//!     time_period: Seconds(0.02),
//! };
//! match validate::check_balanced(&input) {
//!     Err(SimError::OutOfRange(issues)) => assert_eq!(issues.len(), 2),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{SimError, SimResult};
use crate::input::{BalancedInput, UnbalancedInput};

/// A single out-of-range input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeIssue {
    pub field: String,
    pub value: f64,
    pub expected: &'static str,
}

impl RangeIssue {
    pub fn new(field: impl Into<String>, value: f64, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            value,
            expected,
        }
    }
}

impl fmt::Display for RangeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} (expected {})", self.field, self.value, self.expected)
    }
}

/// Accumulates issues across several fields.
#[derive(Debug, Default)]
struct RangeCheck {
    issues: Vec<RangeIssue>,
}

impl RangeCheck {
    fn positive(&mut self, field: &str, value: f64) -> &mut Self {
        if !(value.is_finite() && value > 0.0) {
            self.issues.push(RangeIssue::new(field, value, "finite and > 0"));
        }
        self
    }

    fn nonzero(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() || value == 0.0 {
            self.issues.push(RangeIssue::new(field, value, "finite and non-zero"));
        }
        self
    }

    fn power_factor(&mut self, field: &str, value: f64) -> &mut Self {
        if !(-1.0..=1.0).contains(&value) {
            self.issues.push(RangeIssue::new(field, value, "within [-1, 1]"));
        }
        self
    }

    fn finish(&mut self) -> SimResult<()> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(SimError::OutOfRange(std::mem::take(&mut self.issues)))
        }
    }
}

pub fn check_balanced(input: &BalancedInput) -> SimResult<()> {
    RangeCheck::default()
        .positive("line_voltage", input.line_voltage.value())
        .nonzero("load_impedance", input.load_impedance.value())
        .power_factor("power_factor", input.power_factor)
        .positive("frequency", input.frequency.value())
        .positive("time_period", input.time_period.value())
        .finish()
}

pub fn check_unbalanced(input: &UnbalancedInput) -> SimResult<()> {
    let mut check = RangeCheck::default();
    check
        .positive("line_voltage", input.line_voltage.value())
        .positive("frequency", input.frequency.value())
        .positive("time_period", input.time_period.value());
    for (k, load) in input.phases.iter().enumerate() {
        let n = k + 1;
        check
            .nonzero(&format!("phase {n} impedance"), load.impedance.value())
            .power_factor(&format!("phase {n} power_factor"), load.power_factor);
    }
    check.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{LoadType, PhaseLoad};
    use crate::units::{Hertz, Ohms, Seconds, Volts};

    fn balanced() -> BalancedInput {
        BalancedInput {
            line_voltage: Volts(230.0),
            load_impedance: Ohms(10.0),
            power_factor: 0.9,
            frequency: Hertz(50.0),
            time_period: Seconds(0.02),
        }
    }

    fn unbalanced() -> UnbalancedInput {
        UnbalancedInput {
            line_voltage: Volts(400.0),
            frequency: Hertz(60.0),
            time_period: Seconds(0.05),
            phases: [
                PhaseLoad::new(Ohms(10.0), 1.0, LoadType::Resistive),
                PhaseLoad::new(Ohms(12.0), 0.8, LoadType::Inductive),
                PhaseLoad::new(Ohms(15.0), -0.7, LoadType::Capacitive),
            ],
        }
    }

    fn issues(result: SimResult<()>) -> Vec<RangeIssue> {
        match result {
            Err(SimError::OutOfRange(issues)) => issues,
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(check_balanced(&balanced()).is_ok());
        assert!(check_unbalanced(&unbalanced()).is_ok());
    }

    #[test]
    fn test_power_factor_bounds_are_inclusive() {
        let mut input = balanced();
        input.power_factor = -1.0;
        assert!(check_balanced(&input).is_ok());
        input.power_factor = 1.0;
        assert!(check_balanced(&input).is_ok());
        input.power_factor = 1.0001;
        assert_eq!(issues(check_balanced(&input))[0].field, "power_factor");
    }

    #[test]
    fn test_non_positive_frequency_and_period_are_rejected() {
        let mut input = balanced();
        input.frequency = Hertz(0.0);
        input.time_period = Seconds(-1.0);
        let found = issues(check_balanced(&input));
        let fields: Vec<&str> = found.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["frequency", "time_period"]);
    }

    #[test]
    fn test_nan_and_infinity_are_rejected() {
        let mut input = balanced();
        input.power_factor = f64::NAN;
        input.line_voltage = Volts(f64::INFINITY);
        assert_eq!(issues(check_balanced(&input)).len(), 2);
    }

    #[test]
    fn test_zero_impedance_is_rejected_per_phase() {
        let mut input = unbalanced();
        input.phases[1].impedance = Ohms(0.0);
        input.phases[2].power_factor = 2.0;
        let found = issues(check_unbalanced(&input));
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].field, "phase 2 impedance");
        assert_eq!(found[1].field, "phase 3 power_factor");
    }

    #[test]
    fn test_negative_impedance_is_accepted() {
        let mut input = balanced();
        input.load_impedance = Ohms(-5.0);
        assert!(check_balanced(&input).is_ok());
    }

    #[test]
    fn test_issue_display() {
        let issue = RangeIssue::new("frequency", -50.0, "finite and > 0");
        assert_eq!(issue.to_string(), "frequency = -50 (expected finite and > 0)");
    }
}
