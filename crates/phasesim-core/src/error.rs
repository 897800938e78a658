//! Error types for simulation inputs and their surrounding tooling.
//!
//! The simulators themselves never fail: they evaluate closed-form
//! expressions and let out-of-range numbers propagate as NaN/inf. Every
//! error here is raised at the boundary, before a simulator is invoked, or
//! by the tooling that consumes its output.
//!
//! # Example
//!
//! ```
//! use phasesim_core::{SimError, SimResult};
//!
//! fn parse_frequency(raw: &str) -> SimResult<f64> {
//!     raw.trim().parse::<f64>().map_err(|source| SimError::Format {
//!         field: "frequency".into(),
//!         raw: raw.into(),
//!         source,
//!     })
//! }
//!
//! assert!(parse_frequency("50").is_ok());
//! assert!(matches!(parse_frequency("fifty"), Err(SimError::Format { .. })));
//! ```

use std::num::ParseFloatError;

use thiserror::Error;

use crate::validate::RangeIssue;

/// Unified error type for all phasesim operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Non-numeric text in a numeric field
    #[error("Input format error: {field} = {raw:?}: {source}")]
    Format {
        field: String,
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    /// One or more inputs outside the range the formulas are defined for
    #[error("Input range error: {}", join_issues(.0))]
    OutOfRange(Vec<RangeIssue>),

    /// Load type label that is not an exact match
    #[error("Unknown load type {0:?} (expected resistive, inductive or capacitive)")]
    UnknownLoadType(String),

    /// A per-phase triple that is not `IMPEDANCE,POWER_FACTOR,LOAD_TYPE`
    #[error("Malformed phase {0:?} (expected IMPEDANCE,POWER_FACTOR,LOAD_TYPE)")]
    MalformedPhase(String),

    /// A per-phase collection that does not hold exactly three entries
    #[error("Expected exactly 3 phases, got {0}")]
    PhaseCount(usize),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using SimError.
pub type SimResult<T> = Result<T, SimError>;

fn join_issues(issues: &[RangeIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl SimError {
    /// True for errors caused by the user's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::Format { .. }
                | SimError::OutOfRange(_)
                | SimError::UnknownLoadType(_)
                | SimError::MalformedPhase(_)
                | SimError::PhaseCount(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_carries_raw_parse_text() {
        let source = "abc".parse::<f64>().unwrap_err();
        let err = SimError::Format {
            field: "line_voltage".into(),
            raw: "abc".into(),
            source,
        };
        let text = err.to_string();
        assert!(text.contains("line_voltage"));
        assert!(text.contains("\"abc\""));
        assert!(text.contains("invalid float literal"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_range_error_lists_every_issue() {
        let err = SimError::OutOfRange(vec![
            RangeIssue::new("frequency", 0.0, "> 0"),
            RangeIssue::new("power_factor", 1.5, "within [-1, 1]"),
        ]);
        let text = err.to_string();
        assert!(text.contains("frequency = 0"));
        assert!(text.contains("power_factor = 1.5"));
        assert!(text.contains("; "));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SimError = io_err.into();
        assert!(matches!(err, SimError::Io(_)));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_question_mark_operator() {
        fn inner() -> SimResult<()> {
            Err(SimError::PhaseCount(2))
        }

        fn outer() -> SimResult<()> {
            inner()?;
            Ok(())
        }

        assert!(outer().is_err());
    }
}
