//! A submit-and-display session around the input form.
//!
//! Each submission parses, validates and simulates. Only a successful
//! submission replaces the displayed outcome; a failed one leaves the previous
//! result in place and hands the error back to the caller.

use phasesim_core::{SimResult, SimulationInput, SimulationOutcome};
use tracing::{debug, info};

use crate::form::{Form, LoadTypePolicy};

#[derive(Debug, Default)]
pub struct FormSession {
    policy: LoadTypePolicy,
    last: Option<(SimulationInput, SimulationOutcome)>,
    submissions: usize,
}

impl FormSession {
    pub fn new(policy: LoadTypePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn submit(&mut self, form: &Form) -> SimResult<&SimulationOutcome> {
        self.submissions += 1;
        let input = match form.to_input(self.policy) {
            Ok(input) => input,
            Err(err) => {
                debug!("submission {} rejected: {err}", self.submissions);
                return Err(err);
            }
        };
        info!("submission {}: running {} simulation", self.submissions, input.kind());
        let outcome = input.simulate();
        let (_, outcome) = self.last.insert((input, outcome));
        Ok(outcome)
    }

    /// The input and outcome of the last successful submission.
    pub fn last(&self) -> Option<(&SimulationInput, &SimulationOutcome)> {
        self.last.as_ref().map(|(input, outcome)| (input, outcome))
    }
}
