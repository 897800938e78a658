//! # phasesim-core: Three-Phase Waveform Synthesis
//!
//! Closed-form idealized three-phase waveforms for two load models:
//!
//! - **Balanced**: one line voltage, one load impedance. Currents are the
//!   phase voltages divided by the impedance (a real divisor).
//! - **Unbalanced**: per-phase impedance, power factor and
//!   [`LoadType`]. Currents are rotated by a fixed `exp(iθ)` per phase and a
//!   per-sample power consumption is computed for each phase.
//!
//! Every run evaluates its formulas over a fixed [`grid::SAMPLE_COUNT`]-point
//! [`TimeGrid`] spanning `[0, time_period]`. Phase quantities are line
//! quantities divided by √3 and a wye connection is assumed (line current
//! equals phase current).
//!
//! The simulators are pure and unchecked. Range validation is a separate
//! boundary step ([`validate`], [`SimulationInput::validate`]).
//!
//! ## Quick Start
//!
//! ```
//! use phasesim_core::units::{Hertz, Ohms, Seconds, Volts};
//! use phasesim_core::*;
//!
//! let balanced = simulate_balanced(Volts(230.0), Ohms(10.0), 0.9, Hertz(50.0), Seconds(0.02));
//! assert_eq!(balanced.time.samples().len(), SAMPLE_COUNT);
//! assert_eq!(balanced.line_voltage[0][0], 0.0);
//!
//! let loads = [
//!     PhaseLoad::new(Ohms(10.0), 1.0, LoadType::Resistive),
//!     PhaseLoad::new(Ohms(12.0), 0.8, LoadType::Inductive),
//!     PhaseLoad::new(Ohms(15.0), 0.8, LoadType::Capacitive),
//! ];
//! let unbalanced = simulate_unbalanced(Volts(400.0), &loads, Hertz(50.0), Seconds(0.02));
//! println!("{}", unbalanced.power.summary());
//! ```

pub mod balanced;
pub mod error;
pub mod grid;
pub mod input;
pub mod load;
pub mod power;
pub mod unbalanced;
pub mod units;
pub mod validate;
pub mod waveform;

pub use balanced::{simulate_balanced, BalancedWaveforms};
pub use error::{SimError, SimResult};
pub use grid::{TimeGrid, SAMPLE_COUNT};
pub use input::{BalancedInput, SimulationInput, SimulationOutcome, UnbalancedInput};
pub use load::{LoadType, PhaseLoad};
pub use power::{PhasePower, PowerResult, PowerSummary};
pub use unbalanced::{phase_angle, rotation, simulate_unbalanced, UnbalancedWaveforms};
pub use waveform::LineWaveforms;
