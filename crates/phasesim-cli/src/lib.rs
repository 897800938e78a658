//! Command-line front end for the phasesim three-phase simulator.
//!
//! The binary lives in `main.rs`; this library holds the pieces it is built
//! from so they can be tested directly: the clap definitions, the text input
//! form and its submit session, scenario files, user configuration and run
//! reports.

pub mod cli;
pub mod config;
pub mod form;
pub mod report;
pub mod scenario;
pub mod session;
