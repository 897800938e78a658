//! Run summaries: a tab-aligned text table and a JSON report.

use std::io::{self, Write};

use phasesim_core::waveform::peak;
use phasesim_core::{PowerResult, PowerSummary, SimulationInput, SimulationOutcome};
use phasesim_viz::{waveform_plot, WaveformPlot};
use serde::Serialize;
use tabwriter::TabWriter;

/// Everything a `--json` run prints. `power` keeps the per-sample
/// consumption sequences; `power_summary` holds their means.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub input: &'a SimulationInput,
    pub plot: WaveformPlot,
    pub power: Option<&'a PowerResult>,
    pub power_summary: Option<PowerSummary>,
}

impl<'a> RunReport<'a> {
    pub fn new(input: &'a SimulationInput, outcome: &'a SimulationOutcome) -> Self {
        Self {
            input,
            plot: waveform_plot(outcome.waveforms()),
            power: outcome.power(),
            power_summary: outcome.power().map(PowerResult::summary),
        }
    }
}

/// Sample count, time span and per-phase peaks, followed by the power
/// analysis for unbalanced runs.
pub fn write_summary<W: Write>(
    out: W,
    input: &SimulationInput,
    outcome: &SimulationOutcome,
) -> io::Result<()> {
    let waveforms = outcome.waveforms();
    let time = waveforms.time();
    let end = time.last().copied().unwrap_or(0.0);
    let voltages = waveforms.line_voltages();
    let currents = waveforms.line_currents();

    let mut tw = TabWriter::new(out).padding(2);
    writeln!(
        tw,
        "Simulation: {} ({} samples over {end} s)",
        input.kind(),
        time.len()
    )?;
    writeln!(tw, "Phase\tPeak Line Voltage (V)\tPeak Line Current (A)")?;
    for k in 0..3 {
        writeln!(
            tw,
            "{}\t{:.2}\t{:.2}",
            k + 1,
            peak(&voltages[k]),
            peak(&currents[k])
        )?;
    }
    if let Some(power) = outcome.power() {
        writeln!(tw)?;
        write!(tw, "{}", power.summary())?;
    }
    tw.flush()
}
