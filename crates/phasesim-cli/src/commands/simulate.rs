use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use phasesim_core::{SimulationInput, SimulationOutcome};
use phasesim_viz::{table, terminal, waveform_plot};
use tracing::info;

use phasesim_cli::cli::{BalancedArgs, OutputArgs, UnbalancedArgs};
use phasesim_cli::config::PhasesimConfig;
use phasesim_cli::form::{BalancedForm, Form, LoadTypePolicy, UnbalancedForm};
use phasesim_cli::report::{write_summary, RunReport};
use phasesim_cli::scenario::load_scenario;
use phasesim_cli::session::FormSession;

pub fn handle_balanced(
    fields: &BalancedArgs,
    output: &OutputArgs,
    config: &PhasesimConfig,
) -> Result<()> {
    let form = Form::Balanced(BalancedForm {
        line_voltage: fields.line_voltage.clone(),
        load_impedance: fields.load_impedance.clone(),
        power_factor: fields.power_factor.clone(),
        frequency: fields.frequency.clone(),
        time_period: fields.time_period.clone(),
    });
    submit(&form, LoadTypePolicy::Strict, output, config)
}

pub fn handle_unbalanced(
    fields: &UnbalancedArgs,
    output: &OutputArgs,
    lenient_load_types: bool,
    config: &PhasesimConfig,
) -> Result<()> {
    let form = Form::Unbalanced(UnbalancedForm::with_phase_triples(
        &fields.line_voltage,
        &fields.frequency,
        &fields.time_period,
        &fields.phases,
    )?);
    let policy = LoadTypePolicy::from_flag(lenient_load_types || config.input.lenient_load_types);
    submit(&form, policy, output, config)
}

pub fn handle_run(
    scenario: &Path,
    output: &OutputArgs,
    lenient_load_types: bool,
    config: &PhasesimConfig,
) -> Result<()> {
    let policy = LoadTypePolicy::from_flag(lenient_load_types || config.input.lenient_load_types);
    let input = load_scenario(scenario, policy)
        .with_context(|| format!("loading scenario {}", scenario.display()))?;
    run(&input, output, config)
}

/// One form submission; nothing is presented unless it succeeds.
fn submit(
    form: &Form,
    policy: LoadTypePolicy,
    output: &OutputArgs,
    config: &PhasesimConfig,
) -> Result<()> {
    let mut session = FormSession::new(policy);
    session.submit(form)?;
    let (input, outcome) = session
        .last()
        .context("form session holds no outcome after a successful submit")?;
    present(input, outcome, output, config)
}

fn run(input: &SimulationInput, output: &OutputArgs, config: &PhasesimConfig) -> Result<()> {
    info!("running {} simulation", input.kind());
    let outcome = input.simulate();
    present(input, &outcome, output, config)
}

fn present(
    input: &SimulationInput,
    outcome: &SimulationOutcome,
    output: &OutputArgs,
    config: &PhasesimConfig,
) -> Result<()> {
    if let Some(path) = &output.csv {
        table::write_csv_file(path, outcome.waveforms())
            .with_context(|| format!("writing {}", path.display()))?;
    }

    let stdout = io::stdout();
    if output.json {
        // The plot model is part of the report, so --plot adds nothing here.
        let report = RunReport::new(input, outcome);
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report)?;
        writeln!(handle)?;
        return Ok(());
    }

    write_summary(stdout.lock(), input, outcome)?;

    if output.plot {
        let plot = waveform_plot(outcome.waveforms());
        let marker = config.render.marker.into();
        if stdout.is_terminal() {
            terminal::show(&plot, marker).context("opening waveform view")?;
        } else {
            let snapshot =
                terminal::render_snapshot(&plot, config.render.width, config.render.height, marker);
            let mut handle = stdout.lock();
            writeln!(handle)?;
            writeln!(handle, "{snapshot}")?;
        }
    }
    Ok(())
}
