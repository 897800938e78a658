use clap::{Args, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level (overrides the config file; default info)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Path to a config file (default: <config_dir>/phasesim/config.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Simulate a balanced three-phase system
    Balanced {
        #[command(flatten)]
        fields: BalancedArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Simulate an unbalanced system with per-phase loads
    Unbalanced {
        #[command(flatten)]
        fields: UnbalancedArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Treat unrecognized load types as resistive
        #[arg(long)]
        lenient_load_types: bool,
    },
    /// Run a scenario stored as TOML
    Run {
        /// Path to the scenario file
        #[arg(value_hint = ValueHint::FilePath)]
        scenario: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        /// Treat unrecognized load types as resistive
        #[arg(long)]
        lenient_load_types: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Numeric fields are taken as text and parsed by the form, so malformed
/// numbers are reported the same way regardless of where they came from.
#[derive(Args, Debug, Clone)]
pub struct BalancedArgs {
    /// Line-to-line voltage amplitude (V)
    #[arg(long, allow_hyphen_values = true)]
    pub line_voltage: String,
    /// Load impedance magnitude (Ω)
    #[arg(long, allow_hyphen_values = true)]
    pub load_impedance: String,
    /// Power factor in [-1, 1]; validated but does not shape the waveforms
    #[arg(long, allow_hyphen_values = true)]
    pub power_factor: String,
    /// Supply frequency (Hz)
    #[arg(long, allow_hyphen_values = true)]
    pub frequency: String,
    /// Simulated time span (s)
    #[arg(long, allow_hyphen_values = true)]
    pub time_period: String,
}

#[derive(Args, Debug, Clone)]
pub struct UnbalancedArgs {
    /// Line-to-line voltage amplitude (V)
    #[arg(long, allow_hyphen_values = true)]
    pub line_voltage: String,
    /// Supply frequency (Hz)
    #[arg(long, allow_hyphen_values = true)]
    pub frequency: String,
    /// Simulated time span (s)
    #[arg(long, allow_hyphen_values = true)]
    pub time_period: String,
    /// One load per phase, given three times in phase order
    #[arg(long = "phase", value_name = "Z,PF,TYPE", allow_hyphen_values = true)]
    pub phases: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Show the waveform charts (a text snapshot when stdout is not a terminal)
    #[arg(long)]
    pub plot: bool,
    /// Write line voltages and currents to a CSV file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub csv: Option<PathBuf>,
    /// Print the input, plot model and power figures as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
