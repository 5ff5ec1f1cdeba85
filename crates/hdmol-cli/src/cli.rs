use clap::{Args, Parser, Subcommand, ValueEnum};
use hdmolecule::core::calculators::ase::{AseBackend, AseBridge};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "HDMolecule developers",
    version,
    about = "hdmol - Atom, molecule and atomization energies of homonuclear diatomic molecules, evaluated with ASE calculators.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub calculator: CalculatorArgs,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S calculator.backend=emt
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

/// Overrides for the external energy calculator.
#[derive(Args, Debug, Default, Clone)]
pub struct CalculatorArgs {
    /// Python interpreter with the `ase` package installed.
    #[arg(long, global = true, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// ASE calculator to evaluate energies with ('emt' or 'lennard-jones').
    #[arg(long, global = true, value_name = "NAME")]
    pub backend: Option<AseBackend>,

    /// How Python is reached ('subprocess' or 'embedded'; the latter needs the `python` feature).
    #[arg(long, global = true, value_name = "BRIDGE")]
    pub bridge: Option<AseBridge>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the atom, molecule and atomization energies of a diatomic molecule.
    Analyze(AnalyzeArgs),
    /// Analyze N2 at its experimental bond length of 1.1 Å.
    ExpN2(OutputArgs),
    /// Evaluate a diatomic molecule over an evenly spaced range of bond distances.
    Scan(ScanArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Chemical element symbol shared by both atoms (e.g. N, O, Cu).
    #[arg(required = true)]
    pub element: String,

    /// Bond distance in Angstroms.
    #[arg(required = true, allow_negative_numbers = true)]
    pub distance: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Chemical element symbol shared by both atoms.
    #[arg(required = true)]
    pub element: String,

    /// Shortest bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub start: f64,

    /// Longest bond distance in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub end: f64,

    /// Number of evenly spaced distances, including both ends.
    #[arg(long, value_name = "INT", default_value_t = 11)]
    pub steps: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}
