use super::write_json;
use crate::cli::{OutputArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::Result;
use hdmolecule::core::calculators::CalculatorFactory;
use hdmolecule::workflows::analysis::{self, EXPERIMENTAL_N2_BOND_LENGTH};
use std::io::Write;
use tracing::info;

pub fn run(args: OutputArgs, config: &AppConfig) -> Result<()> {
    info!(
        "Analyzing N2 at its experimental bond length of {} Å",
        EXPERIMENTAL_N2_BOND_LENGTH
    );
    let stdout = std::io::stdout();
    execute(args, config.calculator.clone(), &mut stdout.lock())
}

fn execute<F: CalculatorFactory, W: Write>(args: OutputArgs, factory: F, out: &mut W) -> Result<()> {
    match args.format {
        OutputFormat::Text => {
            analysis::analyze_exp_n2(factory, out)?;
        }
        OutputFormat::Json => {
            let report = analysis::evaluate_exp_n2(factory)?;
            write_json(&report, out)?;
        }
    }
    Ok(())
}
