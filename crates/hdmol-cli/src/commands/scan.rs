use super::write_json;
use crate::cli::{OutputFormat, ScanArgs};
use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use hdmolecule::core::calculators::CalculatorFactory;
use hdmolecule::engine::progress::ProgressReporter;
use hdmolecule::workflows::scan;
use std::io::Write;
use tracing::info;

pub fn run(args: ScanArgs, config: &AppConfig, show_progress: bool) -> Result<()> {
    let handler = if show_progress {
        CliProgressHandler::new(&format!("Scanning {}2", args.element))
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());

    let stdout = std::io::stdout();
    execute(
        args,
        config.calculator.clone(),
        &reporter,
        &mut stdout.lock(),
    )
}

fn execute<F: CalculatorFactory + Clone, W: Write>(
    args: ScanArgs,
    factory: F,
    reporter: &ProgressReporter,
    out: &mut W,
) -> Result<()> {
    let distances = scan::linspace(args.start, args.end, args.steps)?;
    info!(
        "Scanning {}2 from {} to {} Å in {} steps",
        args.element, args.start, args.end, args.steps
    );

    let result = scan::run(&args.element, &distances, factory, reporter)?;

    match args.output.format {
        OutputFormat::Text => write!(out, "{}", result)?,
        OutputFormat::Json => write_json(&result, out)?,
    }
    Ok(())
}
