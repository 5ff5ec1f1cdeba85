use super::write_json;
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::Result;
use hdmolecule::core::calculators::CalculatorFactory;
use hdmolecule::workflows::analysis;
use std::io::Write;
use tracing::info;

pub fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    info!(
        "Analyzing {}2 at {} Å with {}",
        args.element, args.distance, config.calculator.backend
    );
    let stdout = std::io::stdout();
    execute(args, config.calculator.clone(), &mut stdout.lock())
}

fn execute<F: CalculatorFactory, W: Write>(args: AnalyzeArgs, factory: F, out: &mut W) -> Result<()> {
    match args.output.format {
        OutputFormat::Text => {
            analysis::analyze(&args.element, args.distance, factory, out)?;
        }
        OutputFormat::Json => {
            let report = analysis::evaluate(&args.element, args.distance, factory)?;
            write_json(&report, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use crate::commands::fixtures::{fixed, output_json, output_text};
    use crate::error::CliError;
    use hdmolecule::engine::error::MoleculeError;
    use hdmolecule::workflows::error::AnalysisError;

    fn args(element: &str, distance: f64, format: OutputFormat) -> AnalyzeArgs {
        AnalyzeArgs {
            element: element.to_string(),
            distance,
            output: OutputArgs { format },
        }
    }

    #[test]
    fn text_format_prints_the_three_energy_lines() {
        let mut out = Vec::new();
        execute(args("N", 1.1, OutputFormat::Text), fixed(5.1, 0.44), &mut out).unwrap();

        assert_eq!(
            output_text(out),
            "Nitrogen atom energy:  5.10 eV\n\
             Nitrogen molecule energy:  0.44 eV\n\
             Atomization energy:  9.76 eV\n"
        );
    }

    #[test]
    fn json_format_prints_the_energy_report() {
        let mut out = Vec::new();
        execute(args("O", 1.2, OutputFormat::Json), fixed(5.0, 1.0), &mut out).unwrap();

        let json = output_json(out);
        assert_eq!(json["element"], "O");
        assert_eq!(json["element_name"], "Oxygen");
        assert_eq!(json["distance"], 1.2);
        assert_eq!(json["atom_energy"], 5.0);
        assert_eq!(json["molecule_energy"], 1.0);
        assert_eq!(json["atomization_energy"], 9.0);
    }

    #[test]
    fn unknown_element_fails_before_any_output() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let mut out = Vec::new();
            let err = execute(args("Xx", 1.1, format), fixed(0.0, 0.0), &mut out).unwrap_err();

            assert!(matches!(
                err,
                CliError::Analysis(AnalysisError::Molecule(MoleculeError::UnknownElement(_)))
            ));
            assert!(out.is_empty());
        }
    }

    #[test]
    fn non_positive_distance_fails_before_any_output() {
        let mut out = Vec::new();
        let err = execute(args("N", 0.0, OutputFormat::Text), fixed(0.0, 0.0), &mut out)
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Analysis(AnalysisError::Molecule(MoleculeError::InvalidDistance(_)))
        ));
        assert!(out.is_empty());
    }
}
