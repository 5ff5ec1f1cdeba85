use super::error::AnalysisError;
use crate::core::calculators::CalculatorFactory;
use crate::engine::molecule::HdMolecule;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::{info, instrument};

/// Experimental bond length of N2 in Angstroms.
pub const EXPERIMENTAL_N2_BOND_LENGTH: f64 = 1.1;

/// The three energies of a diatomic molecule at one bond distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    pub element: &'static str,
    pub element_name: &'static str,
    /// Bond distance in Angstroms.
    pub distance: f64,
    /// Energy of one isolated atom in eV.
    pub atom_energy: f64,
    /// Energy of the two-atom molecule in eV.
    pub molecule_energy: f64,
    /// `2 * atom_energy - molecule_energy` in eV.
    pub atomization_energy: f64,
}

pub fn atom_energy_line(element_name: &str, energy: f64) -> String {
    format!("{} atom energy: {:5.2} eV", element_name, energy)
}

pub fn molecule_energy_line(element_name: &str, energy: f64) -> String {
    format!("{} molecule energy: {:5.2} eV", element_name, energy)
}

pub fn atomization_energy_line(energy: f64) -> String {
    format!("Atomization energy: {:5.2} eV", energy)
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", atom_energy_line(self.element_name, self.atom_energy))?;
        writeln!(
            f,
            "{}",
            molecule_energy_line(self.element_name, self.molecule_energy)
        )?;
        writeln!(f, "{}", atomization_energy_line(self.atomization_energy))
    }
}

/// Evaluates all three energies of a diatomic molecule without printing.
#[instrument(skip(factory))]
pub fn evaluate<F: CalculatorFactory>(
    symbol: &str,
    distance: f64,
    factory: F,
) -> Result<EnergyReport, AnalysisError> {
    let molecule = HdMolecule::new(symbol, distance, factory)?;
    let element = molecule.element();

    Ok(EnergyReport {
        element: element.symbol(),
        element_name: element.name(),
        distance,
        atom_energy: molecule.atom_energy()?,
        molecule_energy: molecule.molecule_energy()?,
        atomization_energy: molecule.atomization_energy()?,
    })
}

/// Prints the atom, molecule and atomization energies of a diatomic molecule.
///
/// Each line is written to `out` as soon as its energy is known, so a failing
/// calculator still leaves the lines computed before the failure.
///
/// # Errors
///
/// Returns [`AnalysisError::Molecule`] for invalid input,
/// [`AnalysisError::Calculator`] when an evaluation fails and
/// [`AnalysisError::Output`] when writing to `out` fails.
#[instrument(skip(factory, out))]
pub fn analyze<F: CalculatorFactory, W: Write>(
    symbol: &str,
    distance: f64,
    factory: F,
    out: &mut W,
) -> Result<EnergyReport, AnalysisError> {
    let molecule = HdMolecule::new(symbol, distance, factory)?;
    let element = molecule.element();
    info!(
        "Analyzing {}2 at a bond distance of {} Angstrom",
        element, distance
    );

    let atom_energy = molecule.atom_energy()?;
    writeln!(out, "{}", atom_energy_line(element.name(), atom_energy))?;

    let molecule_energy = molecule.molecule_energy()?;
    writeln!(out, "{}", molecule_energy_line(element.name(), molecule_energy))?;

    let atomization_energy = molecule.atomization_energy()?;
    writeln!(out, "{}", atomization_energy_line(atomization_energy))?;

    Ok(EnergyReport {
        element: element.symbol(),
        element_name: element.name(),
        distance,
        atom_energy,
        molecule_energy,
        atomization_energy,
    })
}

const EXPERIMENTAL_N2_ELEMENT: &str = "N";

/// Prints the energy analysis of N2 at its experimental bond length.
pub fn analyze_exp_n2<F: CalculatorFactory, W: Write>(
    factory: F,
    out: &mut W,
) -> Result<EnergyReport, AnalysisError> {
    analyze(
        EXPERIMENTAL_N2_ELEMENT,
        EXPERIMENTAL_N2_BOND_LENGTH,
        factory,
        out,
    )
}

/// Same molecule as [`analyze_exp_n2`], evaluated without printing.
pub fn evaluate_exp_n2<F: CalculatorFactory>(factory: F) -> Result<EnergyReport, AnalysisError> {
    evaluate(EXPERIMENTAL_N2_ELEMENT, EXPERIMENTAL_N2_BOND_LENGTH, factory)
}
