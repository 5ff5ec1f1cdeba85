use super::error::AnalysisError;
use crate::core::calculators::CalculatorFactory;
use crate::engine::molecule::HdMolecule;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

/// One bond distance of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanPoint {
    /// Bond distance in Angstroms.
    pub distance: f64,
    /// Energy of the two-atom molecule in eV.
    pub molecule_energy: f64,
    /// `2 * atom_energy - molecule_energy` in eV.
    pub atomization_energy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub element: &'static str,
    pub element_name: &'static str,
    /// Energy of one isolated atom in eV, shared by every point.
    pub atom_energy: f64,
    /// Points in the order the distances were given.
    pub points: Vec<ScanPoint>,
}

impl ScanResult {
    /// The most strongly bound point, i.e. the one with the largest atomization energy.
    pub fn most_stable(&self) -> Option<&ScanPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.atomization_energy.total_cmp(&b.atomization_energy))
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} atom energy: {:5.2} eV",
            self.element_name, self.atom_energy
        )?;
        writeln!(
            f,
            "{:>12}  {:>20}  {:>23}",
            "Distance (Å)", "Molecule energy (eV)", "Atomization energy (eV)"
        )?;
        for point in &self.points {
            writeln!(
                f,
                "{:>12.4}  {:>20.4}  {:>23.4}",
                point.distance, point.molecule_energy, point.atomization_energy
            )?;
        }
        Ok(())
    }
}

/// Returns `steps` evenly spaced distances from `start` to `end` inclusive.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidScan`] unless `0 < start < end`, both bounds
/// are finite and `steps >= 2`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Result<Vec<f64>, AnalysisError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(AnalysisError::InvalidScan(format!(
            "bounds must be finite, got {} to {}",
            start, end
        )));
    }
    if start <= 0.0 {
        return Err(AnalysisError::InvalidScan(format!(
            "start distance must be positive, got {}",
            start
        )));
    }
    if end <= start {
        return Err(AnalysisError::InvalidScan(format!(
            "end distance {} must be greater than start distance {}",
            end, start
        )));
    }
    if steps < 2 {
        return Err(AnalysisError::InvalidScan(format!(
            "at least 2 steps are required, got {}",
            steps
        )));
    }

    let step = (end - start) / (steps - 1) as f64;
    Ok((0..steps)
        .map(|i| {
            if i == steps - 1 {
                end
            } else {
                start + step * i as f64
            }
        })
        .collect())
}

/// Evaluates a diatomic molecule of `symbol` at each of `distances`.
///
/// The isolated-atom energy does not depend on the bond distance, so it is
/// evaluated once and reused for every point.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidScan`] for an empty distance list,
/// [`AnalysisError::Molecule`] for an invalid element or distance and
/// [`AnalysisError::Calculator`] for the first failing evaluation.
#[instrument(skip(factory, reporter), fields(points = distances.len()))]
pub fn run<F: CalculatorFactory + Clone>(
    symbol: &str,
    distances: &[f64],
    factory: F,
    reporter: &ProgressReporter,
) -> Result<ScanResult, AnalysisError> {
    let Some(&first) = distances.first() else {
        return Err(AnalysisError::InvalidScan(
            "no distances to evaluate".to_string(),
        ));
    };

    let molecules = distances
        .iter()
        .map(|&distance| HdMolecule::new(symbol, distance, factory.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    let reference = HdMolecule::new(symbol, first, factory)?;
    let element = reference.element();
    let atom_energy = reference.atom_energy()?;
    info!(
        "Scanning {}2 over {} distances; isolated atom energy {:.4} eV",
        element,
        distances.len(),
        atom_energy
    );

    reporter.report(Progress::TaskStart {
        total_steps: molecules.len() as u64,
    });

    let mut points = Vec::with_capacity(molecules.len());
    for molecule in &molecules {
        let molecule_energy = molecule.molecule_energy()?;
        points.push(ScanPoint {
            distance: molecule.distance(),
            molecule_energy,
            atomization_energy: 2.0 * atom_energy - molecule_energy,
        });
        reporter.report(Progress::TaskIncrement);
    }

    let result = ScanResult {
        element: element.symbol(),
        element_name: element.name(),
        atom_energy,
        points,
    };

    // Reported while the task is still open so the summary is not lost with the bar.
    if let Some(best) = result.most_stable() {
        reporter.report(Progress::Message(format!(
            "Largest atomization energy {:.4} eV at {:.4} Å",
            best.atomization_energy, best.distance
        )));
    }
    reporter.report(Progress::TaskFinish);

    Ok(result)
}
