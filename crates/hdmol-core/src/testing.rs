//! Calculator stubs shared by the unit tests.

use crate::core::calculators::{Calculator, CalculatorError};
use crate::core::models::structure::Structure;

/// Returns `atom` for single-atom structures and `molecule` for anything larger.
pub struct FixedEnergyCalculator {
    atom: f64,
    molecule: f64,
}

impl FixedEnergyCalculator {
    pub fn new(atom: f64, molecule: f64) -> Self {
        Self { atom, molecule }
    }
}

impl Calculator for FixedEnergyCalculator {
    fn name(&self) -> &str {
        "fixed"
    }

    fn potential_energy(&mut self, structure: &Structure) -> Result<f64, CalculatorError> {
        Ok(if structure.len() == 1 {
            self.atom
        } else {
            self.molecule
        })
    }
}

/// A deterministic toy energy: `-Z` per atom plus `1/r` per atom pair.
pub struct GeometryCalculator;

impl Calculator for GeometryCalculator {
    fn name(&self) -> &str {
        "geometry"
    }

    fn potential_energy(&mut self, structure: &Structure) -> Result<f64, CalculatorError> {
        let atoms = structure.atoms();
        let mut energy: f64 = atoms
            .iter()
            .map(|atom| -f64::from(atom.element.atomic_number()))
            .sum();
        for (i, a) in atoms.iter().enumerate() {
            for b in &atoms[i + 1..] {
                energy += 1.0 / a.distance_to(b);
            }
        }
        Ok(energy)
    }
}

pub struct FailingCalculator {
    message: String,
}

impl FailingCalculator {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Calculator for FailingCalculator {
    fn name(&self) -> &str {
        "failing"
    }

    fn potential_energy(&mut self, _structure: &Structure) -> Result<f64, CalculatorError> {
        Err(CalculatorError::Evaluation {
            calculator: self.name().to_string(),
            message: self.message.clone(),
        })
    }
}
