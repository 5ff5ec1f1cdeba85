use super::error::MoleculeError;
use crate::core::calculators::{Calculator, CalculatorError, CalculatorFactory};
use crate::core::models::element::Element;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::fmt;
use tracing::{debug, instrument};

/// A homonuclear diatomic molecule: two atoms of the same element on a line.
///
/// The molecule is fully defined by its element and bond distance. On
/// construction it builds two structures that never change afterwards: one
/// isolated atom at the origin, and the two-atom molecule with atoms at
/// `(0, 0, 0)` and `(0, 0, distance)`.
///
/// Energies are not cached. Every query asks the factory for a fresh calculator,
/// evaluates the relevant structure, and discards the calculator again.
#[derive(Clone)]
pub struct HdMolecule<F> {
    element: Element,
    distance: f64,
    atom: Structure,
    molecule: Structure,
    factory: F,
}

impl<F> fmt::Debug for HdMolecule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdMolecule")
            .field("element", &self.element)
            .field("distance", &self.distance)
            .finish_non_exhaustive()
    }
}

impl<F: CalculatorFactory> HdMolecule<F> {
    /// Creates a molecule of `symbol` atoms separated by `distance`.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical element symbol of both atoms (e.g. `"N"`).
    /// * `distance` - The bond length in Angstroms.
    /// * `factory` - Produces the calculator used for each energy query.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::UnknownElement`] if `symbol` is not a recognized
    /// element and [`MoleculeError::InvalidDistance`] unless `distance` is finite
    /// and strictly positive.
    pub fn new(symbol: &str, distance: f64, factory: F) -> Result<Self, MoleculeError> {
        let element: Element = symbol.parse()?;
        if !distance.is_finite() || distance <= 0.0 {
            return Err(MoleculeError::InvalidDistance(distance));
        }

        let atom = Structure::from_symbol(element.symbol(), &[Point3::origin()])?;
        let molecule = Structure::from_symbol(
            element.symbol(),
            &[Point3::origin(), Point3::new(0.0, 0.0, distance)],
        )?;

        Ok(Self {
            element,
            distance,
            atom,
            molecule,
            factory,
        })
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The isolated single-atom structure.
    pub fn atom(&self) -> &Structure {
        &self.atom
    }

    /// The two-atom structure.
    pub fn molecule(&self) -> &Structure {
        &self.molecule
    }

    /// Energy of one separated atom of the element, in eV.
    #[instrument(skip_all, fields(element = %self.element))]
    pub fn atom_energy(&self) -> Result<f64, CalculatorError> {
        Self::evaluate(&self.factory, &self.atom)
    }

    /// Energy of the two-atom molecule at the configured distance, in eV.
    #[instrument(skip_all, fields(element = %self.element, distance = self.distance))]
    pub fn molecule_energy(&self) -> Result<f64, CalculatorError> {
        Self::evaluate(&self.factory, &self.molecule)
    }

    /// Energy needed to break the molecule into two free atoms, in eV.
    ///
    /// Computed as `2 * atom_energy - molecule_energy`, with both energies
    /// evaluated afresh.
    pub fn atomization_energy(&self) -> Result<f64, CalculatorError> {
        let e_atom = self.atom_energy()?;
        let e_molecule = self.molecule_energy()?;

        Ok(2.0 * e_atom - e_molecule)
    }

    fn evaluate(factory: &F, structure: &Structure) -> Result<f64, CalculatorError> {
        let mut calculator = factory.create();
        let energy = calculator.potential_energy(structure)?;
        debug!(
            "{} evaluated {}: {:.6} eV",
            calculator.name(),
            structure.formula(),
            energy
        );
        Ok(energy)
    }
}
