use super::atom::Atom;
use super::element::{Element, UnknownElementError};
use nalgebra::Point3;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StructureError {
    #[error(transparent)]
    UnknownElement(#[from] UnknownElementError),

    #[error("A structure needs at least one atom")]
    Empty,

    #[error("Atom {index} has a non-finite coordinate: {position:?}")]
    NonFiniteCoordinate { index: usize, position: [f64; 3] },
}

/// An ordered arrangement of atoms in Cartesian space.
///
/// This is the unit handed to an energy calculator. A structure is immutable
/// once built; its geometry never changes between energy evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    atoms: Vec<Atom>,
}

impl Structure {
    /// Builds a structure of identical atoms from an element symbol and a list
    /// of coordinates, one atom per coordinate.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical element symbol shared by all atoms.
    /// * `positions` - The coordinates of the atoms, in Angstroms.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::UnknownElement`] if `symbol` is not a known
    /// element, [`StructureError::Empty`] if `positions` is empty, and
    /// [`StructureError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite.
    pub fn from_symbol(symbol: &str, positions: &[Point3<f64>]) -> Result<Self, StructureError> {
        let element: Element = symbol.parse()?;
        let atoms = positions
            .iter()
            .map(|position| Atom::new(element, *position))
            .collect();
        Self::from_atoms(atoms)
    }

    /// Builds a structure from already constructed atoms.
    pub fn from_atoms(atoms: Vec<Atom>) -> Result<Self, StructureError> {
        if atoms.is_empty() {
            return Err(StructureError::Empty);
        }
        if let Some((index, atom)) = atoms
            .iter()
            .enumerate()
            .find(|(_, atom)| !atom.position.iter().all(|c| c.is_finite()))
        {
            return Err(StructureError::NonFiniteCoordinate {
                index,
                position: [atom.position.x, atom.position.y, atom.position.z],
            });
        }
        Ok(Self { atoms })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.atoms.iter().map(|atom| atom.element.symbol())
    }

    pub fn positions(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.atoms.iter().map(|atom| &atom.position)
    }

    /// Chemical formula with alphabetically sorted symbols, e.g. `"N2"`.
    pub fn formula(&self) -> String {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for symbol in self.symbols() {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{}{}", symbol, count)
                }
            })
            .collect()
    }
}
