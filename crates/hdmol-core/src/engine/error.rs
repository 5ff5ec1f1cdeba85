use crate::core::models::element::UnknownElementError;
use crate::core::models::structure::StructureError;
use thiserror::Error;

/// Invalid input when constructing a diatomic molecule.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoleculeError {
    #[error(transparent)]
    UnknownElement(#[from] UnknownElementError),

    #[error("Bond distance must be a finite positive number of Angstroms, got {0}")]
    InvalidDistance(f64),

    #[error("Failed to build structure: {0}")]
    Structure(#[from] StructureError),
}
