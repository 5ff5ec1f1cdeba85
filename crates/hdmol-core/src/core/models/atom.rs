use super::element::Element;
use nalgebra::Point3;

/// Represents a single atom placed in Cartesian space.
///
/// The position is expressed in Angstroms, which is the length unit expected by
/// the external energy calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The chemical element of the atom.
    pub element: Element,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom` of the given element at `position`.
    ///
    /// # Arguments
    ///
    /// * `element` - The chemical element of the atom.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(element: Element, position: Point3<f64>) -> Self {
        Self { element, position }
    }

    /// Returns the Euclidean distance to `other` in Angstroms.
    pub fn distance_to(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }
}
