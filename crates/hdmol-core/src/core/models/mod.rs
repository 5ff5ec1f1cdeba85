//! # Models Module
//!
//! Immutable data structures describing what gets handed to an energy
//! calculator: elements, atoms placed in space, and structures built from them.
//!
//! - [`element`] - Periodic table lookup by chemical symbol
//! - [`atom`] - A single atom with a Cartesian position
//! - [`structure`] - An ordered arrangement of atoms

pub mod atom;
pub mod element;
pub mod structure;
