//! # Core Module
//!
//! The foundation of the library: the structural data model and the seam to
//! external energy calculators.
//!
//! ## Architecture
//!
//! - **Structural Representation** ([`models`]) - Elements, atoms and structures,
//!   built from a chemical symbol and a list of coordinates
//! - **Energy Evaluation** ([`calculators`]) - The [`calculators::Calculator`]
//!   trait and the bridge to ASE calculators running in a Python interpreter
//!
//! The potential models themselves are never implemented here. A calculator is a
//! black box that maps a structure to a potential energy in eV.

pub mod calculators;
pub mod models;
