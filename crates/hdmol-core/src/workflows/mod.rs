//! # Workflows Module
//!
//! High-level entry points that drive [`crate::engine::molecule::HdMolecule`]
//! and present its energies.
//!
//! ## Architecture
//!
//! - **Energy Analysis** ([`analysis`]) - Prints the atom, molecule and
//!   atomization energies for one element and bond distance, including the
//!   experimental N2 example
//! - **Bond-Length Scan** ([`scan`]) - Evaluates the molecule over a grid of
//!   bond distances with progress reporting
//! - **Error Handling** ([`error`]) - The error type shared by all workflows

pub mod analysis;
pub mod error;
pub mod scan;
