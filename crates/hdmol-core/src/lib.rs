//! # HDMolecule Core Library
//!
//! Energies of homonuclear diatomic molecules (two atoms of the same element)
//! evaluated through an external atomistic energy calculator.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Immutable structural models (`Element`, `Atom`,
//!   `Structure`) and the `Calculator` seam to external energy models such as
//!   ASE's effective-medium-theory calculator.
//!
//! - **[`engine`]: The Logic Core.** `HdMolecule` owns the isolated-atom and
//!   two-atom structures and answers energy queries, attaching a fresh calculator
//!   to each one.
//!
//! - **[`workflows`]: The Public API.** Printing drivers (`analyze`,
//!   `analyze_exp_n2`) and the bond-length scan.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod testing;
