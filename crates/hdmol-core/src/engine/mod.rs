//! # Engine Module
//!
//! The stateful layer that ties structures to calculators.
//!
//! ## Architecture
//!
//! - **Diatomic Molecules** ([`molecule`]) - [`molecule::HdMolecule`] owns the
//!   single-atom and two-atom structures of a homonuclear diatomic molecule and
//!   answers the atom, molecule and atomization energy queries
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//!   for multi-step workflows
//! - **Error Handling** ([`error`]) - Input validation errors
//!
//! Every query is synchronous and blocks until the calculator returns. Calculator
//! failures are passed through as-is.

pub mod error;
pub mod molecule;
pub mod progress;
