//! # Calculators Module
//!
//! The seam between the structural model and external energy-evaluation
//! capabilities.
//!
//! ## Overview
//!
//! A [`Calculator`] turns a [`Structure`] into a scalar potential energy in eV.
//! Calculators are treated as black boxes: whatever potential model they use,
//! and however they fail, is their own business. Errors are reported as
//! [`CalculatorError`] and propagated unchanged by every caller in this crate.
//!
//! Energy queries never reuse a calculator. Each query asks a
//! [`CalculatorFactory`] for a fresh instance, attaches it to the structure and
//! evaluates. Any `Fn() -> C` closure is a factory, which keeps test stubs short.
//!
//! ## Key Components
//!
//! - [`ase`] - Bridge to ASE calculators (EMT by default) running in a Python
//!   interpreter subprocess, or in an embedded interpreter
//! - `embedded` - The pyo3 side of the bridge, behind the `python` feature
//! - [`error`] - The calculator error taxonomy
//!
//! ```ignore
//! use hdmolecule::core::calculators::{ase::AseCalculatorConfig, CalculatorFactory, Calculator};
//!
//! let mut emt = AseCalculatorConfig::default().create();
//! let energy = emt.potential_energy(&structure)?;
//! ```

pub mod ase;
#[cfg(feature = "python")]
pub mod embedded;
pub mod error;

pub use error::CalculatorError;

use crate::core::models::structure::Structure;

/// An external energy-evaluation capability.
pub trait Calculator {
    /// A short human-readable name used in logs (e.g. `"ase-emt"`).
    fn name(&self) -> &str;

    /// Computes the potential energy of `structure` in eV.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the underlying evaluator reports.
    fn potential_energy(&mut self, structure: &Structure) -> Result<f64, CalculatorError>;
}

/// Produces a fresh [`Calculator`] for every energy evaluation.
pub trait CalculatorFactory {
    type Output: Calculator;

    fn create(&self) -> Self::Output;
}

impl<F, C> CalculatorFactory for F
where
    F: Fn() -> C,
    C: Calculator,
{
    type Output = C;

    fn create(&self) -> C {
        self()
    }
}
