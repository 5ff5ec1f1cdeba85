use crate::core::calculators::CalculatorError;
use crate::engine::error::MoleculeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid molecule: {0}")]
    Molecule(#[from] MoleculeError),

    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error("Invalid scan range: {0}")]
    InvalidScan(String),

    #[error("Failed to write analysis output: {0}")]
    Output(#[from] std::io::Error),
}
