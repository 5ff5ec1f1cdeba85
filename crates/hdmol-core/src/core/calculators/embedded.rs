use super::ase::{ASE_DRIVER, AseBackend, EnergyRequest, ensure_finite};
use super::{Calculator, CalculatorError};
use crate::core::models::structure::Structure;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyModule;
use std::ffi::CString;
use tracing::debug;

/// An ASE calculator evaluated inside an interpreter embedded in this process.
///
/// Uses whichever Python pyo3 was built against, so `ase` must be importable
/// there. Exceptions are reported as [`CalculatorError::Python`] with the
/// formatted traceback.
#[derive(Debug, Clone)]
pub struct EmbeddedAseCalculator {
    backend: AseBackend,
    name: String,
}

impl EmbeddedAseCalculator {
    pub fn new(backend: AseBackend) -> Self {
        Self {
            backend,
            name: format!("ase-{}-embedded", backend),
        }
    }
}

impl Calculator for EmbeddedAseCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn potential_energy(&mut self, structure: &Structure) -> Result<f64, CalculatorError> {
        let request = EnergyRequest::from_structure(structure);
        debug!(
            "Evaluating {} ({} atoms) with {}",
            structure.formula(),
            structure.len(),
            self.name
        );

        let energy = Python::with_gil(|py| {
            evaluate(
                py,
                self.backend.module(),
                self.backend.class_name(),
                request.symbols,
                request.positions,
            )
            .map_err(|err| python_error(py, err))
        })?;

        ensure_finite(energy)
    }
}

fn evaluate(
    py: Python<'_>,
    module: &str,
    class_name: &str,
    symbols: Vec<&str>,
    positions: Vec<[f64; 3]>,
) -> PyResult<f64> {
    let code = CString::new(ASE_DRIVER)?;
    let driver = PyModule::from_code(
        py,
        code.as_c_str(),
        c_str!("hdmol_ase_driver.py"),
        c_str!("hdmol_ase_driver"),
    )?;
    driver
        .getattr("potential_energy")?
        .call1((symbols, positions, module, class_name))?
        .extract()
}

fn python_error(py: Python<'_>, err: PyErr) -> CalculatorError {
    let traceback = err
        .traceback(py)
        .and_then(|tb| tb.format().ok())
        .unwrap_or_default();
    CalculatorError::Python {
        traceback: format!("{}{}", traceback, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn raise_in_python(py: Python<'_>) -> PyErr {
        PyModule::from_code(
            py,
            c_str!("def fail():\n    raise ValueError('no EMT parameters')\n"),
            c_str!("failing_calculator.py"),
            c_str!("failing_calculator"),
        )
        .and_then(|module| {
            module.getattr("fail")?.call0()?;
            Ok(())
        })
        .unwrap_err()
    }

    #[test]
    fn name_marks_the_embedded_bridge() {
        assert_eq!(
            EmbeddedAseCalculator::new(AseBackend::Emt).name(),
            "ase-emt-embedded"
        );
    }

    #[test]
    fn python_exception_keeps_the_formatted_traceback() {
        let err = Python::with_gil(|py| python_error(py, raise_in_python(py)));

        match err {
            CalculatorError::Python { traceback } => {
                assert!(traceback.starts_with("Traceback (most recent call last):"));
                assert!(traceback.contains("failing_calculator.py"));
                assert!(traceback.ends_with("ValueError: no EMT parameters"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_calculator_module_is_a_python_error() {
        let err = Python::with_gil(|py| {
            evaluate(
                py,
                "hdmol_missing_calculators",
                "EMT",
                vec!["N"],
                vec![[0.0, 0.0, 0.0]],
            )
            .map_err(|err| python_error(py, err))
            .unwrap_err()
        });

        // Either `ase` or the calculator module is missing; both surface as an import error.
        match err {
            CalculatorError::Python { traceback } => {
                assert!(traceback.contains("ModuleNotFoundError"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ase_calculator_delegates_to_the_embedded_bridge() {
        use super::super::ase::{AseBridge, AseCalculatorConfig};
        use super::super::CalculatorFactory;

        assert!(AseBridge::Embedded.is_available());
        let config = AseCalculatorConfig {
            interpreter: "/nonexistent/bin/python3".into(),
            bridge: AseBridge::Embedded,
            ..Default::default()
        };
        let structure = Structure::from_symbol("N", &[Point3::origin()]).unwrap();

        // The interpreter path is never spawned, so any failure comes from Python itself.
        match config.create().potential_energy(&structure) {
            Ok(energy) => assert!(energy.is_finite()),
            Err(err) => assert!(matches!(err, CalculatorError::Python { .. })),
        }
    }
}
