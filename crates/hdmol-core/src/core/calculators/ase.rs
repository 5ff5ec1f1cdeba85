use super::{Calculator, CalculatorError, CalculatorFactory};
use crate::core::models::structure::Structure;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

pub const DEFAULT_INTERPRETER: &str = "python3";

/// Python module shared by both bridges. Run as a script it reads a JSON request
/// on stdin; imported as a module it exposes `potential_energy`.
pub(crate) const ASE_DRIVER: &str = include_str!("../../../python/ase_driver.py");

/// The ASE calculator class evaluated by the Python driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AseBackend {
    /// Effective medium theory, `ase.calculators.emt.EMT`.
    #[default]
    Emt,
    /// `ase.calculators.lj.LennardJones` with ASE's default parameters.
    LennardJones,
}

impl AseBackend {
    pub(crate) fn module(&self) -> &'static str {
        match self {
            AseBackend::Emt => "ase.calculators.emt",
            AseBackend::LennardJones => "ase.calculators.lj",
        }
    }

    pub(crate) fn class_name(&self) -> &'static str {
        match self {
            AseBackend::Emt => "EMT",
            AseBackend::LennardJones => "LennardJones",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AseBackend::Emt => "emt",
            AseBackend::LennardJones => "lennard-jones",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown ASE backend '{0}'. Expected 'emt' or 'lennard-jones'.")]
pub struct UnknownBackendError(pub String);

impl FromStr for AseBackend {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emt" => Ok(AseBackend::Emt),
            "lennard-jones" | "lennard_jones" | "lj" => Ok(AseBackend::LennardJones),
            _ => Err(UnknownBackendError(s.to_string())),
        }
    }
}

impl fmt::Display for AseBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the Python side is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AseBridge {
    /// A short-lived interpreter process per evaluation.
    #[default]
    Subprocess,
    /// The interpreter embedded through pyo3. Needs the `python` feature.
    Embedded,
}

impl AseBridge {
    pub fn as_str(&self) -> &'static str {
        match self {
            AseBridge::Subprocess => "subprocess",
            AseBridge::Embedded => "embedded",
        }
    }

    /// Whether this build can evaluate energies through the bridge.
    pub fn is_available(&self) -> bool {
        match self {
            AseBridge::Subprocess => true,
            AseBridge::Embedded => cfg!(feature = "python"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown calculator bridge '{0}'. Expected 'subprocess' or 'embedded'.")]
pub struct UnknownBridgeError(pub String);

impl FromStr for AseBridge {
    type Err = UnknownBridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "subprocess" => Ok(AseBridge::Subprocess),
            "embedded" => Ok(AseBridge::Embedded),
            _ => Err(UnknownBridgeError(s.to_string())),
        }
    }
}

impl fmt::Display for AseBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for running ASE calculators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AseCalculatorConfig {
    /// The Python interpreter with `ase` importable. Only used by the subprocess bridge.
    pub interpreter: PathBuf,
    pub backend: AseBackend,
    pub bridge: AseBridge,
}

impl Default for AseCalculatorConfig {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            backend: AseBackend::default(),
            bridge: AseBridge::default(),
        }
    }
}

impl CalculatorFactory for AseCalculatorConfig {
    type Output = AseCalculator;

    fn create(&self) -> AseCalculator {
        AseCalculator::new(self.clone())
    }
}

#[derive(Serialize)]
pub(crate) struct EnergyRequest<'a> {
    pub(crate) symbols: Vec<&'a str>,
    pub(crate) positions: Vec<[f64; 3]>,
}

impl<'a> EnergyRequest<'a> {
    pub(crate) fn from_structure(structure: &'a Structure) -> Self {
        Self {
            symbols: structure.symbols().collect(),
            positions: structure.positions().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }
}

#[derive(Deserialize)]
struct EnergyResponse {
    energy: f64,
}

pub(crate) fn ensure_finite(energy: f64) -> Result<f64, CalculatorError> {
    if !energy.is_finite() {
        return Err(CalculatorError::MalformedOutput {
            reason: format!("non-finite energy {}", energy),
        });
    }
    Ok(energy)
}

/// An ASE calculator reached through the configured [`AseBridge`].
///
/// With the subprocess bridge the structure is written to a short-lived
/// interpreter as JSON on stdin, and the energy is read back as JSON from the
/// last non-empty line of stdout. A non-zero exit status is reported with the
/// interpreter's stderr (typically a traceback) left untouched.
#[derive(Debug, Clone)]
pub struct AseCalculator {
    config: AseCalculatorConfig,
    name: String,
}

impl AseCalculator {
    pub fn new(config: AseCalculatorConfig) -> Self {
        let name = format!("ase-{}", config.backend);
        Self { config, name }
    }

    fn driver_args(&self) -> [&'static str; 2] {
        [self.config.backend.module(), self.config.backend.class_name()]
    }

    fn parse_response(stdout: &[u8]) -> Result<f64, CalculatorError> {
        let text = String::from_utf8_lossy(stdout);
        let line = text
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| CalculatorError::MalformedOutput {
                reason: "no output".to_string(),
            })?;

        let response: EnergyResponse =
            serde_json::from_str(line.trim()).map_err(|e| CalculatorError::MalformedOutput {
                reason: format!("{} in '{}'", e, line.trim()),
            })?;

        ensure_finite(response.energy)
    }

    fn evaluate_in_subprocess(&self, structure: &Structure) -> Result<f64, CalculatorError> {
        let interpreter = self.config.interpreter.display().to_string();
        let request = serde_json::to_vec(&EnergyRequest::from_structure(structure))?;

        debug!(
            "Evaluating {} ({} atoms) with {} via '{}'",
            structure.formula(),
            structure.len(),
            self.name,
            interpreter
        );
        trace!("Calculator request: {}", String::from_utf8_lossy(&request));

        let mut child = Command::new(&self.config.interpreter)
            .arg("-c")
            .arg(ASE_DRIVER)
            .args(self.driver_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CalculatorError::InterpreterUnavailable {
                interpreter: interpreter.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A driver that dies before reading its input is reported through its exit status.
            if let Err(e) = stdin.write_all(&request) {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            return Err(CalculatorError::ProcessFailed {
                interpreter,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Self::parse_response(&output.stdout)
    }

    #[cfg(feature = "python")]
    fn evaluate_embedded(&self, structure: &Structure) -> Result<f64, CalculatorError> {
        super::embedded::EmbeddedAseCalculator::new(self.config.backend).potential_energy(structure)
    }

    #[cfg(not(feature = "python"))]
    fn evaluate_embedded(&self, _structure: &Structure) -> Result<f64, CalculatorError> {
        Err(CalculatorError::BridgeUnavailable {
            bridge: AseBridge::Embedded.to_string(),
            feature: "python",
        })
    }
}

impl Calculator for AseCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn potential_energy(&mut self, structure: &Structure) -> Result<f64, CalculatorError> {
        let energy = match self.config.bridge {
            AseBridge::Subprocess => self.evaluate_in_subprocess(structure)?,
            AseBridge::Embedded => self.evaluate_embedded(structure)?,
        };
        debug!("{} energy of {}: {} eV", self.name, structure.formula(), energy);
        Ok(energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use serial_test::serial;

    fn dimer() -> Structure {
        Structure::from_symbol("N", &[Point3::origin(), Point3::new(0.0, 0.0, 1.1)]).unwrap()
    }

    #[test]
    fn backend_parses_known_names_case_insensitively() {
        assert_eq!("emt".parse(), Ok(AseBackend::Emt));
        assert_eq!("EMT".parse(), Ok(AseBackend::Emt));
        assert_eq!("lennard-jones".parse(), Ok(AseBackend::LennardJones));
        assert_eq!("LJ".parse(), Ok(AseBackend::LennardJones));
        assert_eq!(
            "morse".parse::<AseBackend>(),
            Err(UnknownBackendError("morse".to_string()))
        );
    }

    #[test]
    fn backend_display_round_trips_through_from_str() {
        for backend in [AseBackend::Emt, AseBackend::LennardJones] {
            assert_eq!(backend.to_string().parse(), Ok(backend));
        }
    }

    #[test]
    fn default_config_uses_python3_and_emt() {
        let config = AseCalculatorConfig::default();
        assert_eq!(config.interpreter, PathBuf::from("python3"));
        assert_eq!(config.backend, AseBackend::Emt);
        assert_eq!(config.bridge, AseBridge::Subprocess);
        assert_eq!(config.create().name(), "ase-emt");
    }

    #[test]
    fn request_lists_symbols_and_positions_in_order() {
        let structure = dimer();
        let json = serde_json::to_value(EnergyRequest::from_structure(&structure)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "symbols": ["N", "N"],
                "positions": [[0.0, 0.0, 0.0], [0.0, 0.0, 1.1]],
            })
        );
    }

    #[test]
    fn driver_arguments_name_the_selected_backend() {
        let emt = AseCalculator::new(AseCalculatorConfig::default());
        assert_eq!(emt.driver_args(), ["ase.calculators.emt", "EMT"]);

        let lj = AseCalculator::new(AseCalculatorConfig {
            backend: AseBackend::LennardJones,
            ..Default::default()
        });
        assert_eq!(lj.driver_args(), ["ase.calculators.lj", "LennardJones"]);
    }

    #[test]
    fn driver_runs_as_script_and_exposes_energy_function() {
        assert!(ASE_DRIVER.contains("def potential_energy(symbols, positions, module, class_name):"));
        assert!(ASE_DRIVER.contains(r#"if __name__ == "__main__":"#));
        assert!(ASE_DRIVER.contains(r#"json.dump({"energy": energy}, sys.stdout)"#));
    }

    #[test]
    fn bridge_parses_known_names() {
        assert_eq!("subprocess".parse(), Ok(AseBridge::Subprocess));
        assert_eq!("Embedded".parse(), Ok(AseBridge::Embedded));
        assert_eq!(
            "socket".parse::<AseBridge>(),
            Err(UnknownBridgeError("socket".to_string()))
        );
        assert_eq!(AseBridge::Embedded.to_string(), "embedded");
        assert!(AseBridge::Subprocess.is_available());
    }

    #[cfg(not(feature = "python"))]
    #[test]
    fn embedded_bridge_needs_the_python_feature() {
        assert!(!AseBridge::Embedded.is_available());
        let mut calc = AseCalculator::new(AseCalculatorConfig {
            bridge: AseBridge::Embedded,
            ..Default::default()
        });

        let err = calc.potential_energy(&dimer()).unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::BridgeUnavailable { feature: "python", .. }
        ));
    }

    #[test]
    fn parse_response_reads_last_non_empty_line() {
        let stdout = b"some warning printed by a library\n{\"energy\": -1.25}\n\n";
        assert_eq!(AseCalculator::parse_response(stdout).unwrap(), -1.25);
    }

    #[test]
    fn parse_response_rejects_empty_and_garbled_output() {
        assert!(matches!(
            AseCalculator::parse_response(b""),
            Err(CalculatorError::MalformedOutput { .. })
        ));
        assert!(matches!(
            AseCalculator::parse_response(b"energy = 3.0\n"),
            Err(CalculatorError::MalformedOutput { .. })
        ));
        assert!(matches!(
            AseCalculator::parse_response(b"{\"forces\": []}\n"),
            Err(CalculatorError::MalformedOutput { .. })
        ));
    }

    #[test]
    #[serial]
    fn missing_interpreter_is_reported() {
        let mut calc = AseCalculator::new(AseCalculatorConfig {
            interpreter: PathBuf::from("/nonexistent/bin/python3"),
            ..Default::default()
        });

        let err = calc.potential_energy(&dimer()).unwrap_err();
        assert!(matches!(
            err,
            CalculatorError::InterpreterUnavailable { ref interpreter, .. }
                if interpreter == "/nonexistent/bin/python3"
        ));
    }

    #[cfg(unix)]
    mod fake_interpreter {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;
        use tempfile::TempDir;

        fn install(dir: &TempDir, body: &str) -> PathBuf {
            let path = dir.path().join("fake-python");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn calculator(interpreter: &Path) -> AseCalculator {
            AseCalculator::new(AseCalculatorConfig {
                interpreter: interpreter.to_path_buf(),
                ..Default::default()
            })
        }

        #[test]
        #[serial]
        fn energy_is_read_from_process_stdout() {
            let dir = tempfile::tempdir().unwrap();
            let python = install(&dir, "cat > /dev/null\necho '{\"energy\": 0.4375}'");

            let energy = calculator(&python).potential_energy(&dimer()).unwrap();
            assert_eq!(energy, 0.4375);
        }

        #[test]
        #[serial]
        fn request_is_delivered_on_stdin() {
            let dir = tempfile::tempdir().unwrap();
            let captured = dir.path().join("request.json");
            let python = install(
                &dir,
                &format!(
                    "cat > '{}'\necho '{{\"energy\": 1.0}}'",
                    captured.display()
                ),
            );

            calculator(&python).potential_energy(&dimer()).unwrap();

            let request: serde_json::Value =
                serde_json::from_str(&fs::read_to_string(&captured).unwrap()).unwrap();
            assert_eq!(request["symbols"], serde_json::json!(["N", "N"]));
            assert_eq!(request["positions"][1][2], serde_json::json!(1.1));
        }

        #[test]
        #[serial]
        fn backend_is_passed_after_the_driver_program() {
            let dir = tempfile::tempdir().unwrap();
            let captured = dir.path().join("args.txt");
            let python = install(
                &dir,
                &format!(
                    "printf '%s\\n' \"$1\" \"$3\" \"$4\" > '{}'\ncat > /dev/null\necho '{{\"energy\": 1.0}}'",
                    captured.display()
                ),
            );

            let mut calc = AseCalculator::new(AseCalculatorConfig {
                interpreter: python,
                backend: AseBackend::LennardJones,
                ..Default::default()
            });
            calc.potential_energy(&dimer()).unwrap();

            assert_eq!(
                fs::read_to_string(&captured).unwrap(),
                "-c\nase.calculators.lj\nLennardJones\n"
            );
        }

        #[test]
        #[serial]
        fn non_zero_exit_carries_stderr_unchanged() {
            let dir = tempfile::tempdir().unwrap();
            let python = install(
                &dir,
                "cat > /dev/null\necho 'NotImplementedError: No EMT-potential for Xe' >&2\nexit 1",
            );

            let err = calculator(&python).potential_energy(&dimer()).unwrap_err();
            match err {
                CalculatorError::ProcessFailed { stderr, status, .. } => {
                    assert_eq!(stderr, "NotImplementedError: No EMT-potential for Xe");
                    assert_eq!(status.code(), Some(1));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        #[serial]
        fn garbled_stdout_is_malformed_output() {
            let dir = tempfile::tempdir().unwrap();
            let python = install(&dir, "cat > /dev/null\necho 'not json'");

            let err = calculator(&python).potential_energy(&dimer()).unwrap_err();
            assert!(matches!(err, CalculatorError::MalformedOutput { .. }));
        }
    }
}
