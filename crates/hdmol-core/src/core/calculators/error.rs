use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("Failed to start calculator interpreter '{interpreter}': {source}")]
    InterpreterUnavailable {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Calculator process '{interpreter}' exited with {status}:\n{stderr}")]
    ProcessFailed {
        interpreter: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Calculator returned malformed output: {reason}")]
    MalformedOutput { reason: String },

    #[error("Failed to encode calculator request: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error while communicating with the calculator: {0}")]
    Io(#[from] std::io::Error),

    #[error("Python raised an exception while evaluating the energy:\n{traceback}")]
    Python { traceback: String },

    #[error("The '{bridge}' calculator bridge is not available: hdmolecule was built without the '{feature}' feature")]
    BridgeUnavailable {
        bridge: String,
        feature: &'static str,
    },

    #[error("Calculator '{calculator}' failed: {message}")]
    Evaluation { calculator: String, message: String },
}
