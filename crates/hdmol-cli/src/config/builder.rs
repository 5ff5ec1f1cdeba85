use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::CalculatorArgs;
use crate::error::{CliError, Result};
use hdmolecule::core::calculators::ase::{AseBackend, AseBridge, AseCalculatorConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the calculator settings: CLI flags win over `--set` values, which
/// win over the config file, which wins over built-in defaults.
pub fn build_config(
    args: &CalculatorArgs,
    config_path: Option<&Path>,
    set_values: &[String],
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, set_values)?;

    let calc_file = file_config.calculator.take().unwrap_or_default();

    let python = args
        .python
        .clone()
        .or(calc_file.python)
        .unwrap_or(defaults.python);
    let backend = args
        .backend
        .or(calc_file.backend)
        .unwrap_or(defaults.backend);
    let bridge = args
        .bridge
        .or(calc_file.bridge)
        .unwrap_or(defaults.bridge);

    if !bridge.is_available() {
        return Err(CliError::Config(format!(
            "The '{}' calculator bridge requires hdmol to be built with the `python` feature",
            bridge
        )));
    }
    let interpreter = resolve_interpreter(python)?;
    debug!(
        "Resolved calculator: backend '{}' over the {} bridge via interpreter {:?}",
        backend, bridge, interpreter
    );

    Ok(AppConfig {
        calculator: AseCalculatorConfig {
            interpreter,
            backend,
            bridge,
        },
    })
}

/// Bare names such as `python3` are left for the OS to look up on `PATH`;
/// anything that looks like a path must exist.
fn resolve_interpreter(python: PathBuf) -> Result<PathBuf> {
    let looks_like_path = python.is_absolute() || python.to_string_lossy().contains(['/', '\\']);
    if looks_like_path && !python.exists() {
        return Err(CliError::Config(format!(
            "Python interpreter does not exist: {}",
            python.display()
        )));
    }
    Ok(python)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "calculator.python" => {
                config
                    .calculator
                    .get_or_insert_with(Default::default)
                    .python = Some(PathBuf::from(value_str));
            }
            "calculator.backend" => {
                let backend = value_str
                    .parse::<AseBackend>()
                    .map_err(|e| CliError::Config(e.to_string()))?;
                config
                    .calculator
                    .get_or_insert_with(Default::default)
                    .backend = Some(backend);
            }
            "calculator.bridge" => {
                let bridge = value_str
                    .parse::<AseBridge>()
                    .map_err(|e| CliError::Config(e.to_string()))?;
                config
                    .calculator
                    .get_or_insert_with(Default::default)
                    .bridge = Some(bridge);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
