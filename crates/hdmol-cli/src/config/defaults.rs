use hdmolecule::core::calculators::ase::{AseBackend, AseBridge, DEFAULT_INTERPRETER};
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub python: PathBuf,
    pub backend: AseBackend,
    pub bridge: AseBridge,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            python: PathBuf::from(DEFAULT_INTERPRETER),
            backend: AseBackend::Emt,
            bridge: AseBridge::Subprocess,
        }
    }
}
