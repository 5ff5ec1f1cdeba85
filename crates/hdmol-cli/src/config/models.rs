use hdmolecule::core::calculators::ase::AseCalculatorConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub calculator: AseCalculatorConfig,
}
