// src/cli.rs

use clap::{Parser, ValueEnum};
use inventory_sim::io::catalog::{find_product, Product};
use inventory_sim::simulation::config::DEFAULT_SERVICE_LEVEL_FACTOR;
use inventory_sim::strategy::implementations::DEFAULT_POISSON_ITERATION_CAP;
use inventory_sim::strategy::optimization::service_level_factor;
use inventory_sim::{DemandPolicyKind, SafetyStockMethod, SimulationConfig, SimulationError};
use rand::Rng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Inventory depletion simulation under stochastic demand")]
pub struct Cli {
    /// Product name or menu number (1 = Gaming Laptop, 2 = Smartphone, 3 = Headphones)
    #[arg(short, long, default_value = "1")]
    pub product: String,
    /// Demand model
    #[arg(short, long, value_enum, default_value_t = ModelArg::Simple)]
    pub model: ModelArg,
    /// Number of simulated days
    #[arg(short, long, default_value_t = 14)]
    pub days: u32,
    /// Seed for the number source; a random one is picked when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
    /// Safety stock formula
    #[arg(long, value_enum, default_value_t = SafetyStockArg::Statistical)]
    pub safety_stock: SafetyStockArg,
    /// z-score used by the statistical safety stock formula
    #[arg(long, conflicts_with = "service_level")]
    pub service_level_factor: Option<f64>,
    /// Target probability of not stocking out, converted to a z-score
    #[arg(long)]
    pub service_level: Option<f64>,
    /// Draws allowed per day for the Poisson model
    #[arg(long, default_value_t = DEFAULT_POISSON_ITERATION_CAP)]
    pub poisson_iteration_cap: u32,
    /// Write the day table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Run all three demand models with the same seed and compare them
    #[arg(long)]
    pub compare: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Simple,
    MonteCarlo,
    Poisson,
}

impl From<ModelArg> for DemandPolicyKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Simple => DemandPolicyKind::Simple,
            ModelArg::MonteCarlo => DemandPolicyKind::MonteCarlo,
            ModelArg::Poisson => DemandPolicyKind::Poisson,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SafetyStockArg {
    Statistical,
    Approximate,
}

impl From<SafetyStockArg> for SafetyStockMethod {
    fn from(arg: SafetyStockArg) -> Self {
        match arg {
            SafetyStockArg::Statistical => SafetyStockMethod::Statistical,
            SafetyStockArg::Approximate => SafetyStockMethod::Approximate,
        }
    }
}

impl Cli {
    /// Resolves the product and turns the arguments into a run configuration.
    pub fn to_config(&self) -> Result<(Product, SimulationConfig), SimulationError> {
        let product = find_product(&self.product)?;

        let z = match (self.service_level_factor, self.service_level) {
            (Some(z), _) => z,
            (None, Some(level)) => service_level_factor(level),
            (None, None) => DEFAULT_SERVICE_LEVEL_FACTOR,
        };

        let seed = self
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..100));

        let config = SimulationConfig {
            params: product.params(z)?,
            policy: self.model.into(),
            days: self.days,
            seed,
            safety_stock_method: self.safety_stock.into(),
            poisson_iteration_cap: self.poisson_iteration_cap,
        };
        config.validate()?;
        Ok((product, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["inventory-sim", "--seed", "7"]);
        let (product, config) = cli.to_config().unwrap();
        assert_eq!(product.name, "Gaming Laptop");
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_full_argument_set() {
        let cli = Cli::parse_from([
            "inventory-sim",
            "--product",
            "Headphones",
            "--model",
            "monte-carlo",
            "--days",
            "30",
            "--seed",
            "-12",
            "--safety-stock",
            "approximate",
            "--service-level",
            "0.95",
        ]);
        let (product, config) = cli.to_config().unwrap();
        assert_eq!(product.mean_demand, 10);
        assert_eq!(config.policy, DemandPolicyKind::MonteCarlo);
        assert_eq!(config.days, 30);
        assert_eq!(config.seed, -12);
        assert_eq!(config.safety_stock_method, SafetyStockMethod::Approximate);
        assert!((config.params.service_level_factor - 1.645).abs() < 5e-3);
    }

    #[test]
    fn test_random_seed_is_in_range() {
        let cli = Cli::parse_from(["inventory-sim"]);
        let (_, config) = cli.to_config().unwrap();
        assert!((0..100).contains(&config.seed));
    }

    #[test]
    fn test_zero_days_is_a_configuration_error() {
        let cli = Cli::parse_from(["inventory-sim", "--days", "0"]);
        assert!(matches!(cli.to_config(), Err(SimulationError::Configuration(_))));
    }

    #[test]
    fn test_conflicting_service_level_flags() {
        let result = Cli::try_parse_from([
            "inventory-sim",
            "--service-level-factor",
            "2.0",
            "--service-level",
            "0.9",
        ]);
        assert!(result.is_err());
    }
}
