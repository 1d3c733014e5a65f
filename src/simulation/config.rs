// src/simulation/config.rs

use crate::error::SimulationError;
use crate::strategy::implementations::{DemandPolicyKind, DEFAULT_POISSON_ITERATION_CAP};
use crate::strategy::optimization::SafetyStockMethod;
use serde::{Deserialize, Serialize};

/// z-score for a 95% service level.
pub const DEFAULT_SERVICE_LEVEL_FACTOR: f64 = 1.645;

/// Per-run product parameters. Validated once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Average daily demand.
    pub mean_demand: u32,
    /// Replenishment lead time in days. Only the safety stock formulas use it.
    pub lead_time: u32,
    pub initial_stock: i64,
    pub service_level_factor: f64,
}

impl SimulationParameters {
    /// Builds parameters with the default service level factor.
    pub fn new(mean_demand: u32, lead_time: u32, initial_stock: i64) -> Result<Self, SimulationError> {
        Self::with_service_level_factor(
            mean_demand,
            lead_time,
            initial_stock,
            DEFAULT_SERVICE_LEVEL_FACTOR,
        )
    }

    pub fn with_service_level_factor(
        mean_demand: u32,
        lead_time: u32,
        initial_stock: i64,
        service_level_factor: f64,
    ) -> Result<Self, SimulationError> {
        let params = Self {
            mean_demand,
            lead_time,
            initial_stock,
            service_level_factor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Fields are public so callers can deserialize parameters directly;
    /// this re-checks them before a run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.mean_demand == 0 {
            return Err(SimulationError::Configuration(
                "mean demand must be positive".to_string(),
            ));
        }
        if self.lead_time == 0 {
            return Err(SimulationError::Configuration(
                "lead time must be positive".to_string(),
            ));
        }
        if !self.service_level_factor.is_finite() || self.service_level_factor <= 0.0 {
            return Err(SimulationError::Configuration(format!(
                "service level factor must be a positive number, got {}",
                self.service_level_factor
            )));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    // Gaming Laptop, the first catalog product.
    fn default() -> Self {
        Self {
            mean_demand: 3,
            lead_time: 5,
            initial_stock: 50,
            service_level_factor: DEFAULT_SERVICE_LEVEL_FACTOR,
        }
    }
}

/// Everything needed to reproduce one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub params: SimulationParameters,
    pub policy: DemandPolicyKind,
    pub days: u32,
    pub seed: i64,
    pub safety_stock_method: SafetyStockMethod,
    /// Upper bound on draws per day for the Poisson policy.
    pub poisson_iteration_cap: u32,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.params.validate()?;
        if self.days == 0 {
            return Err(SimulationError::Configuration(
                "number of simulated days must be positive".to_string(),
            ));
        }
        if self.poisson_iteration_cap == 0 {
            return Err(SimulationError::Configuration(
                "Poisson iteration cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SimulationParameters::default(),
            policy: DemandPolicyKind::Simple,
            days: 14,
            seed: 7,
            safety_stock_method: SafetyStockMethod::Statistical,
            poisson_iteration_cap: DEFAULT_POISSON_ITERATION_CAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_inputs() {
        assert!(matches!(
            SimulationParameters::new(0, 5, 50),
            Err(SimulationError::Configuration(_))
        ));
        assert!(matches!(
            SimulationParameters::new(3, 0, 50),
            Err(SimulationError::Configuration(_))
        ));
        assert!(matches!(
            SimulationParameters::with_service_level_factor(3, 5, 50, -1.0),
            Err(SimulationError::Configuration(_))
        ));
        assert!(matches!(
            SimulationParameters::with_service_level_factor(3, 5, 50, f64::NAN),
            Err(SimulationError::Configuration(_))
        ));
    }

    #[test]
    fn test_negative_initial_stock_is_allowed() {
        let params = SimulationParameters::new(3, 5, -4).unwrap();
        assert_eq!(params.initial_stock, -4);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.days, 14);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_zero_days_is_rejected() {
        let config = SimulationConfig {
            days: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::Configuration(_))
        ));
    }
}
