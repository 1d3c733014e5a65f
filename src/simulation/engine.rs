// src/simulation/engine.rs

use crate::error::SimulationError;
use crate::model::inventory::InventoryState;
use crate::model::sequence::SequenceSource;
use crate::simulation::config::{SimulationConfig, SimulationParameters};
use crate::strategy::implementations::{DemandPolicyKind, DEFAULT_POISSON_ITERATION_CAP};
use crate::strategy::optimization::{estimate_safety_stock, SafetyStockMethod};
use crate::strategy::traits::DemandPolicy;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Whether more days remain to be simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Finished,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOutcome {
    /// 1-based day number.
    pub day: u32,
    pub demand: u32,
    pub stock: i64,
}

/// One row of the day table. Serialize so it can go straight to CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub demand: u32,
    pub inventory: i64,
}

/// Trajectory of a run, handed to whatever renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub final_stock: i64,
    pub demand_history: Vec<u32>,
    pub stock_history: Vec<i64>,
}

impl SimulationReport {
    /// Mean demand over the simulated days, 0.0 for an empty run.
    pub fn average_demand(&self) -> f64 {
        if self.demand_history.is_empty() {
            return 0.0;
        }
        let total: u64 = self.demand_history.iter().map(|&d| u64::from(d)).sum();
        total as f64 / self.demand_history.len() as f64
    }

    /// Pairs each day's demand with the stock level left at its end.
    pub fn records(&self) -> Vec<DayRecord> {
        self.demand_history
            .iter()
            .zip(&self.stock_history)
            .enumerate()
            .map(|(i, (&demand, &inventory))| DayRecord {
                day: i as u32 + 1,
                demand,
                inventory,
            })
            .collect()
    }

    /// First day, 1-based, that ended with negative stock.
    pub fn first_stockout_day(&self) -> Option<u32> {
        self.stock_history
            .iter()
            .position(|&stock| stock < 0)
            .map(|i| i as u32 + 1)
    }
}

/// A single-product inventory run.
///
/// Owns its number source and inventory, so runs never share mutable state.
pub struct Simulation {
    params: SimulationParameters,
    policy_kind: DemandPolicyKind,
    policy: Box<dyn DemandPolicy>,
    sequence: SequenceSource,
    inventory: InventoryState,
    demand_history: Vec<u32>,
    days: u32,
    remaining_days: u32,
}

impl Simulation {
    /// Builds a run of `days` days. Fails with a configuration error when
    /// `days` is zero or the parameters are invalid.
    pub fn new(
        params: SimulationParameters,
        policy_kind: DemandPolicyKind,
        days: u32,
        seed: i64,
    ) -> Result<Self, SimulationError> {
        Self::with_policy(
            params,
            policy_kind,
            policy_kind.build(DEFAULT_POISSON_ITERATION_CAP),
            days,
            seed,
        )
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Self::with_policy(
            config.params.clone(),
            config.policy,
            config.policy.build(config.poisson_iteration_cap),
            config.days,
            config.seed,
        )
    }

    fn with_policy(
        params: SimulationParameters,
        policy_kind: DemandPolicyKind,
        policy: Box<dyn DemandPolicy>,
        days: u32,
        seed: i64,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        if days == 0 {
            return Err(SimulationError::Configuration(
                "number of simulated days must be positive".to_string(),
            ));
        }

        let inventory = InventoryState::new(params.initial_stock);
        Ok(Self {
            params,
            policy_kind,
            policy,
            sequence: SequenceSource::new(seed),
            inventory,
            demand_history: Vec::new(),
            days,
            remaining_days: days,
        })
    }

    pub fn state(&self) -> SimulationState {
        if self.remaining_days == 0 {
            SimulationState::Finished
        } else {
            SimulationState::Running
        }
    }

    /// Simulates one day.
    ///
    /// Either the whole day is applied or nothing is: on error the stock,
    /// histories and the number source are exactly as before the call.
    pub fn tick(&mut self) -> Result<DayOutcome, SimulationError> {
        if self.state() == SimulationState::Finished {
            return Err(SimulationError::InvalidState { days: self.days });
        }

        // Policies advance a copy; it replaces the live source only on success.
        let mut sequence = self.sequence;
        let demand = self.policy.next_demand(&self.params, &mut sequence)?;

        let was_backordered = self.inventory.is_backordered();
        let stock = self.inventory.consume(demand)?;
        self.sequence = sequence;
        self.demand_history.push(demand);
        self.remaining_days -= 1;

        let day = self.days - self.remaining_days;
        debug!(day, demand, stock, "simulated day");

        if !was_backordered && self.inventory.is_backordered() {
            warn!(day, stock, "stock ran out");
        }
        if day % 5 == 0 {
            info!(day, stock, model = %self.policy_kind, "progress");
        }

        Ok(DayOutcome { day, demand, stock })
    }

    /// Ticks until the run is finished and returns the full trajectory.
    ///
    /// Calling this on a finished run returns the report without ticking.
    pub fn run_all(&mut self) -> Result<SimulationReport, SimulationError> {
        while self.state() == SimulationState::Running {
            self.tick()?;
        }
        let report = self.report();
        info!(
            days = self.days,
            final_stock = report.final_stock,
            model = %self.policy_kind,
            "simulation finished"
        );
        Ok(report)
    }

    /// Snapshot of the trajectory so far.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            final_stock: self.inventory.stock(),
            demand_history: self.demand_history.clone(),
            stock_history: self.inventory.history().to_vec(),
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn policy_kind(&self) -> DemandPolicyKind {
        self.policy_kind
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn remaining_days(&self) -> u32 {
        self.remaining_days
    }

    pub fn stock(&self) -> i64 {
        self.inventory.stock()
    }
}

/// Completed run together with the figures shown next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub policy: DemandPolicyKind,
    pub safety_stock_method: SafetyStockMethod,
    pub safety_stock: u32,
    pub report: SimulationReport,
}

impl SimulationSummary {
    pub fn average_demand(&self) -> f64 {
        self.report.average_demand()
    }
}

/// Runs `config` to completion and attaches the configured safety stock.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationSummary, SimulationError> {
    let mut simulation = Simulation::from_config(config)?;
    let report = simulation.run_all()?;

    Ok(SimulationSummary {
        policy: config.policy,
        safety_stock_method: config.safety_stock_method,
        safety_stock: estimate_safety_stock(&config.params, config.safety_stock_method),
        report,
    })
}
