// src/strategy/implementations.rs

use crate::error::SimulationError;
use crate::model::sequence::{SequenceSource, MODULUS};
use crate::simulation::config::SimulationParameters;
use crate::strategy::traits::DemandPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Draws allowed per day before the Poisson approximation gives up.
pub const DEFAULT_POISSON_ITERATION_CAP: u32 = 10_000;

/// Per-unit decay used in place of `e^-1`.
pub const POISSON_DECAY: f64 = 0.37;

/// Which demand model a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandPolicyKind {
    Simple,
    MonteCarlo,
    Poisson,
}

impl DemandPolicyKind {
    pub const ALL: [DemandPolicyKind; 3] = [
        DemandPolicyKind::Simple,
        DemandPolicyKind::MonteCarlo,
        DemandPolicyKind::Poisson,
    ];

    /// Instantiates the policy. `poisson_iteration_cap` is ignored by the
    /// other variants.
    pub fn build(self, poisson_iteration_cap: u32) -> Box<dyn DemandPolicy> {
        match self {
            DemandPolicyKind::Simple => Box::new(SimplePolicy),
            DemandPolicyKind::MonteCarlo => Box::new(MonteCarloPolicy::new()),
            DemandPolicyKind::Poisson => {
                Box::new(PoissonPolicy::with_iteration_cap(poisson_iteration_cap))
            }
        }
    }
}

impl fmt::Display for DemandPolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemandPolicyKind::Simple => "Simple",
            DemandPolicyKind::MonteCarlo => "Monte Carlo",
            DemandPolicyKind::Poisson => "Poisson",
        };
        f.write_str(name)
    }
}

// =========================================================================
// 1. Simple Rule-Based Policy
// =========================================================================

/// Nudges the mean by one unit either way.
///
/// Draws below 20 give `mean - 1`, draws from 20 to 69 give `mean`, and the
/// rest give `mean + 1`. The result never drops below 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePolicy;

impl SimplePolicy {
    pub fn demand_for_draw(mean_demand: u32, draw: u32) -> u32 {
        let demand = if draw < 20 {
            mean_demand.saturating_sub(1)
        } else if draw < 70 {
            mean_demand
        } else {
            mean_demand.saturating_add(1)
        };
        demand.max(1)
    }
}

impl DemandPolicy for SimplePolicy {
    fn next_demand(
        &self,
        params: &SimulationParameters,
        sequence: &mut SequenceSource,
    ) -> Result<u32, SimulationError> {
        Ok(Self::demand_for_draw(params.mean_demand, sequence.next_value()))
    }
}

// =========================================================================
// 2. Monte Carlo Table Policy
// =========================================================================

/// One row of the cumulative probability table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub start: u32,
    pub end: u32,
    pub demand: u32,
}

/// Demand 1 to 5 with probabilities 10/20/40/20/10 percent.
pub const STANDARD_TABLE: [TableRow; 5] = [
    TableRow { start: 0, end: 9, demand: 1 },
    TableRow { start: 10, end: 29, demand: 2 },
    TableRow { start: 30, end: 69, demand: 3 },
    TableRow { start: 70, end: 89, demand: 4 },
    TableRow { start: 90, end: 99, demand: 5 },
];

/// Maps a draw onto a fixed table, independent of the mean demand.
#[derive(Debug, Clone)]
pub struct MonteCarloPolicy {
    table: &'static [TableRow],
}

impl MonteCarloPolicy {
    pub fn new() -> Self {
        Self {
            table: &STANDARD_TABLE,
        }
    }

    /// First row, in ascending order, whose range contains `draw`.
    pub fn lookup(&self, draw: u32) -> Result<u32, SimulationError> {
        self.table
            .iter()
            .find(|row| row.start <= draw && draw <= row.end)
            .map(|row| row.demand)
            .ok_or(SimulationError::Domain { draw })
    }
}

impl Default for MonteCarloPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DemandPolicy for MonteCarloPolicy {
    fn next_demand(
        &self,
        _params: &SimulationParameters,
        sequence: &mut SequenceSource,
    ) -> Result<u32, SimulationError> {
        self.lookup(sequence.next_value())
    }
}

// =========================================================================
// 3. Poisson Approximation Policy
// =========================================================================

/// Knuth-style product-of-uniforms sampler driven by the bounded sequence.
///
/// The threshold is `0.37^mean` rather than `e^-mean`, and each uniform is
/// `draw / 100`, so the output only approximates a Poisson variate. The
/// arithmetic is kept as is so runs stay reproducible.
#[derive(Debug, Clone)]
pub struct PoissonPolicy {
    max_iterations: u32,
}

impl PoissonPolicy {
    pub fn new() -> Self {
        Self::with_iteration_cap(DEFAULT_POISSON_ITERATION_CAP)
    }

    pub fn with_iteration_cap(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// `0.37` multiplied into itself `mean_demand` times.
    pub fn threshold(mean_demand: u32) -> f64 {
        (0..mean_demand).fold(1.0, |acc, _| acc * POISSON_DECAY)
    }
}

impl Default for PoissonPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DemandPolicy for PoissonPolicy {
    fn next_demand(
        &self,
        params: &SimulationParameters,
        sequence: &mut SequenceSource,
    ) -> Result<u32, SimulationError> {
        let limit = Self::threshold(params.mean_demand);
        let mut product = 1.0_f64;
        let mut k: u32 = 0;

        loop {
            if k >= self.max_iterations {
                return Err(SimulationError::Convergence {
                    iterations: self.max_iterations,
                });
            }
            k += 1;
            product *= f64::from(sequence.next_value()) / f64::from(MODULUS);
            if product <= limit {
                break;
            }
        }

        Ok(k.saturating_sub(1).max(1))
    }
}
