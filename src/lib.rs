//! Discrete-time inventory depletion under stochastic demand.
//!
//! A [`Simulation`] owns a deterministic [`SequenceSource`], one demand policy
//! and the product's [`InventoryState`]. Each tick draws one day of demand,
//! removes it from stock and records the new level.

pub mod error;
pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::SimulationError;
pub use model::inventory::InventoryState;
pub use model::sequence::SequenceSource;
pub use simulation::config::{SimulationConfig, SimulationParameters};
pub use simulation::engine::{
    run_simulation, DayOutcome, DayRecord, Simulation, SimulationReport, SimulationState,
    SimulationSummary,
};
pub use strategy::implementations::DemandPolicyKind;
pub use strategy::optimization::{estimate_safety_stock, SafetyStockMethod};
pub use strategy::traits::DemandPolicy;
