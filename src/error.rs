// src/error.rs

use thiserror::Error;

/// Everything that can go wrong while building or running a simulation.
///
/// None of these are retried internally. The caller decides whether to abort
/// or re-seed and try again.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Invalid parameters or day count, raised at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A draw fell outside every row of the Monte Carlo table.
    #[error("Draw {draw} matches no row of the demand table")]
    Domain { draw: u32 },

    /// The Poisson approximation ran past its iteration cap.
    #[error("Poisson approximation did not converge within {iterations} iterations")]
    Convergence { iterations: u32 },

    /// A tick was requested after the last simulated day.
    #[error("Simulation already finished after {days} days")]
    InvalidState { days: u32 },

    /// Withdrawing the day's demand would take stock below `i64::MIN`.
    #[error("Stock {stock} cannot absorb a demand of {demand}")]
    StockOverflow { stock: i64, demand: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
