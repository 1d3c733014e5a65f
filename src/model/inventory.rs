// src/model/inventory.rs

use crate::error::SimulationError;

/// Stock level of the single simulated product plus its day-by-day trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryState {
    // Negative stock is a backorder. It is never clamped.
    stock: i64,
    // One entry per simulated day, in day order.
    history: Vec<i64>,
}

impl InventoryState {
    pub fn new(initial_stock: i64) -> Self {
        Self {
            stock: initial_stock,
            history: Vec::new(),
        }
    }

    /// Removes one day's demand from stock and records the new level.
    ///
    /// Returns the stock after the withdrawal. Nothing changes when the new
    /// level would not fit in an `i64`.
    pub fn consume(&mut self, demand: u32) -> Result<i64, SimulationError> {
        let stock = self
            .stock
            .checked_sub(i64::from(demand))
            .ok_or(SimulationError::StockOverflow {
                stock: self.stock,
                demand,
            })?;
        self.stock = stock;
        self.history.push(stock);
        Ok(stock)
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// True once stock has dropped below zero.
    pub fn is_backordered(&self) -> bool {
        self.stock < 0
    }
}
