// src/io/catalog.rs

use crate::error::SimulationError;
use crate::simulation::config::SimulationParameters;

/// A product the simulator ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub initial_stock: i64,
    pub mean_demand: u32,
    pub lead_time: u32,
}

/// Built-in products, in menu order.
pub const CATALOG: [Product; 3] = [
    Product {
        name: "Gaming Laptop",
        initial_stock: 50,
        mean_demand: 3,
        lead_time: 5,
    },
    Product {
        name: "Smartphone",
        initial_stock: 100,
        mean_demand: 6,
        lead_time: 4,
    },
    Product {
        name: "Headphones",
        initial_stock: 200,
        mean_demand: 10,
        lead_time: 2,
    },
];

impl Product {
    /// Simulation parameters for this product.
    pub fn params(&self, service_level_factor: f64) -> Result<SimulationParameters, SimulationError> {
        SimulationParameters::with_service_level_factor(
            self.mean_demand,
            self.lead_time,
            self.initial_stock,
            service_level_factor,
        )
    }
}

/// Finds a product by 1-based menu number or by case-insensitive name.
pub fn find_product(query: &str) -> Result<Product, SimulationError> {
    let query = query.trim();

    if let Ok(number) = query.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| CATALOG.get(index))
            .copied()
            .ok_or_else(|| {
                SimulationError::Configuration(format!(
                    "product number must be between 1 and {}, got {number}",
                    CATALOG.len()
                ))
            });
    }

    CATALOG
        .iter()
        .find(|product| product.name.eq_ignore_ascii_case(query))
        .copied()
        .ok_or_else(|| SimulationError::Configuration(format!("unknown product '{query}'")))
}
