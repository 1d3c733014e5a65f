// src/strategy/optimization.rs

//! Safety stock estimation.
//!
//! Both estimators are pure functions of the run parameters. Which one applies
//! is chosen explicitly through [`SafetyStockMethod`], never from the active
//! demand model.

use crate::simulation::config::SimulationParameters;
use serde::{Deserialize, Serialize};

/// How the recommended buffer stock is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStockMethod {
    /// `z * sqrt(mean) * sqrt(lead time)`, treating demand as Poisson
    /// (variance equal to the mean).
    Statistical,
    /// `floor(mean * lead time / 2)`.
    Approximate,
}

/// Recommended safety stock for `params` under `method`.
pub fn estimate_safety_stock(params: &SimulationParameters, method: SafetyStockMethod) -> u32 {
    match method {
        SafetyStockMethod::Statistical => statistical_safety_stock(
            params.mean_demand,
            params.lead_time,
            params.service_level_factor,
        ),
        SafetyStockMethod::Approximate => approximate_safety_stock(params.mean_demand, params.lead_time),
    }
}

/// Formula: SafetyStock = Z * StdDev * sqrt(LeadTime), with StdDev = sqrt(Mean).
///
/// Halves round to the even neighbour.
pub fn statistical_safety_stock(mean_demand: u32, lead_time: u32, z_score: f64) -> u32 {
    let std_dev = f64::from(mean_demand).sqrt();
    let safety_stock = z_score * std_dev * f64::from(lead_time).sqrt();

    if safety_stock < 0.0 {
        0
    } else {
        safety_stock.round_ties_even() as u32
    }
}

/// Half the expected demand over the lead time, rounded down.
pub fn approximate_safety_stock(mean_demand: u32, lead_time: u32) -> u32 {
    let lead_time_demand = u64::from(mean_demand) * u64::from(lead_time);
    u32::try_from(lead_time_demand / 2).unwrap_or(u32::MAX)
}

/// Converts a target service level (probability of not stocking out) into the
/// z-score the statistical estimator expects.
pub fn service_level_factor(service_level: f64) -> f64 {
    inverse_normal_cdf(service_level)
}

// Rational approximation coefficients, Abramowitz & Stegun 26.2.23.
const NUMERATOR: [f64; 3] = [2.515517, 0.802853, 0.010328];
const DENOMINATOR: [f64; 3] = [1.432788, 0.189269, 0.001308];

/// z-scores are clamped to this magnitude at the ends of the probability range.
const MAX_Z: f64 = 5.0;

/// Standard normal quantile, absolute error below 4.5e-4.
fn inverse_normal_cdf(p: f64) -> f64 {
    if p >= 1.0 {
        return MAX_Z;
    }
    if p <= 0.0 {
        return -MAX_Z;
    }
    if p == 0.5 {
        return 0.0;
    }

    // The approximation covers the lower tail; the upper tail is its mirror.
    let tail = p.min(1.0 - p);
    let t = (-2.0 * tail.ln()).sqrt();

    let [c0, c1, c2] = NUMERATOR;
    let [d1, d2, d3] = DENOMINATOR;
    let z = t - (c0 + t * (c1 + t * c2)) / (1.0 + t * (d1 + t * (d2 + t * d3)));

    if p < 0.5 {
        -z
    } else {
        z
    }
}
