// src/io/reporting.rs

use crate::error::SimulationError;
use crate::simulation::engine::{DayRecord, SimulationSummary};
use std::path::Path;
use tracing::info;

/// Writes the day table to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `data` - One record per simulated day.
pub fn write_simulation_log<P: AsRef<Path>>(
    file_path: P,
    data: &[DayRecord],
) -> Result<(), SimulationError> {
    let path = file_path.as_ref();

    let mut wtr = csv::Writer::from_path(path)?;
    for record in data {
        wtr.serialize(record)?;
    }
    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(rows = data.len(), path = %path.display(), "exported day table");
    Ok(())
}

/// Plain-text `Day | Demand | Inventory` table.
pub fn format_day_table(data: &[DayRecord]) -> String {
    let mut out = String::from("Day | Demand | Inventory Level\n");
    out.push_str("-------------------------------\n");
    for record in data {
        out.push_str(&format!(
            "{:>3} | {:>6} | {:>15}\n",
            record.day, record.demand, record.inventory
        ));
    }
    out
}

/// Final stock, average demand and safety stock for one run.
pub fn format_summary(product: &str, summary: &SimulationSummary) -> String {
    let mut out = format!(
        "{} - {} Model\n\
         Final Inventory Level: {}\n\
         Average Daily Demand: {:.2}\n\
         Safety Stock ({:?}): {}\n",
        product,
        summary.policy,
        summary.report.final_stock,
        summary.average_demand(),
        summary.safety_stock_method,
        summary.safety_stock,
    );
    if let Some(day) = summary.report.first_stockout_day() {
        out.push_str(&format!("Stock ran out on day {day}\n"));
    }
    out
}
