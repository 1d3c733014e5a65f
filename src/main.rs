mod cli;

use crate::cli::Cli;
use clap::Parser;
use inventory_sim::io::reporting::{format_day_table, format_summary, write_simulation_log};
use inventory_sim::simulation::batch::{compare_models, run_batch};
use inventory_sim::run_simulation;
use std::error::Error;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let cli = Cli::parse();

    // 1. SETUP CONFIGURATION
    let (product, config) = cli.to_config()?;
    println!("=== Inventory Simulation: {} ===", product.name);
    println!(
        "Stock: {}, Mean demand: {}/day, Lead time: {} days, Seed: {}",
        product.initial_stock, product.mean_demand, product.lead_time, config.seed
    );

    // 2. COMPARISON MODE
    if cli.compare {
        let configs = compare_models(&config);
        for result in run_batch(&configs) {
            let summary = result?;
            println!();
            print!("{}", format_summary(product.name, &summary));
        }
        return Ok(());
    }

    // 3. RUN SIMULATION
    let summary = run_simulation(&config)?;
    let records = summary.report.records();

    // 4. PRINT RESULTS
    println!();
    print!("{}", format_day_table(&records));
    println!();
    print!("{}", format_summary(product.name, &summary));

    // 5. EXPORT RESULTS
    if let Some(path) = &cli.output {
        write_simulation_log(path, &records)?;
        println!("Day table written to {}", path.display());
    }

    Ok(())
}
