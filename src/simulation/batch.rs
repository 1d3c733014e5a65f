// src/simulation/batch.rs

use crate::error::SimulationError;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::{run_simulation, SimulationSummary};
use crate::strategy::implementations::DemandPolicyKind;
use std::thread;
use tracing::debug;

/// Runs every configuration on its own thread.
///
/// Each run builds its own number source and inventory, so nothing mutable is
/// shared. Results come back in the order of `configs`; one failing run does
/// not affect the others.
pub fn run_batch(configs: &[SimulationConfig]) -> Vec<Result<SimulationSummary, SimulationError>> {
    thread::scope(|scope| {
        let handles: Vec<_> = configs
            .iter()
            .enumerate()
            .map(|(index, config)| {
                scope.spawn(move || {
                    debug!(index, model = %config.policy, "starting batch run");
                    run_simulation(config)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// One configuration per demand model, otherwise identical to `base`.
pub fn compare_models(base: &SimulationConfig) -> Vec<SimulationConfig> {
    DemandPolicyKind::ALL
        .iter()
        .map(|&policy| SimulationConfig {
            policy,
            ..base.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::Simulation;

    #[test]
    fn test_batch_matches_sequential_runs() {
        let configs = compare_models(&SimulationConfig::default());
        let results = run_batch(&configs);
        assert_eq!(results.len(), 3);

        for (config, result) in configs.iter().zip(results) {
            let summary = result.unwrap();
            assert_eq!(summary.policy, config.policy);

            let mut sim = Simulation::from_config(config).unwrap();
            assert_eq!(summary.report, sim.run_all().unwrap());
        }
    }

    #[test]
    fn test_failure_is_isolated() {
        let good = SimulationConfig::default();
        let bad = SimulationConfig {
            days: 0,
            ..SimulationConfig::default()
        };
        let results = run_batch(&[good, bad]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SimulationError::Configuration(_))));
    }
}
