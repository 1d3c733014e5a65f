use inventory_sim::simulation::batch::{compare_models, run_batch};
use inventory_sim::{
    estimate_safety_stock, DemandPolicyKind, SafetyStockMethod, SequenceSource, Simulation,
    SimulationConfig, SimulationError, SimulationParameters, SimulationReport, SimulationState,
};

fn laptop() -> SimulationParameters {
    SimulationParameters::new(3, 5, 50).unwrap()
}

#[test]
fn golden_simple_run_seed_seven() {
    let mut source = SequenceSource::new(7);
    let states: Vec<u32> = (0..3).map(|_| source.next_value()).collect();
    assert_eq!(states, vec![62, 97, 92]);

    let mut sim = Simulation::new(laptop(), DemandPolicyKind::Simple, 3, 7).unwrap();
    let report = sim.run_all().unwrap();

    assert_eq!(
        report,
        SimulationReport {
            final_stock: 39,
            demand_history: vec![3, 4, 4],
            stock_history: vec![47, 43, 39],
        }
    );
    assert_eq!(sim.state(), SimulationState::Finished);
}

#[test]
fn golden_monte_carlo_run_seed_seven() {
    // Draws cycle 62, 97, 92, 7 -> demands 3, 5, 5, 1.
    let mut sim = Simulation::new(laptop(), DemandPolicyKind::MonteCarlo, 5, 7).unwrap();
    let report = sim.run_all().unwrap();
    assert_eq!(report.demand_history, vec![3, 5, 5, 1, 3]);
    assert_eq!(report.stock_history, vec![47, 42, 37, 36, 33]);
}

#[test]
fn golden_poisson_run_seed_seven() {
    // Every day consumes the full four-draw cycle and yields 3.
    let mut sim = Simulation::new(laptop(), DemandPolicyKind::Poisson, 4, 7).unwrap();
    let report = sim.run_all().unwrap();
    assert_eq!(report.demand_history, vec![3, 3, 3, 3]);
    assert_eq!(report.final_stock, 38);
}

#[test]
fn tick_by_tick_matches_run_all() {
    for kind in DemandPolicyKind::ALL {
        let mut stepped = Simulation::new(laptop(), kind, 10, 42).unwrap();
        let mut demands = Vec::new();
        let mut stocks = Vec::new();
        for day in 1..=10 {
            let outcome = stepped.tick().unwrap();
            assert_eq!(outcome.day, day);
            demands.push(outcome.demand);
            stocks.push(outcome.stock);
        }

        let mut whole = Simulation::new(laptop(), kind, 10, 42).unwrap();
        let report = whole.run_all().unwrap();
        assert_eq!(report.demand_history, demands);
        assert_eq!(report.stock_history, stocks);
    }
}

#[test]
fn history_length_equals_days() {
    for days in [1, 7, 30] {
        let mut sim = Simulation::new(laptop(), DemandPolicyKind::MonteCarlo, days, 11).unwrap();
        assert_eq!(sim.run_all().unwrap().stock_history.len(), days as usize);
    }
}

#[test]
fn stock_goes_negative_without_clamping() {
    let params = SimulationParameters::new(10, 2, 5).unwrap();
    let mut sim = Simulation::new(params, DemandPolicyKind::Simple, 3, 7).unwrap();
    let report = sim.run_all().unwrap();
    assert!(report.final_stock < 0);
    assert_eq!(report.first_stockout_day(), Some(1));
}

#[test]
fn configuration_errors() {
    assert!(matches!(
        Simulation::new(laptop(), DemandPolicyKind::Simple, 0, 7),
        Err(SimulationError::Configuration(_))
    ));
    assert!(matches!(
        SimulationParameters::new(0, 1, 10),
        Err(SimulationError::Configuration(_))
    ));

    let invalid = SimulationParameters {
        lead_time: 0,
        ..laptop()
    };
    assert!(matches!(
        Simulation::new(invalid, DemandPolicyKind::Poisson, 5, 7),
        Err(SimulationError::Configuration(_))
    ));
}

#[test]
fn finished_simulation_rejects_ticks() {
    let mut sim = Simulation::new(laptop(), DemandPolicyKind::Poisson, 1, 3).unwrap();
    sim.tick().unwrap();
    assert!(matches!(
        sim.tick(),
        Err(SimulationError::InvalidState { days: 1 })
    ));
}

#[test]
fn safety_stock_methods() {
    let params = SimulationParameters::with_service_level_factor(9, 4, 0, 1.645).unwrap();
    assert_eq!(estimate_safety_stock(&params, SafetyStockMethod::Statistical), 10);
    assert_eq!(estimate_safety_stock(&params, SafetyStockMethod::Approximate), 18);
}

#[test]
fn model_comparison_shares_the_seed() {
    let base = SimulationConfig {
        days: 3,
        ..SimulationConfig::default()
    };
    let summaries: Vec<_> = run_batch(&compare_models(&base))
        .into_iter()
        .map(Result::unwrap)
        .collect();

    let policies: Vec<_> = summaries.iter().map(|s| s.policy).collect();
    assert_eq!(policies, DemandPolicyKind::ALL.to_vec());
    assert_eq!(summaries[0].report.demand_history, vec![3, 4, 4]);
    assert_eq!(summaries[1].report.demand_history, vec![3, 5, 5]);
    assert_eq!(summaries[2].report.demand_history, vec![3, 3, 3]);
}
