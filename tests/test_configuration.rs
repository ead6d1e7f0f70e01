use bitga::{
    error::{GeneticError, ResultExt},
    evolution::{EvolutionLauncher, EvolutionOptions, Fallible, WithArgs},
    rng::RandomNumberGenerator,
    Bounds,
};

fn small_options() -> EvolutionOptions {
    EvolutionOptions::builder()
        .population_size(10)
        .genes_per_variable(8)
        .max_generations(5)
        .build()
}

#[test]
fn test_bounds_with_min_not_below_max() {
    let result = Bounds::new(vec![(-1.0, 1.0), (3.0, 3.0)]);
    assert!(matches!(result, Err(GeneticError::Configuration(_))));
}

#[test]
fn test_seed_length_mismatch() {
    let result = EvolutionLauncher::builder()
        .with_objective(|x: &[f64]| x[0])
        .with_bounds(Bounds::new(vec![(-1.0, 1.0), (-1.0, 1.0)]).unwrap())
        .with_seed_parameters(vec![0.0, 0.0, 0.0])
        .build();

    match result {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Seed parameters")),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_rates_outside_unit_interval() {
    for options in [
        EvolutionOptions::builder().crossover_rate(-0.2).build(),
        EvolutionOptions::builder().mutation_rate(1.01).build(),
    ] {
        let result = EvolutionLauncher::builder()
            .with_objective(|x: &[f64]| x[0])
            .with_bounds(Bounds::new(vec![(0.0, 1.0)]).unwrap())
            .with_options(options)
            .build();
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}

#[test]
fn test_extra_arguments_reach_the_objective() {
    let objective = WithArgs::new(
        |x: &[f64], target: &[f64]| (x[0] - target[0]).powi(2),
        vec![0.75],
    );
    let launcher = EvolutionLauncher::builder()
        .with_objective(objective)
        .with_bounds(Bounds::new(vec![(0.0, 1.0)]).unwrap())
        .with_options(
            EvolutionOptions::builder()
                .population_size(30)
                .max_generations(40)
                .build(),
        )
        .build()
        .unwrap();

    let result = launcher
        .evolve(&mut RandomNumberGenerator::from_seed(12))
        .unwrap();
    assert!((result.best_parameters[0] - 0.75).abs() < 0.1);
}

#[test]
fn test_failing_objective_aborts_run() {
    let objective = Fallible::new(|x: &[f64]| {
        if x[0] > 0.0 {
            "not a number".parse::<f64>().context("Simulation failed")
        } else {
            Ok(-x[0])
        }
    });
    let result = EvolutionLauncher::builder()
        .with_objective(objective)
        .with_bounds(Bounds::new(vec![(-1.0, 1.0)]).unwrap())
        .with_options(small_options())
        .build()
        .unwrap()
        .evolve(&mut RandomNumberGenerator::from_seed(1));

    match result {
        Err(GeneticError::Other(msg)) => assert!(msg.starts_with("Simulation failed")),
        _ => panic!("Expected the objective's error"),
    }
}

#[test]
fn test_non_finite_cost_aborts_run() {
    let result = EvolutionLauncher::builder()
        .with_objective(|_: &[f64]| f64::NAN)
        .with_bounds(Bounds::new(vec![(-1.0, 1.0)]).unwrap())
        .with_options(small_options())
        .build()
        .unwrap()
        .evolve(&mut RandomNumberGenerator::from_seed(1));

    assert!(matches!(result, Err(GeneticError::FitnessCalculation(_))));
}
