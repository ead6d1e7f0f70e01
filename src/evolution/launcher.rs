use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    builder::EvolutionLauncherBuilder,
    objective::{finite_cost, Objective},
    options::{EvolutionOptions, LogLevel},
    tracker::{BestRecord, BestTracker, StopReason, StoppingRule},
};
use crate::{
    breeding::{BitFlipMutation, BreedStrategy, SinglePointCrossover},
    chromosome::{initialize_population, Chromosome},
    encoding::BinaryCodec,
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    selection::{RankBasedSelection, SelectionStrategy},
};

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionResult {
    /// Parameters of the best individual seen during the run.
    pub best_parameters: Vec<f64>,
    /// Cost of `best_parameters`.
    pub best_cost: f64,
    /// Encoding of the best individual.
    pub best_chromosome: Chromosome,
    /// Generation counter when the run stopped; the initial population is generation 1.
    pub generation: usize,
    pub stop_reason: StopReason,
    /// Best-so-far cost after each evaluated generation.
    pub history: Vec<f64>,
    /// Decoded parameters of the last population, in population order. A slot
    /// overwritten by the best-so-far record holds the record's exact parameters.
    pub final_population: Vec<Vec<f64>>,
}

/// One evaluated population.
struct Evaluation {
    costs: Vec<f64>,
    parameters: Vec<Vec<f64>>,
}

/// Runs the binary genetic algorithm on an objective function.
///
/// Build one with [`EvolutionLauncher::builder`].
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<O>
where
    O: Objective,
{
    objective: O,
    codec: BinaryCodec,
    options: EvolutionOptions,
    selection: RankBasedSelection,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
    seed: Option<BestRecord>,
}

impl<O> EvolutionLauncher<O>
where
    O: Objective,
{
    pub fn builder() -> EvolutionLauncherBuilder<O> {
        EvolutionLauncherBuilder::new()
    }

    pub(crate) fn new(
        objective: O,
        codec: BinaryCodec,
        options: EvolutionOptions,
        seed: Option<BestRecord>,
    ) -> Result<Self> {
        Ok(Self {
            selection: RankBasedSelection::new(options.get_selection_pressure())?,
            crossover: SinglePointCrossover::new(options.get_crossover_rate())?,
            mutation: BitFlipMutation::new(options.get_mutation_rate())?,
            objective,
            codec,
            options,
            seed,
        })
    }

    /// The validated options; the population size is always even.
    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn codec(&self) -> &BinaryCodec {
        &self.codec
    }

    /// The seed individual, if seed parameters were supplied.
    pub fn seed(&self) -> Option<&BestRecord> {
        self.seed.as_ref()
    }

    /// Runs with a generator seeded from the options' `rng_seed`, or from entropy.
    pub fn run(&self) -> Result<EvolutionResult> {
        let mut rng = match self.options.get_rng_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };
        self.evolve(&mut rng)
    }

    /// Evolves a population until the generation budget is spent or the best
    /// cost stagnates.
    ///
    /// # Errors
    ///
    /// Returns an error, and no partial result, if the objective fails or yields
    /// a non-finite cost for any individual.
    #[instrument(level = "debug", skip(self, rng), fields(
        num_variables = self.codec.num_variables(),
        population_size = self.options.get_population_size(),
        max_generations = self.options.get_max_generations(),
        seeded = self.seed.is_some(),
    ))]
    pub fn evolve(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        let population_size = self.options.get_population_size();
        let elitism = self.seed.is_some() || self.options.get_elitism();
        let stopping = StoppingRule::new(
            self.options.get_max_generations(),
            self.options.get_stagnation_patience(),
        );

        let mut tracker = match &self.seed {
            Some(seed) => BestTracker::seeded(seed.clone()),
            None => BestTracker::new(),
        };
        let mut history = Vec::new();

        let mut generation = 1;
        let mut population = initialize_population(
            population_size,
            self.codec.num_variables(),
            self.codec.num_genes(),
            rng,
        )?;
        let mut evaluation = self.evaluate(&mut population, &mut tracker, elitism)?;
        history.push(self.report(generation, &evaluation, &tracker)?);

        let stop_reason = loop {
            if let Some(reason) = stopping.check(generation, &tracker) {
                break reason;
            }

            let selected =
                self.selection
                    .select(&population, &evaluation.costs, population_size, rng)?;
            let offspring = self.crossover.breed(selected, rng)?;
            population = self.mutation.breed(offspring, rng)?;

            generation += 1;
            evaluation = self.evaluate(&mut population, &mut tracker, elitism)?;
            history.push(self.report(generation, &evaluation, &tracker)?);
        };

        let best = tracker.best().ok_or_else_genetic(|| {
            GeneticError::Evolution("Evolution completed without a best individual".to_string())
        })?;

        tracing::debug!(
            generation,
            ?stop_reason,
            best_cost = best.cost,
            "Evolution finished"
        );

        Ok(EvolutionResult {
            best_parameters: best.parameters.clone(),
            best_cost: best.cost,
            best_chromosome: best.chromosome.clone(),
            generation,
            stop_reason,
            history,
            final_population: evaluation.parameters,
        })
    }

    /// Scores every individual, re-injects the best-so-far record over the worst
    /// individual when elitism is on, then offers the generation's best to the tracker.
    fn evaluate(
        &self,
        population: &mut [Chromosome],
        tracker: &mut BestTracker,
        elitism: bool,
    ) -> Result<Evaluation> {
        let mut costs = Vec::with_capacity(population.len());
        let mut parameters = Vec::with_capacity(population.len());

        for chromosome in population.iter() {
            let x = self.codec.decode(chromosome)?;
            costs.push(finite_cost(&self.objective, &x)?);
            parameters.push(x);
        }

        if elitism {
            if let Some(index) = tracker.inject(population, &mut costs) {
                parameters[index] = tracker
                    .best()
                    .map(|best| best.parameters.clone())
                    .unwrap_or_default();
            }
        }

        let (best_index, &best_cost) = costs
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        tracker.observe(&population[best_index], &parameters[best_index], best_cost);

        Ok(Evaluation { costs, parameters })
    }

    /// Logs one generation and returns the best-so-far cost after it.
    fn report(
        &self,
        generation: usize,
        evaluation: &Evaluation,
        tracker: &BestTracker,
    ) -> Result<f64> {
        let best_so_far = tracker
            .best()
            .map(|best| best.cost)
            .ok_or_else_genetic(|| {
                GeneticError::Evolution(format!(
                    "No best individual after generation {}",
                    generation
                ))
            })?;
        let generation_best = evaluation.costs.iter().copied().fold(f64::INFINITY, f64::min);

        match self.options.get_log_level() {
            LogLevel::Minimal => {
                tracing::info!(generation, generation_best, best_so_far, "Generation evaluated");
            }
            LogLevel::Verbose => {
                tracing::info!(
                    generation,
                    generation_best,
                    best_so_far,
                    cost_mode = cost_mode(&evaluation.costs),
                    stagnation = tracker.stagnation(),
                    "Generation evaluated"
                );
            }
            LogLevel::None => {}
        }

        Ok(best_so_far)
    }
}

/// Most frequent cost of a generation; the smallest one among equally frequent costs.
pub(crate) fn cost_mode(costs: &[f64]) -> f64 {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for cost in costs {
        *counts.entry(cost.to_bits()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(bits, count)| (f64::from_bits(bits), count))
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.total_cmp(&a.0)))
        .map_or(f64::NAN, |(cost, _)| cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Bounds;

    fn sphere(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    fn launcher(options: EvolutionOptions) -> EvolutionLauncher<fn(&[f64]) -> f64> {
        EvolutionLauncher::builder()
            .with_objective(sphere as fn(&[f64]) -> f64)
            .with_bounds(Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap())
            .with_options(options)
            .build()
            .unwrap()
    }

    #[test]
    fn test_cost_mode() {
        assert_eq!(cost_mode(&[1.0, 2.0, 2.0, 3.0]), 2.0);
        assert_eq!(cost_mode(&[3.0, 1.0, 3.0, 1.0]), 1.0);
        assert_eq!(cost_mode(&[5.0]), 5.0);
        assert!(cost_mode(&[]).is_nan());
    }

    #[test]
    fn test_evolve_is_reproducible_with_seed() {
        let options = EvolutionOptions::builder()
            .population_size(20)
            .max_generations(15)
            .build();
        let launcher = launcher(options);

        let a = launcher.evolve(&mut RandomNumberGenerator::from_seed(5)).unwrap();
        let b = launcher.evolve(&mut RandomNumberGenerator::from_seed(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_generations_only_evaluates_initial_population() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .max_generations(0)
            .build();
        let result = launcher(options)
            .evolve(&mut RandomNumberGenerator::from_seed(1))
            .unwrap();

        assert_eq!(result.generation, 1);
        assert_eq!(result.stop_reason, StopReason::MaxGenerations);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.final_population.len(), 10);
        let initial_best = result
            .final_population
            .iter()
            .map(|x| sphere(x))
            .fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_cost, initial_best);
    }

    #[test]
    fn test_population_size_is_constant() {
        let options = EvolutionOptions::builder()
            .population_size(15)
            .max_generations(5)
            .build();
        let launcher = launcher(options);
        assert_eq!(launcher.options().get_population_size(), 14);

        let result = launcher.evolve(&mut RandomNumberGenerator::from_seed(2)).unwrap();
        assert_eq!(result.final_population.len(), 14);
        assert_eq!(result.generation, 6);
        assert_eq!(result.history.len(), 6);
    }

    #[test]
    fn test_elitism_keeps_best_in_population() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .max_generations(10)
            .mutation_rate(0.3)
            .elitism(true)
            .build();
        let result = launcher(options)
            .evolve(&mut RandomNumberGenerator::from_seed(3))
            .unwrap();

        assert!(result
            .final_population
            .iter()
            .any(|x| x == &result.best_parameters));
    }

    #[test]
    fn test_best_matches_its_chromosome() {
        let launcher = launcher(EvolutionOptions::builder().max_generations(10).build());
        let result = launcher.evolve(&mut RandomNumberGenerator::from_seed(8)).unwrap();
        assert_eq!(
            launcher.codec().decode(&result.best_chromosome).unwrap(),
            result.best_parameters
        );
        assert_eq!(sphere(&result.best_parameters), result.best_cost);
    }
}
