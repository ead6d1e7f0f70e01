//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunable parameters of a run: population
//! size, bits per variable, generation budget, operator rates, selection pressure,
//! the stagnation stopping rule, elitism, logging and the random seed.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .genes_per_variable(16)
//!     .max_generations(100)
//!     .crossover_rate(0.8)
//!     .mutation_rate(0.01)
//!     .stagnation_patience(20)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert_eq!(options.get_stagnation_patience(), Some(20));
//!
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_selection_pressure(), 0.5);
//! ```
//!
//! Options are only validated when a launcher is built from them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::selection::rank::DEFAULT_SELECTION_PRESSURE;

/// How much per-generation progress is reported through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogLevel {
    /// Best cost, best-so-far cost, cost mode and stagnation counter.
    Verbose,
    /// Best cost and best-so-far cost.
    Minimal,
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvolutionOptions {
    population_size: usize,
    genes_per_variable: usize,
    max_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    selection_pressure: f64,
    /// Generations without improvement before stopping early.
    stagnation_patience: Option<usize>,
    /// Re-inject the best-so-far individual even without seed parameters.
    elitism: bool,
    log_level: LogLevel,
    rng_seed: Option<u64>,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        genes_per_variable: usize,
        max_generations: usize,
        crossover_rate: f64,
        mutation_rate: f64,
    ) -> Self {
        Self {
            population_size,
            genes_per_variable,
            max_generations,
            crossover_rate,
            mutation_rate,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_genes_per_variable(&self) -> usize {
        self.genes_per_variable
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    pub fn get_stagnation_patience(&self) -> Option<usize> {
        self.stagnation_patience
    }

    pub fn get_elitism(&self) -> bool {
        self.elitism
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Sets the population size. Odd sizes are rounded down when the launcher is built.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_genes_per_variable(&mut self, genes_per_variable: usize) {
        self.genes_per_variable = genes_per_variable;
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_selection_pressure(&mut self, selection_pressure: f64) {
        self.selection_pressure = selection_pressure;
    }

    pub fn set_stagnation_patience(&mut self, stagnation_patience: Option<usize>) {
        self.stagnation_patience = stagnation_patience;
    }

    pub fn set_elitism(&mut self, elitism: bool) {
        self.elitism = elitism;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_rng_seed(&mut self, rng_seed: Option<u64>) {
        self.rng_seed = rng_seed;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 50,
            genes_per_variable: 16,
            max_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            selection_pressure: DEFAULT_SELECTION_PRESSURE,
            stagnation_patience: None,
            elitism: false,
            log_level: LogLevel::None,
            rng_seed: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    genes_per_variable: Option<usize>,
    max_generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    selection_pressure: Option<f64>,
    stagnation_patience: Option<usize>,
    elitism: Option<bool>,
    log_level: Option<LogLevel>,
    rng_seed: Option<u64>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn genes_per_variable(mut self, value: usize) -> Self {
        self.genes_per_variable = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn selection_pressure(mut self, value: f64) -> Self {
        self.selection_pressure = Some(value);
        self
    }

    pub fn stagnation_patience(mut self, value: usize) -> Self {
        self.stagnation_patience = Some(value);
        self
    }

    pub fn elitism(mut self, value: bool) -> Self {
        self.elitism = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Shorthand for `log_level(LogLevel::Verbose)` / `log_level(LogLevel::None)`.
    pub fn verbose(self, value: bool) -> Self {
        self.log_level(if value { LogLevel::Verbose } else { LogLevel::None })
    }

    pub fn rng_seed(mut self, value: u64) -> Self {
        self.rng_seed = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            genes_per_variable: self
                .genes_per_variable
                .unwrap_or(defaults.genes_per_variable),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            selection_pressure: self
                .selection_pressure
                .unwrap_or(defaults.selection_pressure),
            stagnation_patience: self.stagnation_patience.or(defaults.stagnation_patience),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            rng_seed: self.rng_seed.or(defaults.rng_seed),
        }
    }
}
