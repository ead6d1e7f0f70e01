use crate::{
    encoding::{BinaryCodec, Bounds},
    error::{GeneticError, Result},
};

use super::{
    objective::{finite_cost, Objective},
    options::EvolutionOptions,
    tracker::BestRecord,
    EvolutionLauncher,
};

/// Collects and validates everything an [`EvolutionLauncher`] needs.
///
/// # Example
///
/// ```rust
/// use bitga::encoding::Bounds;
/// use bitga::evolution::{EvolutionLauncher, EvolutionOptions};
///
/// let launcher = EvolutionLauncher::builder()
///     .with_objective(|x: &[f64]| (x[0] - 1.0).powi(2))
///     .with_bounds(Bounds::new(vec![(-2.0, 2.0)]).unwrap())
///     .with_options(EvolutionOptions::builder().max_generations(10).rng_seed(3).build())
///     .with_seed_parameters(vec![0.0])
///     .build()
///     .unwrap();
///
/// let result = launcher.run().unwrap();
/// assert!(result.best_cost <= 1.0);
/// ```
pub struct EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    objective: Option<O>,
    bounds: Option<Bounds>,
    num_variables: Option<usize>,
    options: EvolutionOptions,
    seed_parameters: Option<Vec<f64>>,
}

impl<O> EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    pub fn new() -> Self {
        Self {
            objective: None,
            bounds: None,
            num_variables: None,
            options: EvolutionOptions::default(),
            seed_parameters: None,
        }
    }

    pub fn with_objective(mut self, objective: O) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Declares the number of variables; `build` checks it against the bounds.
    pub fn with_num_variables(mut self, num_variables: usize) -> Self {
        self.num_variables = Some(num_variables);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = options;
        self
    }

    /// Primes the best-so-far record with `seed_parameters` and turns on
    /// re-injection of that record into every generation.
    pub fn with_seed_parameters(mut self, seed_parameters: Vec<f64>) -> Self {
        self.seed_parameters = Some(seed_parameters);
        self
    }

    /// Validates the configuration and evaluates the seed parameters, if any.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the objective or bounds are
    /// missing, the declared number of variables disagrees with the bounds,
    /// the population has fewer than two individuals after rounding down to an
    /// even size, the genes per variable are out of range, a rate is outside
    /// `[0, 1]`, the selection pressure is negative, the stagnation patience is
    /// zero, or the seed parameters have the wrong length or leave the bounds.
    /// Returns `GeneticError::FitnessCalculation` if the seed's cost cannot be
    /// computed.
    pub fn build(self) -> Result<EvolutionLauncher<O>> {
        let objective = self
            .objective
            .ok_or_else(|| GeneticError::Configuration("Objective not specified".to_string()))?;

        let bounds = self
            .bounds
            .ok_or_else(|| GeneticError::Configuration("Bounds not specified".to_string()))?;

        if let Some(num_variables) = self.num_variables {
            if num_variables != bounds.len() {
                return Err(GeneticError::Configuration(format!(
                    "Expected bounds for {} variables, got {}",
                    num_variables,
                    bounds.len()
                )));
            }
        }

        let mut options = self.options;
        let population_size = options.get_population_size() - options.get_population_size() % 2;
        if population_size < 2 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be at least 2, got {}",
                options.get_population_size()
            )));
        }
        options.set_population_size(population_size);

        if options.get_stagnation_patience() == Some(0) {
            return Err(GeneticError::Configuration(
                "Stagnation patience must be at least 1".to_string(),
            ));
        }

        let codec = BinaryCodec::new(bounds, options.get_genes_per_variable())?;

        let seed = match self.seed_parameters {
            Some(parameters) => Some(seed_record(&objective, &codec, parameters)?),
            None => None,
        };

        EvolutionLauncher::new(objective, codec, options, seed)
    }
}

impl<O> Default for EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}

fn seed_record<O: Objective>(
    objective: &O,
    codec: &BinaryCodec,
    parameters: Vec<f64>,
) -> Result<BestRecord> {
    if parameters.len() != codec.num_variables() {
        return Err(GeneticError::Configuration(format!(
            "Seed parameters must have {} values, got {}",
            codec.num_variables(),
            parameters.len()
        )));
    }
    if !codec.bounds().contains(&parameters) {
        return Err(GeneticError::Configuration(format!(
            "Seed parameters {:?} lie outside the bounds",
            parameters
        )));
    }

    let chromosome = codec.encode(&parameters)?;
    let cost = finite_cost(objective, &parameters)?;

    Ok(BestRecord {
        parameters,
        cost,
        chromosome,
    })
}
