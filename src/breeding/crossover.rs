//! # SinglePointCrossover
//!
//! Pairs the individual at every even index with the one following it. For each
//! pair and each gene-group a Bernoulli(`crossover_rate`) draw decides whether
//! the group is recombined. A recombined group takes the bits before a cut point
//! drawn from `{1, ..., num_genes - 1}` from the first parent and the bits at and
//! after it from the second parent; a group that is not recombined is copied
//! from the first parent rather than swapped with the second, so a zero rate
//! leaves every pair equal to its first member.
//!
//! Each pair yields a single offspring, which replaces both members of the pair.
use super::{check_rate, BreedStrategy};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct SinglePointCrossover {
    crossover_rate: f64,
}

impl SinglePointCrossover {
    /// Creates a crossover operator recombining each gene-group with probability `crossover_rate`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `crossover_rate` is outside `[0, 1]`.
    pub fn new(crossover_rate: f64) -> Result<Self> {
        check_rate("Crossover rate", crossover_rate)?;
        Ok(Self { crossover_rate })
    }

    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Recombines one pair into its single offspring.
    fn offspring(
        &self,
        first: &Chromosome,
        second: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Chromosome> {
        if !first.same_shape(second) {
            return Err(GeneticError::Domain(format!(
                "Cannot cross a {}x{} chromosome with a {}x{} one",
                first.num_variables(),
                first.num_genes(),
                second.num_variables(),
                second.num_genes()
            )));
        }

        let num_genes = first.num_genes();
        let gates = rng.fetch_bernoulli(self.crossover_rate, first.num_variables())?;
        let mut child = first.clone();

        for (variable, crossing) in gates.into_iter().enumerate() {
            if !crossing {
                continue;
            }
            if let Some(cut) = rng.cut_point(num_genes) {
                child.gene_group_mut(variable)[cut..]
                    .copy_from_slice(&second.gene_group(variable)[cut..]);
            }
        }

        Ok(child)
    }
}

impl Default for SinglePointCrossover {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
        }
    }
}

impl BreedStrategy for SinglePointCrossover {
    fn breed(
        &self,
        population: Vec<Chromosome>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if population.len() % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Crossover pairs individuals, got an odd population of {}",
                population.len()
            )));
        }

        let mut children = Vec::with_capacity(population.len());
        for pair in population.chunks_exact(2) {
            let child = self.offspring(&pair[0], &pair[1], rng)?;
            children.push(child.clone());
            children.push(child);
        }

        Ok(children)
    }
}
