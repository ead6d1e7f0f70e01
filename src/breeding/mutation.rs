//! # BitFlipMutation
//!
//! XORs every chromosome with a Bernoulli(`mutation_rate`) mask of its own shape,
//! so that each bit flips independently with probability `mutation_rate`.
use super::{check_rate, BreedStrategy};
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    mutation_rate: f64,
}

impl BitFlipMutation {
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `mutation_rate` is outside `[0, 1]`.
    pub fn new(mutation_rate: f64) -> Result<Self> {
        check_rate("Mutation rate", mutation_rate)?;
        Ok(Self { mutation_rate })
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Flips the bits of `chromosome` selected by a fresh Bernoulli mask.
    pub fn mutate(
        &self,
        chromosome: &mut Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let mask = rng.fetch_bernoulli(self.mutation_rate, chromosome.bits().len())?;
        chromosome
            .bits_mut()
            .iter_mut()
            .zip(mask)
            .for_each(|(bit, flip)| *bit ^= flip);
        Ok(())
    }
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self {
            mutation_rate: 0.01,
        }
    }
}

impl BreedStrategy for BitFlipMutation {
    fn breed(
        &self,
        mut population: Vec<Chromosome>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        for chromosome in population.iter_mut() {
            self.mutate(chromosome, rng)?;
        }

        Ok(population)
    }
}
