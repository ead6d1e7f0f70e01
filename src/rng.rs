//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate's `StdRng` and provides
//! the draws the genetic operators need: uniform bits for the initial population,
//! Bernoulli masks for crossover gating and mutation, cut points, and weighted
//! index draws with replacement for selection.
//!
//! ## Example
//!
//! ```rust
//! use bitga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let bits = rng.fetch_bits(8);
//! assert_eq!(bits.len(), 8);
//!
//! let mask = rng.fetch_bernoulli(0.0, 8).unwrap();
//! assert!(mask.iter().all(|&bit| !bit));
//! ```

use rand::{
    distributions::{Bernoulli, Distribution, WeightedIndex},
    rngs::StdRng,
    Rng, SeedableRng,
};

use crate::error::{GeneticError, Result};

/// A wrapper around the `rand` crate's `StdRng` that provides the random draws
/// used throughout the algorithm.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws `num` bits, each independently and uniformly from {0, 1}.
    pub fn fetch_bits(&mut self, num: usize) -> Vec<bool> {
        (0..num).map(|_| self.rng.gen::<bool>()).collect()
    }

    /// Draws `num` independent Bernoulli(`probability`) outcomes.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::RandomGeneration` if `probability` is not in `[0, 1]`.
    pub fn fetch_bernoulli(&mut self, probability: f64, num: usize) -> Result<Vec<bool>> {
        let distribution = Bernoulli::new(probability).map_err(|e| {
            GeneticError::RandomGeneration(format!(
                "Invalid Bernoulli probability {}: {}",
                probability, e
            ))
        })?;
        Ok((0..num).map(|_| distribution.sample(&mut self.rng)).collect())
    }

    /// Draws a crossover cut point uniformly from `{1, ..., num_genes - 1}`.
    ///
    /// Returns `None` when `num_genes < 2`, since no cut point exists.
    pub fn cut_point(&mut self, num_genes: usize) -> Option<usize> {
        if num_genes < 2 {
            return None;
        }
        Some(self.rng.gen_range(1..num_genes))
    }

    /// Draws `num` indices with replacement, index `i` having probability
    /// proportional to `weights[i]`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::RandomGeneration` if the weights are empty, negative,
    /// non-finite or all zero.
    pub fn fetch_weighted_indices(&mut self, weights: &[f64], num: usize) -> Result<Vec<usize>> {
        let distribution = WeightedIndex::new(weights).map_err(|e| {
            GeneticError::RandomGeneration(format!("Invalid selection weights: {}", e))
        })?;
        Ok((0..num).map(|_| distribution.sample(&mut self.rng)).collect())
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
