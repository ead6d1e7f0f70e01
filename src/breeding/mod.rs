//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for the operators that turn
//! the selected parents into the next generation. The launcher chains a
//! [`SinglePointCrossover`] and a [`BitFlipMutation`], in that order.
pub mod crossover;
pub mod mutation;

use std::fmt::Debug;

use crate::{chromosome::Chromosome, error::Result, rng::RandomNumberGenerator};

/// Operator producing a new population from a selected one.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Consumes the selected population and returns the bred one, of the same size.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty or otherwise unsuitable for the operator
    /// - The chromosomes do not share one shape
    /// - A random distribution cannot be built from the operator's rate
    fn breed(
        &self,
        population: Vec<Chromosome>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

pub use crossover::SinglePointCrossover;
pub use mutation::BitFlipMutation;

pub(crate) fn check_rate(name: &str, rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rate) {
        return Err(crate::error::GeneticError::Configuration(format!(
            "{} must lie in [0, 1], got {}",
            name, rate
        )));
    }
    Ok(())
}
