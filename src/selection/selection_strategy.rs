use std::fmt::Debug;

use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// A selection strategy draws the parents of the next generation from the
/// current population, using the raw costs of the individuals. Costs are
/// minimized: a lower cost is a better individual.
///
/// # Examples
///
/// ```
/// use bitga::selection::{RankBasedSelection, SelectionStrategy};
/// use bitga::rng::RandomNumberGenerator;
/// use bitga::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec!["a", "b", "c"];
///     let costs = vec![0.5, 0.8, 0.3];
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = RankBasedSelection::default();
///     let selected = selection.select(&population, &costs, 4, &mut rng)?;
///
///     assert_eq!(selected.len(), 4);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug + Send + Sync
where
    P: Clone,
{
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The cost vector length doesn't match the population length
    /// - A cost is not finite
    fn select(
        &self,
        population: &[P],
        costs: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}
