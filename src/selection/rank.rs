use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// Default exponent applied to the ranks.
pub const DEFAULT_SELECTION_PRESSURE: f64 = 0.5;

/// A selection strategy that draws individuals with replacement, with a
/// probability derived from their rank in the population.
///
/// The rank of an individual with cost `c` is the number of individuals whose
/// cost is `<= c`, so the unique best individual has rank 1 and tied individuals
/// share the rank of the last of them. Each rank is turned into the weight
/// `rank^(-selection_pressure)` and the weights are normalized to sum to 1.
///
/// A pressure of `0.0` gives uniform selection; larger values favour the best
/// ranks more sharply.
///
/// # Examples
///
/// ```
/// use bitga::selection::rank::RankBasedSelection;
///
/// let selection = RankBasedSelection::new(1.0).unwrap();
/// let probabilities = selection.probabilities(&[3.0, 1.0, 2.0]).unwrap();
///
/// // ranks are [3, 1, 2], weights [1/3, 1, 1/2]
/// let total = 1.0 / 3.0 + 1.0 + 0.5;
/// assert!((probabilities[1] - 1.0 / total).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct RankBasedSelection {
    /// Higher values increase selection pressure.
    selection_pressure: f64,
}

impl RankBasedSelection {
    /// Creates a rank-based selection with the given pressure exponent.
    ///
    /// # Errors
    ///
    /// Returns a `GeneticError::Configuration` error if `selection_pressure` is
    /// negative or not finite.
    pub fn new(selection_pressure: f64) -> Result<Self> {
        if !selection_pressure.is_finite() || selection_pressure < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Selection pressure must be a finite, non-negative number, got {}",
                selection_pressure
            )));
        }

        Ok(Self { selection_pressure })
    }

    pub fn selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    /// Rank of each cost: how many costs are lower than or equal to it.
    pub fn ranks(costs: &[f64]) -> Vec<usize> {
        let mut sorted = costs.to_vec();
        sorted.sort_by(f64::total_cmp);

        costs
            .iter()
            .map(|&cost| sorted.partition_point(|&other| other <= cost))
            .collect()
    }

    /// Selection probability of each individual.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` for an empty cost vector and
    /// `GeneticError::FitnessCalculation` if a cost is not finite.
    pub fn probabilities(&self, costs: &[f64]) -> Result<Vec<f64>> {
        if costs.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        if let Some(cost) = costs.iter().find(|cost| !cost.is_finite()) {
            return Err(GeneticError::FitnessCalculation(format!(
                "Cannot rank a non-finite cost: {}",
                cost
            )));
        }

        // Relative to the best rank: its weight is exactly 1 for any pressure.
        let ranks = Self::ranks(costs);
        let min_rank = ranks.iter().copied().min().unwrap_or(1) as f64;
        let weights: Vec<f64> = ranks
            .into_iter()
            .map(|rank| (rank as f64 / min_rank).powf(-self.selection_pressure))
            .collect();
        let total: f64 = weights.iter().sum();

        Ok(weights.into_iter().map(|weight| weight / total).collect())
    }
}

impl Default for RankBasedSelection {
    fn default() -> Self {
        Self {
            selection_pressure: DEFAULT_SELECTION_PRESSURE,
        }
    }
}

impl<P> SelectionStrategy<P> for RankBasedSelection
where
    P: Clone,
{
    fn select(
        &self,
        population: &[P],
        costs: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if costs.len() != population.len() {
            return Err(GeneticError::Other(format!(
                "Cost vector length ({}) doesn't match population length ({})",
                costs.len(),
                population.len()
            )));
        }

        let probabilities = self.probabilities(costs)?;

        Ok(rng
            .fetch_weighted_indices(&probabilities, num_to_select)?
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_unique_costs() {
        assert_eq!(
            RankBasedSelection::ranks(&[0.5, 0.8, 0.3, 0.9, 0.1]),
            vec![3, 4, 2, 5, 1]
        );
    }

    #[test]
    fn test_ranks_ties_share_the_upper_count() {
        // Both minima count each other, so neither gets rank 1.
        assert_eq!(RankBasedSelection::ranks(&[1.0, 1.0, 2.0]), vec![2, 2, 3]);
        assert_eq!(RankBasedSelection::ranks(&[4.0, 4.0, 4.0]), vec![3, 3, 3]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let selection = RankBasedSelection::default();

        for len in 1..40 {
            let costs: Vec<f64> = rng
                .fetch_bits(len * 8)
                .chunks(8)
                .map(|byte| byte.iter().fold(0.0, |acc, &b| acc * 2.0 + b as u8 as f64) - 100.0)
                .collect();
            let probabilities = selection.probabilities(&costs).unwrap();

            assert_eq!(probabilities.len(), len);
            assert!(probabilities.iter().all(|&p| p >= 0.0));
            assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_pressure_is_uniform() {
        let selection = RankBasedSelection::new(0.0).unwrap();
        let probabilities = selection.probabilities(&[9.0, -3.0, 0.5, 2.0]).unwrap();
        for p in probabilities {
            assert!((p - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_higher_pressure_favours_best() {
        let costs = [3.0, 1.0, 2.0];
        let mild = RankBasedSelection::new(0.5).unwrap().probabilities(&costs).unwrap();
        let sharp = RankBasedSelection::new(4.0).unwrap().probabilities(&costs).unwrap();
        assert!(sharp[1] > mild[1]);
        assert!(mild[1] > mild[2] && mild[2] > mild[0]);
    }

    #[test]
    fn test_steep_pressure_with_tied_costs() {
        let selection = RankBasedSelection::new(2000.0).unwrap();

        let probabilities = selection.probabilities(&[7.0; 50]).unwrap();
        for p in probabilities {
            assert!((p - 0.02).abs() < 1e-12);
        }

        let probabilities = selection.probabilities(&[1.0, 1.0, 5.0, 3.0]).unwrap();
        assert_eq!(probabilities, vec![0.5, 0.5, 0.0, 0.0]);

        let mut rng = RandomNumberGenerator::from_seed(1);
        let selected = selection
            .select(&[0, 1, 2, 3], &[1.0, 1.0, 5.0, 3.0], 20, &mut rng)
            .unwrap();
        assert!(selected.iter().all(|&i| i < 2));
    }

    #[test]
    fn test_probabilities_reject_non_finite() {
        let selection = RankBasedSelection::default();
        assert!(matches!(
            selection.probabilities(&[1.0, f64::NAN]),
            Err(GeneticError::FitnessCalculation(_))
        ));
        assert!(matches!(
            selection.probabilities(&[]),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_invalid_selection_pressure() {
        assert!(RankBasedSelection::new(-0.5).is_err());
        assert!(RankBasedSelection::new(f64::INFINITY).is_err());
        assert!(RankBasedSelection::new(0.0).is_ok());
    }

    #[test]
    fn test_select_with_replacement() {
        let population = vec![1, 2, 3];
        let costs = vec![0.5, 0.8, 0.3];
        let mut rng = RandomNumberGenerator::from_seed(2);

        let selected = RankBasedSelection::default()
            .select(&population, &costs, 10, &mut rng)
            .unwrap();
        assert_eq!(selected.len(), 10);
        assert!(selected.iter().all(|v| population.contains(v)));
    }

    #[test]
    fn test_select_single_individual() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let selected = RankBasedSelection::new(3.0)
            .unwrap()
            .select(&["only"], &[42.0], 4, &mut rng)
            .unwrap();
        assert_eq!(selected, vec!["only"; 4]);
    }

    #[test]
    fn test_select_favours_low_cost() {
        let population: Vec<usize> = (0..4).collect();
        let costs = vec![10.0, 20.0, 30.0, 0.0];
        let mut rng = RandomNumberGenerator::from_seed(99);

        let selected = RankBasedSelection::new(2.0)
            .unwrap()
            .select(&population, &costs, 4000, &mut rng)
            .unwrap();
        let best = selected.iter().filter(|&&i| i == 3).count();
        let worst = selected.iter().filter(|&&i| i == 2).count();
        assert!(best > worst * 4);
    }

    #[test]
    fn test_select_empty_population() {
        let population: Vec<u8> = Vec::new();
        let mut rng = RandomNumberGenerator::new();
        let result = RankBasedSelection::default().select(&population, &[], 3, &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_select_mismatched_lengths() {
        let mut rng = RandomNumberGenerator::new();
        let result = RankBasedSelection::default().select(&[1, 2], &[0.5], 1, &mut rng);
        assert!(result.is_err());
    }
}
