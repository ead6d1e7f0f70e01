//! Best-so-far bookkeeping and the stopping rule.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chromosome::Chromosome;

/// The best individual seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestRecord {
    pub parameters: Vec<f64>,
    pub cost: f64,
    pub chromosome: Chromosome,
}

/// Tracks the best individual across generations and counts the generations
/// in a row that failed to improve on it.
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best: Option<BestRecord>,
    stagnation: usize,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker primed with a seed individual.
    pub fn seeded(record: BestRecord) -> Self {
        Self {
            best: Some(record),
            stagnation: 0,
        }
    }

    pub fn best(&self) -> Option<&BestRecord> {
        self.best.as_ref()
    }

    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// Offers a generation's best individual. It replaces the record only if its
    /// cost is strictly lower; otherwise the stagnation counter grows.
    ///
    /// Returns `true` if the record improved.
    pub fn observe(&mut self, chromosome: &Chromosome, parameters: &[f64], cost: f64) -> bool {
        let improved = self.best.as_ref().map_or(true, |best| cost < best.cost);

        if improved {
            self.best = Some(BestRecord {
                parameters: parameters.to_vec(),
                cost,
                chromosome: chromosome.clone(),
            });
            self.stagnation = 0;
        } else {
            self.stagnation += 1;
        }

        improved
    }

    /// Overwrites the worst individual (first one on ties) with the record.
    ///
    /// Returns the overwritten index, or `None` when there is no record yet or
    /// the population is empty.
    pub fn inject(&self, population: &mut [Chromosome], costs: &mut [f64]) -> Option<usize> {
        let best = self.best.as_ref()?;
        let worst = costs
            .iter()
            .enumerate()
            .fold(None, |acc: Option<(usize, f64)>, (i, &cost)| match acc {
                Some((_, worst_cost)) if worst_cost >= cost => acc,
                _ => Some((i, cost)),
            })?
            .0;

        population[worst] = best.chromosome.clone();
        costs[worst] = best.cost;
        Some(worst)
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopReason {
    /// The generation counter exceeded the generation budget.
    MaxGenerations,
    /// The best-so-far record did not improve for `stagnation_patience` generations.
    Stagnation,
}

/// Decides when the generation loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoppingRule {
    max_generations: usize,
    stagnation_patience: Option<usize>,
}

impl StoppingRule {
    pub fn new(max_generations: usize, stagnation_patience: Option<usize>) -> Self {
        Self {
            max_generations,
            stagnation_patience,
        }
    }

    /// `generation` counts evaluated populations, the initial one being 1.
    pub fn check(&self, generation: usize, tracker: &BestTracker) -> Option<StopReason> {
        if generation > self.max_generations {
            return Some(StopReason::MaxGenerations);
        }
        match self.stagnation_patience {
            Some(patience) if tracker.stagnation() == patience => Some(StopReason::Stagnation),
            _ => None,
        }
    }
}
