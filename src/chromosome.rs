//! # Chromosome
//!
//! A `Chromosome` is a fixed-size binary matrix of `num_variables` rows by
//! `num_genes` columns. Each row is the gene-group of one real variable. Bits are
//! stored row-major; within a gene-group the bit at position 0 is the most
//! significant one.
//!
//! ## Example
//!
//! ```rust
//! use bitga::chromosome::Chromosome;
//!
//! let chromosome = Chromosome::new(vec![true, false, false, true], 2, 2).unwrap();
//! assert_eq!(chromosome.gene_group(0), &[true, false]);
//! assert_eq!(chromosome.gene_group(1), &[false, true]);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// One individual of the population: `num_variables` gene-groups of `num_genes` bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
    num_genes: usize,
}

impl Chromosome {
    /// Builds a chromosome from row-major bits.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Domain` if `bits.len() != num_variables * num_genes`
    /// or if `num_genes` is zero.
    pub fn new(bits: Vec<bool>, num_variables: usize, num_genes: usize) -> Result<Self> {
        if num_genes == 0 {
            return Err(GeneticError::Domain(
                "A gene-group needs at least one bit".to_string(),
            ));
        }
        if bits.len() != num_variables * num_genes {
            return Err(GeneticError::Domain(format!(
                "Expected {} bits ({} variables x {} genes), got {}",
                num_variables * num_genes,
                num_variables,
                num_genes,
                bits.len()
            )));
        }
        Ok(Self { bits, num_genes })
    }

    /// Draws a chromosome whose bits are independent and uniform over {0, 1}.
    pub fn random(num_variables: usize, num_genes: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            bits: rng.fetch_bits(num_variables * num_genes),
            num_genes,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.bits.len().checked_div(self.num_genes).unwrap_or(0)
    }

    pub fn num_genes(&self) -> usize {
        self.num_genes
    }

    /// All bits, row-major.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The bits encoding variable `variable`, most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `variable >= self.num_variables()`.
    pub fn gene_group(&self, variable: usize) -> &[bool] {
        let start = variable * self.num_genes;
        &self.bits[start..start + self.num_genes]
    }

    pub(crate) fn gene_group_mut(&mut self, variable: usize) -> &mut [bool] {
        let start = variable * self.num_genes;
        &mut self.bits[start..start + self.num_genes]
    }

    pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Returns `true` if both chromosomes have the same number of gene-groups and genes.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.num_genes == other.num_genes && self.bits.len() == other.bits.len()
    }
}

/// Produces the initial population: `size` chromosomes of uniformly random bits.
///
/// # Errors
///
/// Returns `GeneticError::EmptyPopulation` if `size` is zero.
pub fn initialize_population(
    size: usize,
    num_variables: usize,
    num_genes: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Chromosome>> {
    if size == 0 {
        return Err(GeneticError::EmptyPopulation);
    }
    Ok((0..size)
        .map(|_| Chromosome::random(num_variables, num_genes, rng))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        assert!(matches!(
            Chromosome::new(vec![true; 5], 2, 3),
            Err(GeneticError::Domain(_))
        ));
        assert!(Chromosome::new(vec![], 2, 0).is_err());
    }

    #[test]
    fn test_gene_groups_are_rows() {
        let bits = vec![true, true, false, false, true, false];
        let chromosome = Chromosome::new(bits, 2, 3).unwrap();
        assert_eq!(chromosome.num_variables(), 2);
        assert_eq!(chromosome.num_genes(), 3);
        assert_eq!(chromosome.gene_group(0), &[true, true, false]);
        assert_eq!(chromosome.gene_group(1), &[false, true, false]);
    }

    #[test]
    fn test_gene_group_mut_only_touches_its_row() {
        let mut chromosome = Chromosome::new(vec![false; 6], 3, 2).unwrap();
        chromosome.gene_group_mut(1).fill(true);
        assert_eq!(chromosome.bits(), &[false, false, true, true, false, false]);
    }

    #[test]
    fn test_initialize_population_shape() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let population = initialize_population(10, 3, 8, &mut rng).unwrap();
        assert_eq!(population.len(), 10);
        for chromosome in &population {
            assert_eq!(chromosome.num_variables(), 3);
            assert_eq!(chromosome.num_genes(), 8);
            assert!(chromosome.same_shape(&population[0]));
        }
    }

    #[test]
    fn test_initialize_population_empty() {
        let mut rng = RandomNumberGenerator::new();
        assert!(matches!(
            initialize_population(0, 2, 4, &mut rng),
            Err(GeneticError::EmptyPopulation)
        ));
    }
}
