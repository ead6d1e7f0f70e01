//! # Binary Encoding
//!
//! Maps real parameter vectors to fixed-width binary chromosomes and back.
//!
//! Each variable `i` with bounds `(min_i, max_i)` is quantized to an unsigned
//! integer of `num_genes` bits:
//!
//! ```text
//! level = round((2^num_genes - 1) * (x_i - min_i) / (max_i - min_i))
//! x_i   = min_i + level * (max_i - min_i) / (2^num_genes - 1)
//! ```
//!
//! Bits are written most significant first. The mapping is lossy: decoding an
//! encoded vector recovers it to within one quantization step per variable.
//!
//! ## Example
//!
//! ```rust
//! use bitga::encoding::{BinaryCodec, Bounds};
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (0.0, 1.0)]).unwrap();
//! let codec = BinaryCodec::new(bounds, 16).unwrap();
//!
//! let chromosome = codec.encode(&[1.25, 0.3]).unwrap();
//! let decoded = codec.decode(&chromosome).unwrap();
//!
//! assert!((decoded[0] - 1.25).abs() <= codec.quantization_step(0));
//! assert!((decoded[1] - 0.3).abs() <= codec.quantization_step(1));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
};

/// Widest gene-group for which every level is exactly representable as an `f64`.
pub const MAX_GENES_PER_VARIABLE: usize = 52;

/// Box constraints: one `(min, max)` pair per variable, `min < max`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    limits: Vec<(f64, f64)>,
}

impl Bounds {
    /// Validates and wraps the given limits.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `limits` is empty, if any limit is
    /// not finite, or if any pair has `min >= max`.
    pub fn new(limits: Vec<(f64, f64)>) -> Result<Self> {
        if limits.is_empty() {
            return Err(GeneticError::Configuration(
                "Bounds must contain at least one variable".to_string(),
            ));
        }

        for (i, &(min, max)) in limits.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() {
                return Err(GeneticError::Configuration(format!(
                    "Bounds of variable {} must be finite, got ({}, {})",
                    i, min, max
                )));
            }
            if min >= max {
                return Err(GeneticError::Configuration(format!(
                    "Bounds of variable {} must satisfy min < max, got ({}, {})",
                    i, min, max
                )));
            }
        }

        Ok(Self { limits })
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn min(&self, variable: usize) -> f64 {
        self.limits[variable].0
    }

    pub fn max(&self, variable: usize) -> f64 {
        self.limits[variable].1
    }

    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.limits.iter()
    }

    /// Returns `true` if every value lies inside its variable's closed interval.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.limits.len()
            && x
                .iter()
                .zip(&self.limits)
                .all(|(&value, &(min, max))| (min..=max).contains(&value))
    }
}

/// Encoder/decoder between real parameter vectors and binary chromosomes.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCodec {
    bounds: Bounds,
    num_genes: usize,
    max_level: u64,
}

impl BinaryCodec {
    /// Creates a codec using `num_genes` bits per variable.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if `num_genes` is zero or larger than
    /// [`MAX_GENES_PER_VARIABLE`].
    pub fn new(bounds: Bounds, num_genes: usize) -> Result<Self> {
        if num_genes < 1 {
            return Err(GeneticError::Configuration(
                "Genes per variable must be at least 1".to_string(),
            ));
        }
        if num_genes > MAX_GENES_PER_VARIABLE {
            return Err(GeneticError::Configuration(format!(
                "Genes per variable must not exceed {}, got {}",
                MAX_GENES_PER_VARIABLE, num_genes
            )));
        }

        Ok(Self {
            bounds,
            num_genes,
            max_level: (1u64 << num_genes) - 1,
        })
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn num_variables(&self) -> usize {
        self.bounds.len()
    }

    pub fn num_genes(&self) -> usize {
        self.num_genes
    }

    /// Largest integer a gene-group can hold, `2^num_genes - 1`.
    pub fn max_level(&self) -> u64 {
        self.max_level
    }

    /// Width of one quantization level of `variable`.
    pub fn quantization_step(&self, variable: usize) -> f64 {
        (self.bounds.max(variable) - self.bounds.min(variable)) / self.max_level as f64
    }

    /// Encodes a parameter vector into a chromosome.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Domain` if `x` does not have one value per variable,
    /// or if a value is not finite or lies outside its bounds.
    pub fn encode(&self, x: &[f64]) -> Result<Chromosome> {
        self.check_vector(x)?;

        let max_level = self.max_level as f64;
        let mut bits = Vec::with_capacity(self.num_variables() * self.num_genes);

        for (&value, &(min, max)) in x.iter().zip(self.bounds.iter()) {
            let scaled = (max_level * (value - min) / (max - min)).round_ties_even();
            let level = scaled.clamp(0.0, max_level) as u64;
            bits.extend((0..self.num_genes).rev().map(|shift| (level >> shift) & 1 == 1));
        }

        Chromosome::new(bits, self.num_variables(), self.num_genes)
    }

    /// Decodes a chromosome into its parameter vector.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Domain` if the chromosome's shape does not match
    /// this codec.
    pub fn decode(&self, chromosome: &Chromosome) -> Result<Vec<f64>> {
        Ok(self
            .levels(chromosome)?
            .into_iter()
            .zip(self.bounds.iter())
            .map(|(level, &(min, max))| {
                let value = min + level as f64 * (max - min) / self.max_level as f64;
                value.clamp(min, max)
            })
            .collect())
    }

    /// Integer level held by each gene-group, in `[0, 2^num_genes - 1]`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Domain` if the chromosome's shape does not match
    /// this codec.
    pub fn levels(&self, chromosome: &Chromosome) -> Result<Vec<u64>> {
        self.check_chromosome(chromosome)?;

        Ok((0..self.num_variables())
            .map(|variable| {
                chromosome
                    .gene_group(variable)
                    .iter()
                    .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
            })
            .collect())
    }

    fn check_vector(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.num_variables() {
            return Err(GeneticError::Domain(format!(
                "Expected {} parameters, got {}",
                self.num_variables(),
                x.len()
            )));
        }
        let outside = |&(i, &value): &(usize, &f64)| {
            !value.is_finite() || !(self.bounds.min(i)..=self.bounds.max(i)).contains(&value)
        };
        if let Some((i, value)) = x.iter().enumerate().find(outside) {
            return Err(GeneticError::Domain(format!(
                "Parameter {} = {} lies outside [{}, {}]",
                i,
                value,
                self.bounds.min(i),
                self.bounds.max(i)
            )));
        }
        Ok(())
    }

    fn check_chromosome(&self, chromosome: &Chromosome) -> Result<()> {
        if chromosome.num_genes() != self.num_genes
            || chromosome.num_variables() != self.num_variables()
        {
            return Err(GeneticError::Domain(format!(
                "Expected a {}x{} chromosome, got {}x{}",
                self.num_variables(),
                self.num_genes,
                chromosome.num_variables(),
                chromosome.num_genes()
            )));
        }
        Ok(())
    }
}
