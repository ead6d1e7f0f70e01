//! # Error Types
//!
//! This module defines the error type shared by every stage of the genetic
//! algorithm: configuration validation, encoding, fitness evaluation and the
//! random draws made by the operators.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use bitga::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!("rate {} is outside [0, 1]", rate)));
//!     }
//!     Ok(rate)
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `ResultExt` trait to add context to a foreign error, e.g. inside a
//! fallible objective function:
//!
//! ```rust
//! use bitga::error::{Result, ResultExt};
//!
//! fn parse_offset(raw: &str) -> Result<f64> {
//!     raw.parse::<f64>().context("Invalid offset")
//! }
//!
//! assert!(parse_offset("1.5").is_ok());
//! assert!(parse_offset("abc").is_err());
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the genetic algorithm.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid configuration was provided (bounds, rates, sizes, seed parameters).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A vector or chromosome handed to the encoder/decoder does not match its shape or domain.
    #[error("Domain error: {0}")]
    Domain(String),

    /// An evolution run ended without producing a result.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// An operator was asked to work on an empty population.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The objective function failed or produced a non-finite cost.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// A random distribution could not be built from the given parameters.
    #[error("Random generation error: {0}")]
    RandomGeneration(String),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use bitga::error::ResultExt;
///
/// fn read_scale(raw: &str) -> bitga::error::Result<u32> {
///     let scale = raw.parse::<u32>().context("Failed to parse scale")?;
///     Ok(scale)
/// }
///
/// assert_eq!(read_scale("3").unwrap(), 3);
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using `err_fn` for `None`.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_foreign_error() {
        let result: Result<i32> = "x".parse::<i32>().context("Parsing gene count");
        match result {
            Err(GeneticError::Other(msg)) => assert!(msg.starts_with("Parsing gene count: ")),
            _ => panic!("Expected Other error"),
        }
    }

    #[test]
    fn test_ok_or_else_genetic() {
        let some: Option<u8> = Some(1);
        assert_eq!(some.ok_or_else_genetic(|| GeneticError::EmptyPopulation).unwrap(), 1);

        let none: Option<u8> = None;
        assert!(matches!(
            none.ok_or_else_genetic(|| GeneticError::EmptyPopulation),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_display_messages() {
        let err = GeneticError::Domain("expected 2 values, got 3".to_string());
        assert_eq!(err.to_string(), "Domain error: expected 2 values, got 3");

        let err = GeneticError::Configuration("bad bounds".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad bounds");
    }
}
