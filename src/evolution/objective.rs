//! # Objective
//!
//! The function being minimized. It maps a decoded parameter vector to a real
//! cost and must be pure and defined over the whole box of the bounds.
//!
//! Any closure `Fn(&[f64]) -> f64` is an objective. [`WithArgs`] passes fixed
//! extra arguments after the parameters, and [`Fallible`] adapts closures that
//! can fail.
//!
//! ```rust
//! use bitga::evolution::objective::{Fallible, Objective, WithArgs};
//! use bitga::error::ResultExt;
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
//!
//! let shifted = WithArgs::new(
//!     |x: &[f64], center: &[f64]| x.iter().zip(center).map(|(v, c)| (v - c).powi(2)).sum(),
//!     vec![1.0, 1.0],
//! );
//! assert_eq!(shifted.evaluate(&[1.0, 3.0]).unwrap(), 4.0);
//!
//! let parsed = Fallible::new(|x: &[f64]| {
//!     let scale = "2.0".parse::<f64>().context("Bad scale")?;
//!     Ok(scale * x[0])
//! });
//! assert_eq!(parsed.evaluate(&[1.5]).unwrap(), 3.0);
//! ```

use crate::error::{GeneticError, Result};

/// A cost function to minimize.
pub trait Objective {
    /// Cost of the parameter vector `x`.
    fn evaluate(&self, x: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        Ok(self(x))
    }
}

/// An objective taking fixed extra arguments after the parameter vector.
#[derive(Debug, Clone)]
pub struct WithArgs<F, A> {
    function: F,
    args: Vec<A>,
}

impl<F, A> WithArgs<F, A>
where
    F: Fn(&[f64], &[A]) -> f64,
{
    pub fn new(function: F, args: Vec<A>) -> Self {
        Self { function, args }
    }

    pub fn args(&self) -> &[A] {
        &self.args
    }
}

impl<F, A> Objective for WithArgs<F, A>
where
    F: Fn(&[f64], &[A]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        Ok((self.function)(x, &self.args))
    }
}

/// An objective whose evaluation can fail. A failure aborts the run.
#[derive(Debug, Clone)]
pub struct Fallible<F>(F);

impl<F> Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    pub fn new(function: F) -> Self {
        Self(function)
    }
}

impl<F> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64>,
{
    fn evaluate(&self, x: &[f64]) -> Result<f64> {
        (self.0)(x)
    }
}

/// Evaluates `objective` at `x`, rejecting non-finite costs.
pub(crate) fn finite_cost<O: Objective + ?Sized>(objective: &O, x: &[f64]) -> Result<f64> {
    let cost = objective.evaluate(x)?;
    if !cost.is_finite() {
        return Err(GeneticError::FitnessCalculation(format!(
            "Non-finite cost {} at {:?}",
            cost, x
        )));
    }
    Ok(cost)
}
