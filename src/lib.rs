//! # bitga
//!
//! A binary-encoded genetic algorithm for minimizing a black-box function over
//! a box of real parameters.
//!
//! Every variable is quantized to `genes_per_variable` bits between its bounds.
//! Each generation is selected by rank, recombined by single-point crossover per
//! gene-group, mutated by independent bit flips and evaluated; the best individual
//! seen so far is tracked, and can be fed back into every generation.
//!
//! ```rust
//! use bitga::{Bounds, EvolutionLauncher, EvolutionOptions};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .genes_per_variable(16)
//!     .max_generations(100)
//!     .rng_seed(7)
//!     .build();
//!
//! let launcher = EvolutionLauncher::builder()
//!     .with_objective(|x: &[f64]| x[0] * x[0] + x[1] * x[1])
//!     .with_bounds(Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)])?)
//!     .with_options(options)
//!     .build()?;
//!
//! let result = launcher.run()?;
//! assert!(result.best_cost < 1.0);
//! # Ok::<(), bitga::GeneticError>(())
//! ```

pub mod breeding;
pub mod chromosome;
pub mod encoding;
pub mod error;
pub mod evolution;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use encoding::{BinaryCodec, Bounds};
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel, StopReason};
