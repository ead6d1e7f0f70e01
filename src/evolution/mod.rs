pub mod builder;
pub mod launcher;
pub mod objective;
pub mod options;
pub mod tracker;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionResult};
pub use objective::{Fallible, Objective, WithArgs};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use tracker::{BestRecord, BestTracker, StopReason, StoppingRule};
