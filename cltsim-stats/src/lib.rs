#![warn(missing_docs)]
//! cltsim Statistical Engine
//!
//! The computational core of the Central Limit Theorem simulation:
//! - Population generation from a mixture of normal distributions
//! - Repeated sampling with replacement across sample sizes and trial counts
//! - Comparison of the empirical spread of sample means with `sigma / sqrt(n)`
//! - Descriptive statistics shared by all of the above
//!
//! Data flows one way: [`Population`] -> [`run_simulation`] -> [`compare`].

mod comparison;
mod error;
mod population;
mod sampling;
mod summary;

pub use comparison::{
    ComparisonCell, ComparisonTable, REPORT_DECIMALS, compare, round_to, standard_error,
    standard_errors,
};
pub use error::{Result, SimulationError};
pub use population::{Component, Population, REFERENCE_COMPONENTS};
pub use sampling::{
    SampleSizeTrialSummary, SamplingConfig, SimulationParameters, SimulationResult, TrialResult,
    run_simulation, run_simulation_with_progress, sample_means,
};
pub use summary::{SummaryStatistics, compute_summary, mean, sample_std_dev};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 7759;

/// Sample sizes of the reference experiment
pub const DEFAULT_SAMPLE_SIZES: [usize; 6] = [1, 5, 10, 30, 50, 100];

/// Trial counts of the reference experiment
pub const DEFAULT_TRIAL_COUNTS: [usize; 4] = [10, 100, 1000, 10000];
