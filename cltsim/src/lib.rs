#![warn(missing_docs)]
//! # cltsim
//!
//! Empirical demonstration of the Central Limit Theorem.
//!
//! cltsim builds a deliberately bimodal population, draws samples of several
//! sizes from it many times over, and checks how closely the spread of the
//! sample means follows the theoretical standard error `sigma / sqrt(n)`:
//! - **Population Generator**: seeded mixture of normal sub-populations
//! - **Sampling Engine**: repeated sampling with replacement, one random
//!   substream per `(sample size, trial count)` pair, optionally in parallel
//! - **Comparator**: `empirical / theoretical - 1` for every pair
//! - **Reporting**: JSON report, CSV exports, terminal table
//!
//! ## Quick Start
//!
//! ```no_run
//! use cltsim::{
//!     Population, REFERENCE_COMPONENTS, SamplingConfig, SimulationParameters, compare,
//!     run_simulation,
//! };
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7759);
//! let population = Population::generate(&REFERENCE_COMPONENTS, &mut rng)?;
//! let params = SimulationParameters::default();
//! let result = run_simulation(&population, &params, &SamplingConfig::default(), &mut rng)?;
//! let table = compare(population.std_dev(), &result)?;
//! println!("{:?}", table.rounded_grid(3));
//! # Ok::<(), cltsim::SimulationError>(())
//! ```

// Re-export the computational core
pub use cltsim_stats::{
    ComparisonCell, ComparisonTable, Component, DEFAULT_SAMPLE_SIZES, DEFAULT_SEED,
    DEFAULT_TRIAL_COUNTS, Population, REFERENCE_COMPONENTS, REPORT_DECIMALS,
    SampleSizeTrialSummary, SamplingConfig, SimulationError, SimulationParameters,
    SimulationResult, SummaryStatistics, TrialResult, compare, compute_summary, round_to,
    run_simulation, run_simulation_with_progress, sample_means, sample_std_dev, standard_error,
    standard_errors,
};

// Re-export reporting
pub use cltsim_report::{
    OutputFormat, Report, build_report, generate_csv_report, generate_json_report,
    write_population_csv, write_trials_csv,
};

// Re-export the runner
pub use cltsim_cli::{CltConfig, RunOutcome, RunSettings, execute_run};

/// Run the cltsim command-line interface.
///
/// ```ignore
/// fn main() {
///     cltsim::run().unwrap();
/// }
/// ```
pub use cltsim_cli::run;
