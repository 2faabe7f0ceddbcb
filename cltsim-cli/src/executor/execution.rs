//! Simulation Execution
//!
//! Runs the three stages in order and shows progress while the sampling engine
//! works through its pairs.
//!
//! ## Data Flow
//!
//! ```text
//!   RunSettings (cltsim.toml + CLI overrides)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ Population       │  seeded mixture of normals
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ Sampling engine  │  one progress tick per (n, t) pair
//! └────────┬─────────┘
//!          ▼
//! ┌──────────────────┐
//! │ Comparator       │  empirical / (sigma / sqrt(n)) - 1
//! └────────┬─────────┘
//!          ▼
//!     RunOutcome
//! ```

use cltsim_stats::{
    ComparisonTable, Component, Population, REPORT_DECIMALS, SamplingConfig,
    SimulationParameters, SimulationResult, compare, run_simulation_with_progress,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// Everything needed for one run
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Seed for the population and the sampling substreams
    pub seed: u64,
    /// Population mixture
    pub components: Vec<Component>,
    /// Validated sample sizes and trial counts
    pub parameters: SimulationParameters,
    /// Process pairs in parallel
    pub parallel: bool,
    /// Decimal places for reported ratios
    pub decimals: u32,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: cltsim_stats::DEFAULT_SEED,
            components: cltsim_stats::REFERENCE_COMPONENTS.to_vec(),
            parameters: SimulationParameters::default(),
            parallel: true,
            decimals: REPORT_DECIMALS,
            show_progress: false,
        }
    }
}

/// Outputs of one run, handed to the presentation layer
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub population: Population,
    pub result: SimulationResult,
    pub table: ComparisonTable,
    pub duration_ms: f64,
}

/// Generate the population, run the sampling engine and compare
///
/// A single generator seeded with `settings.seed` is threaded through the
/// population generator and then the engine, so the whole run is reproducible.
pub fn execute_run(settings: &RunSettings) -> anyhow::Result<RunOutcome> {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(settings.seed);

    let population = Population::generate(&settings.components, &mut rng)?;
    tracing::info!(
        size = population.len(),
        mean = population.mean(),
        std_dev = population.std_dev(),
        "population ready"
    );

    let pb = if settings.show_progress {
        ProgressBar::new(settings.parameters.pair_count() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let sampling = SamplingConfig {
        parallel: settings.parallel,
    };
    let result = run_simulation_with_progress(
        &population,
        &settings.parameters,
        &sampling,
        &mut rng,
        |summary| {
            pb.set_message(format!(
                "n={} trials={}",
                summary.sample_size, summary.trial_count
            ));
            pb.inc(1);
        },
    )?;
    pb.finish_with_message("Complete");

    let table = compare(population.std_dev(), &result)?;

    Ok(RunOutcome {
        population,
        result,
        table,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
