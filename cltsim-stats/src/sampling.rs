//! Sampling Engine
//!
//! For every `(sample_size, trial_count)` pair, draws `trial_count` samples of
//! `sample_size` elements from the population (with replacement), takes each
//! sample's mean and records the standard deviation of those means.
//!
//! Pairs are enumerated row-major: outer loop over sample sizes, inner loop over
//! trial counts. Each pair owns a random substream whose seed is drawn from the
//! caller's generator in that order before any sampling starts, so a serial run
//! and a parallel run with the same seed produce identical results.
//!
//! Sampling is with replacement, so a population smaller than the sample size
//! is still valid input.

use crate::error::{Result, SimulationError};
use crate::population::Population;
use crate::summary::{mean, sample_std_dev};
use crate::{DEFAULT_SAMPLE_SIZES, DEFAULT_TRIAL_COUNTS};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

/// Sample sizes and trial counts for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationParameters {
    sample_sizes: Vec<usize>,
    trial_counts: Vec<usize>,
}

impl SimulationParameters {
    /// Validate and build the parameter set.
    ///
    /// # Errors
    /// Both sequences must be non-empty and free of duplicates, every sample
    /// size at least 1 and every trial count at least 2.
    pub fn new(sample_sizes: Vec<usize>, trial_counts: Vec<usize>) -> Result<Self> {
        if sample_sizes.is_empty() {
            return Err(SimulationError::NoSampleSizes);
        }
        if trial_counts.is_empty() {
            return Err(SimulationError::NoTrialCounts);
        }
        for (i, &n) in sample_sizes.iter().enumerate() {
            if n == 0 {
                return Err(SimulationError::InvalidSampleSize(n));
            }
            if sample_sizes[..i].contains(&n) {
                return Err(SimulationError::DuplicateSampleSize(n));
            }
        }
        for (i, &t) in trial_counts.iter().enumerate() {
            if t < 2 {
                return Err(SimulationError::InvalidTrialCount(t));
            }
            if trial_counts[..i].contains(&t) {
                return Err(SimulationError::DuplicateTrialCount(t));
            }
        }
        Ok(Self {
            sample_sizes,
            trial_counts,
        })
    }

    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    pub fn trial_counts(&self) -> &[usize] {
        &self.trial_counts
    }

    /// Number of `(sample_size, trial_count)` pairs
    pub fn pair_count(&self) -> usize {
        self.sample_sizes.len() * self.trial_counts.len()
    }

    /// Total number of trials across all pairs
    pub fn total_trials(&self) -> usize {
        self.sample_sizes.len() * self.trial_counts.iter().sum::<usize>()
    }

    /// Pairs in row-major order (sample size outer, trial count inner)
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sample_sizes
            .iter()
            .flat_map(|&n| self.trial_counts.iter().map(move |&t| (n, t)))
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            trial_counts: DEFAULT_TRIAL_COUNTS.to_vec(),
        }
    }
}

/// Mean of one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    pub sample_size: usize,
    pub trial_count: usize,
    /// Position of this trial within its pair, starting at 0
    pub trial_index: usize,
    pub value: f64,
}

/// Spread of the sample means for one `(sample_size, trial_count)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSizeTrialSummary {
    pub sample_size: usize,
    pub trial_count: usize,
    /// Unbiased standard deviation of the trial means (empirical standard error)
    pub std_dev: f64,
    /// Mean of the trial means
    pub mean: f64,
}

/// Engine settings
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Process pairs on the rayon thread pool
    pub parallel: bool,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Everything one run of the engine produces
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    parameters: SimulationParameters,
    trials: Vec<TrialResult>,
    summaries: Vec<SampleSizeTrialSummary>,
}

impl SimulationResult {
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// All trials in tall form, grouped by pair in row-major order
    pub fn trials(&self) -> &[TrialResult] {
        &self.trials
    }

    /// One summary per pair, row-major
    pub fn summaries(&self) -> &[SampleSizeTrialSummary] {
        &self.summaries
    }

    /// Summary for a specific pair
    pub fn summary(&self, sample_size: usize, trial_count: usize) -> Option<&SampleSizeTrialSummary> {
        self.summaries
            .iter()
            .find(|s| s.sample_size == sample_size && s.trial_count == trial_count)
    }

    /// Trials of a specific pair
    pub fn trials_for(
        &self,
        sample_size: usize,
        trial_count: usize,
    ) -> impl Iterator<Item = &TrialResult> + '_ {
        self.trials
            .iter()
            .filter(move |r| r.sample_size == sample_size && r.trial_count == trial_count)
    }
}

/// Run the engine over every pair in `parameters`
pub fn run_simulation<R: RngCore + ?Sized>(
    population: &Population,
    parameters: &SimulationParameters,
    config: &SamplingConfig,
    rng: &mut R,
) -> Result<SimulationResult> {
    run_simulation_with_progress(population, parameters, config, rng, |_| {})
}

/// Run the engine, calling `on_pair` as each pair completes.
///
/// In parallel mode `on_pair` is invoked from worker threads in completion
/// order; the returned result is always in row-major order.
pub fn run_simulation_with_progress<R, F>(
    population: &Population,
    parameters: &SimulationParameters,
    config: &SamplingConfig,
    rng: &mut R,
    on_pair: F,
) -> Result<SimulationResult>
where
    R: RngCore + ?Sized,
    F: Fn(&SampleSizeTrialSummary) + Sync,
{
    let jobs: Vec<(usize, usize, u64)> = parameters
        .pairs()
        .map(|(n, t)| (n, t, rng.next_u64()))
        .collect();

    tracing::info!(
        pairs = jobs.len(),
        trials = parameters.total_trials(),
        population = population.len(),
        parallel = config.parallel,
        "running sampling simulation"
    );

    let run_pair = |&(n, t, seed): &(usize, usize, u64)| -> Result<PairOutcome> {
        let outcome = simulate_pair(population, n, t, seed)?;
        on_pair(&outcome.summary);
        Ok(outcome)
    };

    let outcomes: Vec<PairOutcome> = if config.parallel {
        jobs.par_iter().map(run_pair).collect::<Result<Vec<_>>>()?
    } else {
        jobs.iter().map(run_pair).collect::<Result<Vec<_>>>()?
    };

    let mut trials = Vec::with_capacity(parameters.total_trials());
    let mut summaries = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let (n, t) = (outcome.summary.sample_size, outcome.summary.trial_count);
        trials.extend(
            outcome
                .means
                .into_iter()
                .enumerate()
                .map(|(trial_index, value)| TrialResult {
                    sample_size: n,
                    trial_count: t,
                    trial_index,
                    value,
                }),
        );
        summaries.push(outcome.summary);
    }

    Ok(SimulationResult {
        parameters: parameters.clone(),
        trials,
        summaries,
    })
}

/// Draw `trials` samples of `sample_size` elements with replacement and return
/// the mean of each sample
///
/// # Errors
/// `InvalidSampleSize` when `sample_size` is zero.
pub fn sample_means<R: Rng + ?Sized>(
    population: &Population,
    sample_size: usize,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if sample_size == 0 {
        return Err(SimulationError::InvalidSampleSize(sample_size));
    }
    let values = population.values();
    Ok((0..trials)
        .map(|_| {
            let mut sum = 0.0;
            for _ in 0..sample_size {
                sum += values[rng.gen_range(0..values.len())];
            }
            sum / sample_size as f64
        })
        .collect())
}

struct PairOutcome {
    means: Vec<f64>,
    summary: SampleSizeTrialSummary,
}

fn simulate_pair(
    population: &Population,
    sample_size: usize,
    trial_count: usize,
    seed: u64,
) -> Result<PairOutcome> {
    let mut rng = StdRng::seed_from_u64(seed);
    let means = sample_means(population, sample_size, trial_count, &mut rng)?;
    let std_dev =
        sample_std_dev(&means).ok_or(SimulationError::InvalidTrialCount(trial_count))?;

    let summary = SampleSizeTrialSummary {
        sample_size,
        trial_count,
        std_dev,
        mean: mean(&means),
    };
    tracing::debug!(
        sample_size,
        trial_count,
        std_dev,
        mean = summary.mean,
        "pair complete"
    );

    Ok(PairOutcome { means, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::REFERENCE_COMPONENTS;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn small_population() -> Population {
        Population::from_values((0..100).map(|x| x as f64).collect()).unwrap()
    }

    #[test]
    fn test_parameters_validation() {
        assert_eq!(
            SimulationParameters::new(vec![], vec![10]),
            Err(SimulationError::NoSampleSizes)
        );
        assert_eq!(
            SimulationParameters::new(vec![1], vec![]),
            Err(SimulationError::NoTrialCounts)
        );
        assert_eq!(
            SimulationParameters::new(vec![1, 0], vec![10]),
            Err(SimulationError::InvalidSampleSize(0))
        );
        assert_eq!(
            SimulationParameters::new(vec![5, 5], vec![10]),
            Err(SimulationError::DuplicateSampleSize(5))
        );
        assert_eq!(
            SimulationParameters::new(vec![5], vec![10, 10]),
            Err(SimulationError::DuplicateTrialCount(10))
        );
    }

    #[test]
    fn test_single_trial_rejected() {
        assert_eq!(
            SimulationParameters::new(vec![1, 5], vec![10, 1]),
            Err(SimulationError::InvalidTrialCount(1))
        );
        assert_eq!(
            SimulationParameters::new(vec![1], vec![0]),
            Err(SimulationError::InvalidTrialCount(0))
        );
    }

    #[test]
    fn test_pairs_are_row_major() {
        let params = SimulationParameters::new(vec![1, 5], vec![10, 100, 1000]).unwrap();
        let pairs: Vec<_> = params.pairs().collect();
        assert_eq!(
            pairs,
            vec![(1, 10), (1, 100), (1, 1000), (5, 10), (5, 100), (5, 1000)]
        );
        assert_eq!(params.pair_count(), 6);
        assert_eq!(params.total_trials(), 2 * 1110);
    }

    #[test]
    fn test_default_parameters() {
        let params = SimulationParameters::default();
        assert_eq!(params.sample_sizes(), &[1, 5, 10, 30, 50, 100]);
        assert_eq!(params.trial_counts(), &[10, 100, 1000, 10000]);
    }

    #[test]
    fn test_result_counts() {
        let population = small_population();
        let params = SimulationParameters::new(vec![1, 3, 7], vec![2, 10, 25]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();

        assert_eq!(result.summaries().len(), 9);
        assert_eq!(result.trials().len(), 3 * (2 + 10 + 25));
        for (n, t) in params.pairs() {
            assert_eq!(result.trials_for(n, t).count(), t);
            let indices: Vec<_> = result.trials_for(n, t).map(|r| r.trial_index).collect();
            assert_eq!(indices, (0..t).collect::<Vec<_>>());
        }

        let order: Vec<_> = result
            .summaries()
            .iter()
            .map(|s| (s.sample_size, s.trial_count))
            .collect();
        assert_eq!(order, params.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn test_means_stay_within_population_range() {
        let population = small_population();
        let mut rng = StdRng::seed_from_u64(5);
        let means = sample_means(&population, 8, 500, &mut rng).unwrap();

        assert_eq!(means.len(), 500);
        assert!(means.iter().all(|m| (0.0..=99.0).contains(m)));
    }

    #[test]
    fn test_sample_means_rejects_zero_sample_size() {
        let population = small_population();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            sample_means(&population, 0, 10, &mut rng),
            Err(SimulationError::InvalidSampleSize(0))
        );
    }

    #[test]
    fn test_sample_size_larger_than_population() {
        let population = Population::from_values(vec![1.0, 3.0]).unwrap();
        let params = SimulationParameters::new(vec![10], vec![50]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(2),
        )
        .unwrap();

        assert_eq!(result.trials().len(), 50);
    }

    #[test]
    fn test_constant_population_has_zero_spread() {
        let population = Population::from_values(vec![4.0; 10]).unwrap();
        let params = SimulationParameters::new(vec![1, 5], vec![20]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(9),
        )
        .unwrap();

        for summary in result.summaries() {
            assert_eq!(summary.std_dev, 0.0);
            assert!((summary.mean - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_seed_is_idempotent() {
        let population = small_population();
        let params = SimulationParameters::new(vec![1, 10], vec![10, 100]).unwrap();
        let config = SamplingConfig::default();

        let a = run_simulation(&population, &params, &config, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = run_simulation(&population, &params, &config, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);

        let c = run_simulation(&population, &params, &config, &mut StdRng::seed_from_u64(43))
            .unwrap();
        assert_ne!(a.trials(), c.trials());
    }

    #[test]
    fn test_serial_matches_parallel() {
        let population = small_population();
        let params = SimulationParameters::new(vec![1, 5, 30], vec![10, 200]).unwrap();

        let parallel = run_simulation(
            &population,
            &params,
            &SamplingConfig { parallel: true },
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
        let serial = run_simulation(
            &population,
            &params,
            &SamplingConfig { parallel: false },
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_progress_called_once_per_pair() {
        let population = small_population();
        let params = SimulationParameters::new(vec![1, 2, 3], vec![5, 6]).unwrap();
        let calls = AtomicUsize::new(0);

        run_simulation_with_progress(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(1),
            |_| {
                calls.fetch_add(1, Ordering::Relaxed);
            },
        )
        .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_sample_size_one_reproduces_population_spread() {
        let mut rng = StdRng::seed_from_u64(7759);
        let population = Population::generate(&REFERENCE_COMPONENTS, &mut rng).unwrap();
        let params = SimulationParameters::new(vec![1], vec![10_000]).unwrap();
        let result =
            run_simulation(&population, &params, &SamplingConfig::default(), &mut rng).unwrap();

        let sd = result.summaries()[0].std_dev;
        assert!((sd / population.std_dev() - 1.0).abs() < 0.05);
    }
}
