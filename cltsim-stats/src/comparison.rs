//! Standard Error Comparison
//!
//! Compares the empirical spread of the sample means against the theoretical
//! standard error `sigma / sqrt(n)`. Each cell of the resulting table holds
//! `empirical / theoretical - 1`, so a perfect match reads as zero.
//!
//! Values are stored unrounded; rounding to [`REPORT_DECIMALS`] only happens
//! when a grid is prepared for display.

use crate::error::{Result, SimulationError};
use crate::sampling::SimulationResult;

/// Decimal places used when reporting ratios
pub const REPORT_DECIMALS: u32 = 3;

/// Theoretical standard error of the mean for a sample of `sample_size`
pub fn standard_error(population_std_dev: f64, sample_size: usize) -> Result<f64> {
    if !population_std_dev.is_finite() || population_std_dev <= 0.0 {
        return Err(SimulationError::InvalidStdDev(population_std_dev));
    }
    if sample_size == 0 {
        return Err(SimulationError::InvalidSampleSize(sample_size));
    }
    Ok(population_std_dev / (sample_size as f64).sqrt())
}

/// Theoretical standard errors for each sample size, in input order
pub fn standard_errors(population_std_dev: f64, sample_sizes: &[usize]) -> Result<Vec<f64>> {
    sample_sizes
        .iter()
        .map(|&n| standard_error(population_std_dev, n))
        .collect()
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// One `(sample_size, trial_count)` cell of the comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonCell {
    pub sample_size: usize,
    pub trial_count: usize,
    /// Standard deviation of the sample means
    pub empirical_std_dev: f64,
    /// `sigma / sqrt(n)`
    pub standard_error: f64,
    /// `empirical_std_dev / standard_error - 1`
    pub ratio_minus_one: f64,
}

/// Sample-size by trial-count grid of ratios
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    sample_sizes: Vec<usize>,
    trial_counts: Vec<usize>,
    cells: Vec<ComparisonCell>,
}

/// Compare every summary of a simulation run against `sigma / sqrt(n)`
pub fn compare(population_std_dev: f64, result: &SimulationResult) -> Result<ComparisonTable> {
    let params = result.parameters();
    let errors = standard_errors(population_std_dev, params.sample_sizes())?;

    let cells = result
        .summaries()
        .iter()
        .map(|summary| -> Result<ComparisonCell> {
            let row = params
                .sample_sizes()
                .iter()
                .position(|&n| n == summary.sample_size)
                .ok_or(SimulationError::InvalidSampleSize(summary.sample_size))?;
            let standard_error = errors[row];
            Ok(ComparisonCell {
                sample_size: summary.sample_size,
                trial_count: summary.trial_count,
                empirical_std_dev: summary.std_dev,
                standard_error,
                ratio_minus_one: summary.std_dev / standard_error - 1.0,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComparisonTable {
        sample_sizes: params.sample_sizes().to_vec(),
        trial_counts: params.trial_counts().to_vec(),
        cells,
    })
}

impl ComparisonTable {
    /// Row labels
    pub fn sample_sizes(&self) -> &[usize] {
        &self.sample_sizes
    }

    /// Column labels
    pub fn trial_counts(&self) -> &[usize] {
        &self.trial_counts
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[ComparisonCell] {
        &self.cells
    }

    /// Number of sample sizes
    pub fn rows(&self) -> usize {
        self.sample_sizes.len()
    }

    /// Number of trial counts
    pub fn columns(&self) -> usize {
        self.trial_counts.len()
    }

    /// Unrounded ratio minus one for a pair
    pub fn get(&self, sample_size: usize, trial_count: usize) -> Option<f64> {
        self.cells
            .iter()
            .find(|c| c.sample_size == sample_size && c.trial_count == trial_count)
            .map(|c| c.ratio_minus_one)
    }

    /// Unrounded grid, `grid[row][column]`
    pub fn grid(&self) -> Vec<Vec<f64>> {
        self.cells
            .chunks(self.columns())
            .map(|row| row.iter().map(|c| c.ratio_minus_one).collect())
            .collect()
    }

    /// Grid rounded for display
    pub fn rounded_grid(&self, decimals: u32) -> Vec<Vec<f64>> {
        self.grid()
            .into_iter()
            .map(|row| row.into_iter().map(|v| round_to(v, decimals)).collect())
            .collect()
    }

    /// Ratios for one trial count, in sample-size order
    pub fn column(&self, trial_count: usize) -> Vec<f64> {
        self.cells
            .iter()
            .filter(|c| c.trial_count == trial_count)
            .map(|c| c.ratio_minus_one)
            .collect()
    }

    /// Mean absolute deviation from zero across one trial count
    pub fn column_mean_abs(&self, trial_count: usize) -> f64 {
        let column = self.column(trial_count);
        if column.is_empty() {
            return 0.0;
        }
        column.iter().map(|v| v.abs()).sum::<f64>() / column.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::Population;
    use crate::sampling::{SamplingConfig, SimulationParameters, run_simulation};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_standard_error() {
        assert!((standard_error(10.0, 1).unwrap() - 10.0).abs() < 1e-12);
        assert!((standard_error(10.0, 4).unwrap() - 5.0).abs() < 1e-12);
        assert!((standard_error(10.0, 100).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_standard_error_guards() {
        assert_eq!(
            standard_error(0.0, 5),
            Err(SimulationError::InvalidStdDev(0.0))
        );
        assert!(matches!(
            standard_error(f64::NAN, 5),
            Err(SimulationError::InvalidStdDev(_))
        ));
        assert_eq!(
            standard_error(1.0, 0),
            Err(SimulationError::InvalidSampleSize(0))
        );
    }

    #[test]
    fn test_standard_errors_keep_order() {
        let errors = standard_errors(6.0, &[9, 1, 4]).unwrap();
        assert_eq!(errors, vec![2.0, 6.0, 3.0]);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 3), 0.123);
        assert_eq!(round_to(-0.0456, 3), -0.046);
        assert_eq!(round_to(1.0005, 0), 1.0);
    }

    #[test]
    fn test_table_shape_and_values() {
        let population = Population::from_values((0..1000).map(|x| x as f64).collect()).unwrap();
        let params = SimulationParameters::new(vec![1, 4, 16], vec![50, 500]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(21),
        )
        .unwrap();

        let table = compare(population.std_dev(), &result).unwrap();
        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.cells().len(), 6);

        let grid = table.grid();
        assert_eq!(grid.len(), 3);
        assert!(grid.iter().all(|row| row.len() == 2));

        for cell in table.cells() {
            let summary = result.summary(cell.sample_size, cell.trial_count).unwrap();
            let expected =
                summary.std_dev / (population.std_dev() / (cell.sample_size as f64).sqrt()) - 1.0;
            assert!((cell.ratio_minus_one - expected).abs() < 1e-12);
            assert_eq!(table.get(cell.sample_size, cell.trial_count), Some(cell.ratio_minus_one));
        }

        assert_eq!(table.grid()[1][0], table.get(4, 50).unwrap());
        assert_eq!(table.column(500).len(), 3);
    }

    #[test]
    fn test_rounded_grid() {
        let population = Population::from_values((0..200).map(|x| x as f64).collect()).unwrap();
        let params = SimulationParameters::new(vec![2], vec![30]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();
        let table = compare(population.std_dev(), &result).unwrap();

        let raw = table.grid()[0][0];
        let rounded = table.rounded_grid(REPORT_DECIMALS)[0][0];
        assert!((raw - rounded).abs() <= 0.0005 + 1e-12);
        assert_eq!(rounded, round_to(rounded, REPORT_DECIMALS));
    }

    #[test]
    fn test_rejects_zero_sigma() {
        let population = Population::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        let params = SimulationParameters::new(vec![1], vec![10]).unwrap();
        let result = run_simulation(
            &population,
            &params,
            &SamplingConfig::default(),
            &mut StdRng::seed_from_u64(3),
        )
        .unwrap();

        assert_eq!(
            compare(0.0, &result),
            Err(SimulationError::InvalidStdDev(0.0))
        );
    }
}
