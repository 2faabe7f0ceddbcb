//! Summary Statistics
//!
//! Descriptive statistics shared by the population generator and the sampling
//! engine. The population's own standard deviation and the spread of sample
//! means go through the same unbiased formula (divide by `n - 1`), so the
//! comparator divides like by like.

/// Descriptive statistics for a sequence of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub mean: f64,
    /// Unbiased sample standard deviation (0.0 when fewer than 2 values)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Arithmetic mean, or 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample standard deviation.
///
/// Returns `None` for fewer than two values, where the `n - 1` divisor is zero.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Compute summary statistics over all values
pub fn compute_summary(values: &[f64]) -> SummaryStatistics {
    if values.is_empty() {
        return SummaryStatistics {
            mean: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            count: 0,
        };
    }

    let min = values
        .iter()
        .cloned()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);
    let max = values
        .iter()
        .cloned()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);

    SummaryStatistics {
        mean: mean(values),
        std_dev: sample_std_dev(values).unwrap_or(0.0),
        min,
        max,
        count: values.len(),
    }
}

impl SummaryStatistics {
    /// Distance between the largest and smallest value
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let summary = compute_summary(&values);

        assert!((summary.mean - 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.count, 5);
        assert!((summary.range() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_std_dev_divides_by_n_minus_one() {
        // Sum of squared deviations is 32; 32 / 7 under the unbiased formula
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_undefined_below_two_values() {
        assert_eq!(sample_std_dev(&[]), None);
        assert_eq!(sample_std_dev(&[42.0]), None);
        assert_eq!(sample_std_dev(&[1.0, 1.0]), Some(0.0));
    }

    #[test]
    fn test_empty_values() {
        let summary = compute_summary(&[]);

        assert_eq!(summary.count, 0);
        assert!((summary.mean - 0.0).abs() < f64::EPSILON);
        assert!((mean(&[]) - 0.0).abs() < f64::EPSILON);
    }
}
