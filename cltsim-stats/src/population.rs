//! Population Generator
//!
//! Builds the synthetic population the simulation samples from: a mixture of
//! normal sub-populations, concatenated in component order. The reference
//! mixture is deliberately bimodal so the sample means visibly lose the shape
//! of the population as the sample size grows.
//!
//! The random generator is passed in by the caller; the same seed reproduces
//! the same population bit for bit.

use crate::error::{Result, SimulationError};
use crate::summary::{SummaryStatistics, compute_summary, mean, sample_std_dev};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// One normal sub-population of the mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    /// Number of draws
    pub count: usize,
    /// Mean of the normal distribution
    pub mean: f64,
    /// Standard deviation of the normal distribution
    pub std_dev: f64,
}

impl Component {
    pub const fn new(count: usize, mean: f64, std_dev: f64) -> Self {
        Self {
            count,
            mean,
            std_dev,
        }
    }
}

/// 20,000 draws from Normal(10, 3) followed by 80,000 draws from Normal(70, 10)
pub const REFERENCE_COMPONENTS: [Component; 2] = [
    Component::new(20_000, 10.0, 3.0),
    Component::new(80_000, 70.0, 10.0),
];

/// Immutable population with its true mean and standard deviation
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    values: Vec<f64>,
    mean: f64,
    std_dev: f64,
}

impl Population {
    /// Draw a mixture-of-normals population.
    ///
    /// Mean and standard deviation are computed over the combined sequence,
    /// not per component.
    ///
    /// # Errors
    /// Rejects an empty component list, zero counts, and non-finite or negative
    /// distribution parameters.
    pub fn generate<R: Rng + ?Sized>(components: &[Component], rng: &mut R) -> Result<Self> {
        if components.is_empty() {
            return Err(SimulationError::NoComponents);
        }

        let mut distributions = Vec::with_capacity(components.len());
        for (index, component) in components.iter().enumerate() {
            if component.count == 0 {
                return Err(SimulationError::EmptyComponent { index });
            }
            let invalid = SimulationError::InvalidComponent {
                index,
                mean: component.mean,
                std_dev: component.std_dev,
            };
            if !component.mean.is_finite()
                || !component.std_dev.is_finite()
                || component.std_dev < 0.0
            {
                return Err(invalid);
            }
            let normal = Normal::new(component.mean, component.std_dev).map_err(|_| invalid)?;
            distributions.push((component.count, normal));
        }

        let total: usize = components.iter().map(|c| c.count).sum();
        let mut values = Vec::with_capacity(total);
        for (count, normal) in &distributions {
            values.extend((0..*count).map(|_| normal.sample(rng)));
        }

        let population = Self::from_values(values)?;
        tracing::debug!(
            size = population.len(),
            mean = population.mean,
            std_dev = population.std_dev,
            "generated population"
        );
        Ok(population)
    }

    /// Wrap explicit values as a population.
    ///
    /// # Errors
    /// Needs at least two values, all finite.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(SimulationError::NonFiniteValue(index));
        }
        let std_dev =
            sample_std_dev(&values).ok_or(SimulationError::PopulationTooSmall(values.len()))?;
        let mean = mean(&values);
        Ok(Self {
            values,
            mean,
            std_dev,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects populations with fewer than two values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Mean, standard deviation and extremes of the population
    pub fn summary(&self) -> SummaryStatistics {
        compute_summary(&self.values)
    }
}
