//! Simulation errors
//!
//! Every variant describes a configuration bug. The simulation is deterministic
//! for a given seed, so nothing here is retried: callers get the error before any
//! partial result exists.

use thiserror::Error;

/// Errors raised while building a population or validating simulation parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("At least one population component is required")]
    NoComponents,

    #[error("Population component {index} has a non-positive count")]
    EmptyComponent { index: usize },

    #[error("Population component {index} is invalid: mean={mean}, std_dev={std_dev}")]
    InvalidComponent {
        index: usize,
        mean: f64,
        std_dev: f64,
    },

    #[error("Population needs at least 2 values, got {0}")]
    PopulationTooSmall(usize),

    #[error("Population value at index {0} is not finite")]
    NonFiniteValue(usize),

    #[error("Sample sizes must not be empty")]
    NoSampleSizes,

    #[error("Trial counts must not be empty")]
    NoTrialCounts,

    #[error("Sample size must be at least 1, got {0}")]
    InvalidSampleSize(usize),

    #[error("Trial count must be at least 2 to compute a standard deviation, got {0}")]
    InvalidTrialCount(usize),

    #[error("Sample size {0} is listed more than once")]
    DuplicateSampleSize(usize),

    #[error("Trial count {0} is listed more than once")]
    DuplicateTrialCount(usize),

    #[error("Population standard deviation must be positive and finite, got {0}")]
    InvalidStdDev(f64),
}

/// Result alias for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
