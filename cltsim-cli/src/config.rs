//! Configuration loading from cltsim.toml
//!
//! The simulation can be configured with a `cltsim.toml` file in the project
//! root. The file is discovered by walking up from the current directory;
//! command-line flags override anything it sets.

use cltsim_stats::{
    Component, DEFAULT_SAMPLE_SIZES, DEFAULT_SEED, DEFAULT_TRIAL_COUNTS, REFERENCE_COMPONENTS,
    REPORT_DECIMALS, SimulationParameters,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the discovered configuration file
pub const CONFIG_FILE_NAME: &str = "cltsim.toml";

/// cltsim configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CltConfig {
    /// Sampling parameters
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Population mixture
    #[serde(default)]
    pub population: PopulationConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sampling parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the population and all sampling substreams
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Sample sizes, one table row each
    #[serde(default = "default_sample_sizes")]
    pub sample_sizes: Vec<usize>,
    /// Trial counts, one table column each (each at least 2)
    #[serde(default = "default_trial_counts")]
    pub trial_counts: Vec<usize>,
    /// Process pairs on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            sample_sizes: default_sample_sizes(),
            trial_counts: default_trial_counts(),
            parallel: default_parallel(),
        }
    }
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_sample_sizes() -> Vec<usize> {
    DEFAULT_SAMPLE_SIZES.to_vec()
}
fn default_trial_counts() -> Vec<usize> {
    DEFAULT_TRIAL_COUNTS.to_vec()
}
fn default_parallel() -> bool {
    true
}

/// Population mixture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Normal sub-populations, concatenated in order
    #[serde(default = "default_components")]
    pub components: Vec<ComponentConfig>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            components: default_components(),
        }
    }
}

fn default_components() -> Vec<ComponentConfig> {
    REFERENCE_COMPONENTS
        .iter()
        .map(|c| ComponentConfig {
            count: c.count,
            mean: c.mean,
            std_dev: c.std_dev,
        })
        .collect()
}

/// One normal sub-population
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Number of draws
    pub count: usize,
    /// Mean of the distribution
    pub mean: f64,
    /// Standard deviation of the distribution
    pub std_dev: f64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// Decimal places for reported ratios
    #[serde(default = "default_decimals")]
    pub decimals: u32,
    /// Directory for population/trials/comparison CSV exports
    #[serde(default)]
    pub export_dir: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            decimals: default_decimals(),
            export_dir: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_decimals() -> u32 {
    REPORT_DECIMALS
}

impl CltConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Population components as engine input
    pub fn components(&self) -> Vec<Component> {
        self.population
            .components
            .iter()
            .map(|c| Component::new(c.count, c.mean, c.std_dev))
            .collect()
    }

    /// Validated sampling parameters
    pub fn parameters(&self) -> anyhow::Result<SimulationParameters> {
        Ok(SimulationParameters::new(
            self.simulation.sample_sizes.clone(),
            self.simulation.trial_counts.clone(),
        )?)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# cltsim Configuration

[simulation]
# Seed for the population and every sampling substream
seed = 7759
# Sample sizes (table rows)
sample_sizes = [1, 5, 10, 30, 50, 100]
# Trial counts (table columns, each at least 2)
trial_counts = [10, 100, 1000, 10000]
# Process (sample size, trial count) pairs in parallel
parallel = true

# Normal sub-populations, concatenated in order
[[population.components]]
count = 20000
mean = 10.0
std_dev = 3.0

[[population.components]]
count = 80000
mean = 70.0
std_dev = 10.0

[output]
# Default output format: human, json, csv
format = "human"
# Decimal places for reported ratios
decimals = 3
# Directory for population.csv, trials.csv and comparison.csv (uncomment to enable)
# export_dir = "target/cltsim"
"#
        .to_string()
    }
}
