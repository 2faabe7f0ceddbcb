//! Report Data Structures

use crate::json::ReportSchema;
use chrono::{DateTime, Utc};
use cltsim_stats::{ComparisonTable, Component, Population, SimulationResult};
use serde::{Deserialize, Serialize};

/// Version of the JSON layout below
pub const SCHEMA_VERSION: u32 = 1;

/// Complete simulation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub population: PopulationInfo,
    pub summaries: Vec<PairSummary>,
    pub comparison: ComparisonGrid,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema: ReportSchema,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub system: SystemInfo,
    pub config: ReportConfig,
}

/// Simulation configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub seed: u64,
    pub sample_sizes: Vec<usize>,
    pub trial_counts: Vec<usize>,
    pub parallel: bool,
    pub components: Vec<ComponentInfo>,
}

/// One normal sub-population of the mixture
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl From<&Component> for ComponentInfo {
    fn from(component: &Component) -> Self {
        Self {
            count: component.count,
            mean: component.mean,
            std_dev: component.std_dev,
        }
    }
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: u32,
}

/// True moments of the generated population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationInfo {
    pub size: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&Population> for PopulationInfo {
    fn from(population: &Population) -> Self {
        let summary = population.summary();
        Self {
            size: population.len(),
            mean: population.mean(),
            std_dev: population.std_dev(),
            min: summary.min,
            max: summary.max,
        }
    }
}

/// Per-pair result, unrounded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairSummary {
    pub sample_size: usize,
    pub trial_count: usize,
    /// Mean of the sample means; approaches the population mean
    pub mean_of_means: f64,
    pub empirical_std_dev: f64,
    /// `sigma / sqrt(sample_size)`
    pub standard_error: f64,
    pub ratio_minus_one: f64,
}

/// Sample-size by trial-count grid of rounded ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonGrid {
    /// Row labels
    pub sample_sizes: Vec<usize>,
    /// Column labels
    pub trial_counts: Vec<usize>,
    pub decimals: u32,
    /// `ratios[row][column]`
    pub ratios: Vec<Vec<f64>>,
}

/// Assemble a report from the outputs of one run
pub fn build_report(
    meta: ReportMeta,
    population: &Population,
    result: &SimulationResult,
    table: &ComparisonTable,
    decimals: u32,
) -> Report {
    // Both sequences are row-major over the same parameters
    let summaries = table
        .cells()
        .iter()
        .zip(result.summaries())
        .map(|(cell, summary)| PairSummary {
            sample_size: cell.sample_size,
            trial_count: cell.trial_count,
            mean_of_means: summary.mean,
            empirical_std_dev: cell.empirical_std_dev,
            standard_error: cell.standard_error,
            ratio_minus_one: cell.ratio_minus_one,
        })
        .collect();

    Report {
        meta,
        population: PopulationInfo::from(population),
        summaries,
        comparison: ComparisonGrid {
            sample_sizes: table.sample_sizes().to_vec(),
            trial_counts: table.trial_counts().to_vec(),
            decimals,
            ratios: table.rounded_grid(decimals),
        },
    }
}
