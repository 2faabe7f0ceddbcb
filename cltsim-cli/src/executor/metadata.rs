//! Report Metadata
//!
//! Captures the run configuration and basic system information for the JSON
//! report, so a saved report says how it was produced.

use super::execution::RunSettings;
use chrono::Utc;
use cltsim_report::{ComponentInfo, ReportConfig, ReportMeta, ReportSchema, SystemInfo};

/// Build report metadata for a run
pub fn build_report_meta(settings: &RunSettings) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema: ReportSchema::default(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            seed: settings.seed,
            sample_sizes: settings.parameters.sample_sizes().to_vec(),
            trial_counts: settings.parameters.trial_counts().to_vec(),
            parallel: settings.parallel,
            components: settings.components.iter().map(ComponentInfo::from).collect(),
        },
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}
