//! CSV Export
//!
//! Writes the three core outputs into a directory for external plotting:
//! `population.csv`, `trials.csv` (tall form) and `comparison.csv`.

use super::execution::RunOutcome;
use cltsim_report::{Report, generate_csv_report, write_population_csv, write_trials_csv};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File names written by [`export_csv`]
pub const EXPORT_FILES: [&str; 3] = ["population.csv", "trials.csv", "comparison.csv"];

/// Export population, trials and comparison grid as CSV files in `dir`
///
/// Creates `dir` if needed and returns the written paths.
pub fn export_csv(dir: &Path, outcome: &RunOutcome, report: &Report) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let [population_name, trials_name, comparison_name] = EXPORT_FILES;

    let population_path = dir.join(population_name);
    write_population_csv(
        outcome.population.values(),
        BufWriter::new(File::create(&population_path)?),
    )?;

    let trials_path = dir.join(trials_name);
    write_trials_csv(
        outcome.result.trials(),
        BufWriter::new(File::create(&trials_path)?),
    )?;

    let comparison_path = dir.join(comparison_name);
    std::fs::write(&comparison_path, generate_csv_report(report))?;

    tracing::info!(dir = %dir.display(), "exported CSV files");
    Ok(vec![population_path, trials_path, comparison_path])
}
