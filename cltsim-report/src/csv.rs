//! CSV Output
//!
//! Three tables, all with a header row:
//! - the rounded comparison grid (`sample_size` rows, one column per trial count)
//! - the raw population, one value per line
//! - the trial results in tall form, for faceted density plots

use crate::report::Report;
use cltsim_stats::TrialResult;
use std::io::{self, Write};

/// Comparison grid as CSV, one row per sample size
pub fn generate_csv_report(report: &Report) -> String {
    let grid = &report.comparison;
    let mut output = String::from("sample_size");
    for t in &grid.trial_counts {
        output.push_str(&format!(",trials_{}", t));
    }
    output.push('\n');

    for (n, row) in grid.sample_sizes.iter().zip(&grid.ratios) {
        output.push_str(&n.to_string());
        for value in row {
            output.push_str(&format!(",{:.*}", grid.decimals as usize, value));
        }
        output.push('\n');
    }
    output
}

/// Write the population as a single `value` column
pub fn write_population_csv<W: Write>(values: &[f64], mut writer: W) -> io::Result<()> {
    writeln!(writer, "value")?;
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

/// Write trial results in tall form
pub fn write_trials_csv<W: Write>(trials: &[TrialResult], mut writer: W) -> io::Result<()> {
    writeln!(writer, "sample_size,trial_count,trial_index,value")?;
    for trial in trials {
        writeln!(
            writer,
            "{},{},{},{}",
            trial.sample_size, trial.trial_count, trial.trial_index, trial.value
        )?;
    }
    writer.flush()
}
