//! Output Formatting
//!
//! Human-readable output for a simulation report:
//! - Population size and true moments
//! - Mean of the sample means per pair, next to the population mean
//! - The comparison grid of `empirical / theoretical - 1`, one row per sample size

use cltsim_report::Report;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("cltsim Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let pop = &report.population;
    output.push_str(&format!(
        "Population: {} values  mean: {:.3}  std dev: {:.3}\n",
        pop.size, pop.mean, pop.std_dev
    ));
    output.push_str(&format!(
        "            min: {:.3}  max: {:.3}  seed: {}\n\n",
        pop.min, pop.max, report.meta.config.seed
    ));

    // Sampling distribution centers
    output.push_str("Mean of sample means\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  {:>8}  {:>10}  {:>12}  {:>12}\n",
        "n", "trials", "mean", "std error"
    ));
    for entry in &report.summaries {
        output.push_str(&format!(
            "  {:>8}  {:>10}  {:>12.3}  {:>12.4}\n",
            entry.sample_size, entry.trial_count, entry.mean_of_means, entry.empirical_std_dev
        ));
    }
    output.push('\n');

    // Comparison grid
    let grid = &report.comparison;
    output.push_str("Empirical / theoretical standard error - 1\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');

    let width = grid
        .trial_counts
        .iter()
        .map(|t| t.to_string().len())
        .max()
        .unwrap_or(0)
        .max(grid.decimals as usize + 3);

    output.push_str(&format!("  {:>8}", "n \\ t"));
    for t in &grid.trial_counts {
        output.push_str(&format!("  {:>width$}", t, width = width));
    }
    output.push('\n');

    for (n, row) in grid.sample_sizes.iter().zip(&grid.ratios) {
        output.push_str(&format!("  {:>8}", n));
        for value in row {
            output.push_str(&format!(
                "  {:>width$.prec$}",
                value,
                width = width,
                prec = grid.decimals as usize
            ));
        }
        output.push('\n');
    }

    output.push('\n');
    output
}
