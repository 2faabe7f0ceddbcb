//! cltsim Demo
//!
//! Runs the reference experiment through the library API and prints how the
//! spread of sample means shrinks with the sample size.
//!
//! Run with:
//!   cargo run --example clt_demo
//!   cargo run --example clt_demo -- 1234      # different seed

use cltsim::{
    DEFAULT_SEED, REPORT_DECIMALS, RunSettings, execute_run, round_to, standard_errors,
};

fn main() -> anyhow::Result<()> {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(DEFAULT_SEED);

    let settings = RunSettings {
        seed,
        ..Default::default()
    };
    let outcome = execute_run(&settings)?;
    let sigma = outcome.population.std_dev();

    println!(
        "population: {} values, mean {:.3}, std dev {:.3}",
        outcome.population.len(),
        outcome.population.mean(),
        sigma
    );

    let sizes = settings.parameters.sample_sizes();
    let largest_trials = settings
        .parameters
        .trial_counts()
        .iter()
        .copied()
        .max()
        .unwrap_or(0);

    println!("\n{:>6}  {:>12}  {:>12}  {:>10}", "n", "sigma/sqrt(n)", "empirical", "ratio-1");
    for (n, se) in sizes.iter().zip(standard_errors(sigma, sizes)?) {
        if let Some(summary) = outcome.result.summary(*n, largest_trials) {
            println!(
                "{:>6}  {:>12.4}  {:>12.4}  {:>10}",
                n,
                se,
                summary.std_dev,
                round_to(summary.std_dev / se - 1.0, REPORT_DECIMALS)
            );
        }
    }

    Ok(())
}
