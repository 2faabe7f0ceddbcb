#![warn(missing_docs)]
//! cltsim CLI Library
//!
//! Command-line runner for the Central Limit Theorem simulation. Settings are
//! layered: built-in defaults, then `cltsim.toml`, then command-line flags.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     cltsim_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    EXPORT_FILES, RunOutcome, RunSettings, build_report_meta, execute_run, export_csv,
    format_human_output,
};

use clap::{Parser, Subcommand};
use cltsim_report::{OutputFormat, Report, build_report, generate_csv_report, generate_json_report};
use rayon::ThreadPoolBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};

/// cltsim CLI arguments
#[derive(Parser, Debug)]
#[command(name = "cltsim")]
#[command(
    author,
    version,
    about = "cltsim - empirical Central Limit Theorem demonstration"
)]
pub struct Cli {
    /// Optional subcommand (Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (default: discover cltsim.toml upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated sample sizes, e.g. 1,5,10,30
    #[arg(long, value_delimiter = ',')]
    pub sample_sizes: Option<Vec<usize>>,

    /// Comma-separated trial counts, each at least 2, e.g. 10,100,1000
    #[arg(long, value_delimiter = ',')]
    pub trial_counts: Option<Vec<usize>>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write population.csv, trials.csv and comparison.csv into this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Decimal places for reported ratios
    #[arg(long)]
    pub decimals: Option<u32>,

    /// Process (sample size, trial count) pairs one after another
    #[arg(long)]
    pub serial: bool,

    /// Number of threads for parallel sampling
    /// 0 = use all available cores (default), 1 = single-threaded
    #[arg(long, short = 'j', default_value = "0")]
    pub threads: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the simulation (default)
    Run,
    /// Write a default cltsim.toml
    Init {
        /// Destination (prints to stdout if not specified)
        #[arg(name = "PATH")]
        path: Option<PathBuf>,
    },
}

/// Run the cltsim CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the cltsim CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging; a subscriber may already be installed by an embedding program
    let filter = if cli.verbose {
        "cltsim=debug,cltsim_stats=debug,cltsim_cli=debug"
    } else {
        "cltsim=info,cltsim_stats=info,cltsim_cli=info"
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Some(Commands::Init { ref path }) => init_config(path.as_deref()),
        Some(Commands::Run) | None => {
            let config = match cli.config {
                Some(ref path) => CltConfig::load(path)?,
                None => CltConfig::discover().unwrap_or_default(),
            };
            run_simulation(&cli, &config)
        }
    }
}

fn init_config(path: Option<&Path>) -> anyhow::Result<()> {
    let content = CltConfig::default_toml();
    match path {
        Some(path) => {
            if path.exists() {
                return Err(anyhow::anyhow!(
                    "Refusing to overwrite existing file: {}",
                    path.display()
                ));
            }
            std::fs::write(path, content)?;
            println!("Configuration written to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Build RunSettings by layering: cltsim.toml values → CLI overrides.
pub fn build_run_settings(cli: &Cli, config: &CltConfig) -> anyhow::Result<RunSettings> {
    let mut simulation = config.simulation.clone();
    if let Some(seed) = cli.seed {
        simulation.seed = seed;
    }
    if let Some(ref sizes) = cli.sample_sizes {
        simulation.sample_sizes = sizes.clone();
    }
    if let Some(ref counts) = cli.trial_counts {
        simulation.trial_counts = counts.clone();
    }

    let config = CltConfig {
        simulation,
        ..config.clone()
    };

    Ok(RunSettings {
        seed: config.simulation.seed,
        components: config.components(),
        parameters: config.parameters()?,
        parallel: config.simulation.parallel && !cli.serial,
        decimals: cli.decimals.unwrap_or(config.output.decimals),
        show_progress: !cli.quiet,
    })
}

fn run_simulation(cli: &Cli, config: &CltConfig) -> anyhow::Result<()> {
    // Configure Rayon thread pool for parallel sampling
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let format_str = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = format_str.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = build_run_settings(cli, config)?;
    let params = &settings.parameters;
    eprintln!(
        "Running {} pairs ({} trials) with seed {}{}...\n",
        params.pair_count(),
        params.total_trials(),
        settings.seed,
        if settings.parallel { "" } else { " (serial)" }
    );

    let outcome = execute_run(&settings)?;
    tracing::info!(duration_ms = outcome.duration_ms, "simulation finished");

    let report = build_report(
        build_report_meta(&settings),
        &outcome.population,
        &outcome.result,
        &outcome.table,
        settings.decimals,
    );

    let output = render(&report, format)?;
    let export_dir = cli
        .export_dir
        .clone()
        .or_else(|| config.output.export_dir.as_ref().map(PathBuf::from));
    emit_outputs(
        &output,
        cli.output.as_deref(),
        export_dir.as_deref(),
        &outcome,
        &report,
        &mut std::io::stdout().lock(),
    )
}

/// Write the rendered report to `path` or `stdout`, then export CSV tables.
/// Status lines go to stderr so `stdout` carries only the report.
fn emit_outputs<W: Write>(
    rendered: &str,
    path: Option<&Path>,
    export_dir: Option<&Path>,
    outcome: &RunOutcome,
    report: &Report,
    stdout: &mut W,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, rendered)?;
            eprintln!("Report written to: {}", path.display());
        }
        None => stdout.write_all(rendered.as_bytes())?,
    }

    if let Some(dir) = export_dir {
        for path in export_csv(dir, outcome, report)? {
            eprintln!("Exported: {}", path.display());
        }
    }

    Ok(())
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Human => format_human_output(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cltsim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_defaults_follow_config() {
        let cli = parse(&[]);
        let settings = build_run_settings(&cli, &CltConfig::default()).unwrap();

        assert_eq!(settings.seed, 7759);
        assert_eq!(settings.parameters.sample_sizes(), &[1, 5, 10, 30, 50, 100]);
        assert!(settings.parallel);
        assert_eq!(settings.decimals, 3);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&[
            "--seed",
            "42",
            "--sample-sizes",
            "2,4",
            "--trial-counts",
            "10,20,30",
            "--serial",
            "--decimals",
            "2",
        ]);
        let settings = build_run_settings(&cli, &CltConfig::default()).unwrap();

        assert_eq!(settings.seed, 42);
        assert_eq!(settings.parameters.sample_sizes(), &[2, 4]);
        assert_eq!(settings.parameters.trial_counts(), &[10, 20, 30]);
        assert!(!settings.parallel);
        assert_eq!(settings.decimals, 2);
    }

    #[test]
    fn test_single_trial_rejected_from_cli() {
        let cli = parse(&["--trial-counts", "1,10"]);
        assert!(build_run_settings(&cli, &CltConfig::default()).is_err());
    }

    #[test]
    fn test_stdout_holds_only_the_report_when_exporting() {
        let cli = parse(&["--sample-sizes", "1,4", "--trial-counts", "5,20", "--quiet"]);
        let settings = build_run_settings(&cli, &CltConfig::default()).unwrap();
        let outcome = execute_run(&settings).unwrap();
        let report = build_report(
            build_report_meta(&settings),
            &outcome.population,
            &outcome.result,
            &outcome.table,
            settings.decimals,
        );
        let rendered = render(&report, OutputFormat::Json).unwrap();

        let dir = std::env::temp_dir().join(format!("cltsim-emit-{}", std::process::id()));
        let mut stdout = Vec::new();
        emit_outputs(&rendered, None, Some(&dir), &outcome, &report, &mut stdout).unwrap();

        let printed = String::from_utf8(stdout).unwrap();
        assert_eq!(printed, rendered);
        let json: serde_json::Value = serde_json::from_str(&printed).unwrap();
        assert_eq!(json["comparison"]["ratios"].as_array().unwrap().len(), 2);
        assert!(dir.join("comparison.csv").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_init_subcommand_parses() {
        let cli = parse(&["init", "my.toml"]);
        match cli.command {
            Some(Commands::Init { path }) => assert_eq!(path, Some(PathBuf::from("my.toml"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
