#![warn(missing_docs)]
//! cltsim Report - Output for the presentation layer
//!
//! Turns a finished simulation into output other tools can consume:
//! - JSON (machine-readable report with metadata)
//! - CSV of the comparison grid
//! - CSV exports of the raw population and the tall trial results, for
//!   histogram and density plotting outside this workspace

mod csv;
mod json;
mod report;

pub use csv::{generate_csv_report, write_population_csv, write_trials_csv};
pub use json::{ReportSchema, generate_json_report};
pub use report::{
    ComparisonGrid, ComponentInfo, PairSummary, PopulationInfo, Report, ReportConfig, ReportMeta,
    SCHEMA_VERSION, SystemInfo, build_report,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV of the comparison grid
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
