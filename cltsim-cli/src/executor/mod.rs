//! Simulation Executor
//!
//! Runs the simulation and turns its outputs into something to show or save.
//!
//! ## Pipeline Overview
//!
//! ```text
//! RunSettings
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Population -> sampling engine -> comparator
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  metadata   │  Seed, parameters, system info for the report
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! │ export      │  CSV files for external plotting
//! └─────────────┘
//! ```

mod execution;
mod export;
mod formatting;
mod metadata;

pub use execution::{RunOutcome, RunSettings, execute_run};
pub use export::{EXPORT_FILES, export_csv};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
