//! JSON Output

use crate::report::{Report, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Schema information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Schema identifier
    pub schema: String,
    /// Schema version
    pub version: String,
}

impl Default for ReportSchema {
    fn default() -> Self {
        Self {
            schema: "cltsim-report".to_string(),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
