//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the run report into machine-readable JSON format.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
