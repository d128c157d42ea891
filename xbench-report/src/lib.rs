#![warn(missing_docs)]
//! xbench Report - Result Rendering
//!
//! Generates the harness output formats:
//! - Aligned text table (per-workload rows and the final summary)
//! - CSV (spreadsheet-compatible, includes per-iteration cost)
//! - JSON (machine-readable, with run metadata)
//!
//! Rendering only reads results; it never touches timing data.

mod csv;
mod json;
mod report;
mod table;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{
    BenchmarkMetrics, BenchmarkReportResult, REPORT_SCHEMA_VERSION, Report, ReportConfig,
    ReportMeta, SystemInfo,
};
pub use table::{
    NAME_WIDTH, RULE_WIDTH, SUMMARY_TITLE, format_header, format_row, format_summary,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned table only
    #[default]
    Human,
    /// Table followed by a CSV block
    Csv,
    /// Table followed by a JSON document
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" | "table" => Ok(OutputFormat::Human),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
