//! Report Building
//!
//! Converts the run's accumulated results into the machine-readable
//! [`Report`] used by JSON output.

use super::metadata::build_report_meta;
use xbench_core::{ResultLog, SamplingConfig};
use xbench_report::Report;

/// Build a complete report from the results of one run
pub fn build_report(results: &ResultLog, config: &SamplingConfig) -> Report {
    Report::new(build_report_meta(config), results.as_slice())
}
