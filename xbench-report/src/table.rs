//! Aligned Table Output
//!
//! Result row layout: name left-aligned in 35 columns, then mean, min, max and
//! stddev right-aligned in 12 columns with three decimals, each followed by
//! its unit suffix.

use xbench_core::BenchmarkResult;

/// Width of the left-aligned name column
pub const NAME_WIDTH: usize = 35;

/// Width of each numeric column in result rows
const VALUE_WIDTH: usize = 12;

/// Width of each column title in the summary header
const HEADER_WIDTH: usize = 15;

/// Length of the dashed rule under the summary header
pub const RULE_WIDTH: usize = 95;

/// Title line of the final summary
pub const SUMMARY_TITLE: &str = "=== Benchmark Summary ===";

/// Format one result row (no trailing newline)
pub fn format_row(result: &BenchmarkResult) -> String {
    let stats = result.summary();
    format!(
        "{:<name$}{:>w$.3} ms{:>w$.3} ms (min){:>w$.3} ms (max){:>w$.3} ms (std)",
        result.name(),
        stats.mean,
        stats.min,
        stats.max,
        stats.std_dev,
        name = NAME_WIDTH,
        w = VALUE_WIDTH,
    )
}

/// Format the summary column header and rule (two lines, no trailing newline)
pub fn format_header() -> String {
    format!(
        "{:<name$}{:>w$}{:>w$}{:>w$}{:>w$}\n{}",
        "Benchmark",
        "Avg",
        "Min",
        "Max",
        "Stddev",
        "-".repeat(RULE_WIDTH),
        name = NAME_WIDTH,
        w = HEADER_WIDTH,
    )
}

/// Format the final summary: title, header, rule and one row per result.
///
/// Rows appear in the order given; nothing is re-sorted.
pub fn format_summary(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(SUMMARY_TITLE);
    output.push_str("\n\n");
    output.push_str(&format_header());
    output.push('\n');

    for result in results {
        output.push_str(&format_row(result));
        output.push('\n');
    }

    output
}
