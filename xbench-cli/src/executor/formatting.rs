//! Output Formatting
//!
//! Lines the executor writes around the result table: the run preamble and
//! the per-workload progress line.

use xbench_core::SamplingConfig;

/// Tool banner printed before the first workload
pub const BANNER: &str = "Rust Benchmark Tool";

/// Format the run preamble: banner, underline and sampling configuration
pub fn format_preamble(config: &SamplingConfig) -> String {
    format!(
        "{}\n{}\n\nConfiguration: {} samples, {} warmup runs\n\n",
        BANNER,
        "=".repeat(BANNER.len()),
        config.samples,
        config.warmup
    )
}

/// Format the line announcing a workload (no trailing newline)
pub fn format_progress(title: &str) -> String {
    format!("Running: {}...", title)
}
