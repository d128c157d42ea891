#![warn(missing_docs)]
//! # xbench
//!
//! Micro-benchmark harness for comparing the same semantic operations across
//! language implementations.
//!
//! - **Warmup-then-sample**: untimed warmup runs, then individually timed samples
//! - **Dead-code safe**: every workload result is consumed through `black_box`
//! - **Plain statistics**: mean, min, max, Bessel-corrected stddev, per-iteration cost
//! - **Fixed battery**: arithmetic, containers, text, key-value parsing, iteration,
//!   function calls and object field access
//!
//! ## Quick Start
//!
//! ```no_run
//! use xbench::{Sampler, SamplingConfig, Workload};
//!
//! let sampler = Sampler::new(SamplingConfig::default()).unwrap();
//! let mut workload = Workload::new("sum", "Sum (1k)", 1000, || (0..1000u64).sum::<u64>());
//! let result = sampler.measure(&mut workload).unwrap();
//! println!("{}", xbench::format_row(&result));
//! ```

// Re-export core types
pub use xbench_core::{
    BenchmarkResult, Clock, FixedClock, HarnessError, MonotonicClock, Phase, ResultLog, Sampler,
    SamplingConfig, Workload, WorkloadError, run_sampling,
};

// Re-export stats
pub use xbench_stats::{SummaryStatistics, compute_summary, per_iteration_cost};

// Re-export reporting
pub use xbench_report::{OutputFormat, format_row, format_summary};

// Re-export the workload battery
pub use xbench_workloads::{KvScanner, standard_workloads};

/// Run the xbench CLI harness.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() {
///     xbench::run().unwrap();
/// }
/// ```
pub use xbench_cli::run;
