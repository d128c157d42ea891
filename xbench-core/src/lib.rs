#![warn(missing_docs)]
//! xbench Core - Measurement Harness
//!
//! This crate provides the parts of the harness that make timings comparable:
//! - `Workload`: type-erased zero-argument body with a declared iteration count
//! - `Sampler`: warmup-then-sample protocol on a monotonic clock
//! - `BenchmarkResult` / `ResultLog`: per-workload samples and the run's accumulator
//! - `Clock`: time source abstraction with a fixed clock for deterministic runs

mod error;
mod measure;
mod result;
mod sampler;
mod workload;

pub use error::{HarnessError, Phase, WorkloadError};
pub use measure::{Clock, FixedClock, MonotonicClock, Timer, duration_to_millis};
pub use result::{BenchmarkResult, ResultLog};
pub use sampler::{DEFAULT_SAMPLES, DEFAULT_WARMUP, Sampler, SamplingConfig, run_sampling};
pub use workload::Workload;
