//! Benchmark Executor
//!
//! Drives the sampler over the selected workloads in declared order and
//! streams progress to an output writer.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Workload (declared order)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Warmup → Sampling → row per workload
//! └──────┬──────┘
//!        │  ResultLog (append-only)
//!        ▼
//! ┌─────────────┐
//! │   summary   │  Same rows again, same order
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Optional CSV / JSON document
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Per-workload execution and the final summary
//! - [`formatting`] - Preamble and progress lines
//! - [`report`] - JSON report assembly
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;

pub use execution::{ExecutionError, Executor};
pub use formatting::{format_preamble, format_progress};
pub use metadata::build_report_meta;
pub use report::build_report;
