#![warn(missing_docs)]
//! xbench Statistics Aggregator
//!
//! Pure reductions over a sequence of sample timings:
//! - Extremes (min, max)
//! - Arithmetic mean
//! - Sample standard deviation (Bessel-corrected)
//! - Per-iteration cost normalization
//!
//! Every function is deterministic and recomputable from the samples alone.
//! Degenerate inputs (empty or single-sample sequences) yield zero rather
//! than an error.

mod summary;

pub use summary::{
    SummaryStatistics, compute_summary, max, mean, min, per_iteration_cost, std_dev,
};

/// Microseconds per millisecond, used when normalizing to per-iteration cost
pub const MICROS_PER_MILLI: f64 = 1000.0;
