//! Summary Statistics
//!
//! Reduces a sample sequence (fractional milliseconds) into the four metrics
//! the reporter prints. Nothing is filtered: every sample contributes to every
//! metric.

use crate::MICROS_PER_MILLI;
use serde::{Deserialize, Serialize};

/// Summary statistics for one sample sequence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Sample standard deviation (divisor `n - 1`)
    pub std_dev: f64,
    /// Number of samples the summary was computed from
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Mean cost of one logical work unit, in microseconds
    pub fn per_iteration_cost(&self, iterations: u64) -> f64 {
        per_iteration_cost(self.mean, iterations)
    }
}

/// Compute all summary metrics in one call
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    SummaryStatistics {
        mean: mean(samples),
        min: min(samples),
        max: max(samples),
        std_dev: std_dev(samples),
        sample_count: samples.len(),
    }
}

/// Smallest sample, or 0 for an empty sequence
pub fn min(samples: &[f64]) -> f64 {
    samples
        .iter()
        .copied()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0)
}

/// Largest sample, or 0 for an empty sequence
pub fn max(samples: &[f64]) -> f64 {
    samples
        .iter()
        .copied()
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0)
}

/// Arithmetic mean, or 0 for an empty sequence
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation, or 0 with fewer than 2 samples
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean = mean(samples);
    let variance =
        samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}

/// Normalize a mean sample time (ms) to microseconds per logical iteration.
///
/// `iterations` is clamped to 1 so a misdeclared workload cannot divide by zero.
pub fn per_iteration_cost(mean_ms: f64, iterations: u64) -> f64 {
    (mean_ms * MICROS_PER_MILLI) / iterations.max(1) as f64
}
