//! Benchmark Results
//!
//! A [`BenchmarkResult`] holds the timed samples of one workload. Only the
//! sampler appends to it; once the last sample is recorded it is read-only.
//! [`ResultLog`] accumulates completed results for one harness run.

use serde::Serialize;
use xbench_stats::SummaryStatistics;

/// Timed samples of one workload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    name: String,
    samples: Vec<f64>,
    iterations: u64,
}

impl BenchmarkResult {
    pub(crate) fn with_capacity(name: impl Into<String>, iterations: u64, capacity: usize) -> Self {
        Self {
            name: name.into(),
            samples: Vec::with_capacity(capacity),
            iterations,
        }
    }

    /// Build a completed result from an already measured sample sequence
    pub fn from_samples(name: impl Into<String>, samples: Vec<f64>, iterations: u64) -> Self {
        Self {
            name: name.into(),
            samples,
            iterations,
        }
    }

    #[inline]
    pub(crate) fn push_sample(&mut self, elapsed_ms: f64) {
        self.samples.push(elapsed_ms);
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sample timings in milliseconds, in execution order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Declared logical work-unit count
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Mean sample time (ms)
    pub fn mean(&self) -> f64 {
        xbench_stats::mean(&self.samples)
    }

    /// Fastest sample (ms)
    pub fn min(&self) -> f64 {
        xbench_stats::min(&self.samples)
    }

    /// Slowest sample (ms)
    pub fn max(&self) -> f64 {
        xbench_stats::max(&self.samples)
    }

    /// Sample standard deviation (ms)
    pub fn std_dev(&self) -> f64 {
        xbench_stats::std_dev(&self.samples)
    }

    /// Mean cost of one logical iteration (µs)
    pub fn per_iteration_us(&self) -> f64 {
        xbench_stats::per_iteration_cost(self.mean(), self.iterations)
    }

    /// All summary metrics at once
    pub fn summary(&self) -> SummaryStatistics {
        xbench_stats::compute_summary(&self.samples)
    }
}

/// Append-only list of completed results for one run, in execution order
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ResultLog {
    results: Vec<BenchmarkResult>,
}

impl ResultLog {
    /// Empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed result
    pub fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Most recently appended result
    pub fn last(&self) -> Option<&BenchmarkResult> {
        self.results.last()
    }

    /// Results in the order they were appended
    pub fn iter(&self) -> std::slice::Iter<'_, BenchmarkResult> {
        self.results.iter()
    }

    /// Results as a slice
    pub fn as_slice(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Number of completed results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no result has been recorded
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Consume the log
    pub fn into_vec(self) -> Vec<BenchmarkResult> {
        self.results
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a BenchmarkResult;
    type IntoIter = std::slice::Iter<'a, BenchmarkResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
