//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use xbench_core::BenchmarkResult;
use xbench_stats::SummaryStatistics;

/// Version of the JSON report layout
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Complete machine-readable report of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// One entry per workload, in execution order
    pub results: Vec<BenchmarkReportResult>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Layout version, see [`REPORT_SCHEMA_VERSION`]
    pub schema_version: u32,
    /// xbench version
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Host the run executed on
    pub system: SystemInfo,
    /// Sampling parameters of the run
    pub config: ReportConfig,
}

/// Sampling configuration captured in report metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Timed samples per workload
    pub samples: usize,
    /// Untimed warmup runs per workload
    pub warmup: usize,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Number of CPU cores
    pub cpu_cores: u32,
}

/// Individual workload result in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReportResult {
    /// Workload display name
    pub name: String,
    /// Declared logical work units per invocation
    pub iterations: u64,
    /// Timing metrics
    pub metrics: BenchmarkMetrics,
}

/// Timing metrics, all derived from the recorded samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Number of timed samples
    pub samples: usize,
    /// Mean sample time (ms)
    pub mean_ms: f64,
    /// Fastest sample (ms)
    pub min_ms: f64,
    /// Slowest sample (ms)
    pub max_ms: f64,
    /// Sample standard deviation (ms)
    pub std_dev_ms: f64,
    /// Mean cost of one logical iteration (µs)
    pub per_iteration_us: f64,
    /// Raw sample timings (ms)
    pub samples_ms: Vec<f64>,
}

impl BenchmarkMetrics {
    /// Metrics from precomputed summary statistics and the raw samples
    pub fn from_summary(stats: &SummaryStatistics, iterations: u64, samples: &[f64]) -> Self {
        Self {
            samples: stats.sample_count,
            mean_ms: stats.mean,
            min_ms: stats.min,
            max_ms: stats.max,
            std_dev_ms: stats.std_dev,
            per_iteration_us: stats.per_iteration_cost(iterations),
            samples_ms: samples.to_vec(),
        }
    }
}

impl From<&BenchmarkResult> for BenchmarkReportResult {
    fn from(result: &BenchmarkResult) -> Self {
        Self {
            name: result.name().to_string(),
            iterations: result.iterations(),
            metrics: BenchmarkMetrics::from_summary(
                &result.summary(),
                result.iterations(),
                result.samples(),
            ),
        }
    }
}

impl Report {
    /// Assemble a report from results in declared order
    pub fn new(meta: ReportMeta, results: &[BenchmarkResult]) -> Self {
        Self {
            meta,
            results: results.iter().map(BenchmarkReportResult::from).collect(),
        }
    }
}
