//! Sampler - Warmup-then-Sample Protocol
//!
//! Each workload is invoked `warmup` times with results and timings discarded,
//! then `samples` times with each invocation individually timed. Invocations
//! are strictly sequential on the calling thread; nothing is logged or
//! allocated inside the timed region beyond what the workload itself does.

use crate::error::{HarnessError, Phase, WorkloadError};
use crate::measure::{Clock, MonotonicClock, Timer};
use crate::result::BenchmarkResult;
use crate::workload::Workload;
use std::hint::black_box;
use tracing::debug;

/// Default number of timed samples per workload
pub const DEFAULT_SAMPLES: usize = 10;

/// Default number of untimed warmup invocations per workload
pub const DEFAULT_WARMUP: usize = 3;

/// Sample and warmup counts applied to every workload in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Timed invocations (≥ 1)
    pub samples: usize,
    /// Untimed invocations before sampling
    pub warmup: usize,
}

impl SamplingConfig {
    /// Build a validated configuration
    pub fn new(samples: usize, warmup: usize) -> Result<Self, HarnessError> {
        let config = Self { samples, warmup };
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one sample will be taken
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::InvalidConfig {
                field: "samples",
                minimum: 1,
                value: 0,
            });
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            warmup: DEFAULT_WARMUP,
        }
    }
}

/// Runs workloads under one clock and one sampling configuration
#[derive(Debug, Clone)]
pub struct Sampler<C: Clock = MonotonicClock> {
    clock: C,
    config: SamplingConfig,
}

impl Sampler<MonotonicClock> {
    /// Sampler on the monotonic wall clock
    pub fn new(config: SamplingConfig) -> Result<Self, HarnessError> {
        Self::with_clock(MonotonicClock, config)
    }
}

impl<C: Clock> Sampler<C> {
    /// Sampler on a caller-supplied clock
    pub fn with_clock(clock: C, config: SamplingConfig) -> Result<Self, HarnessError> {
        config.validate()?;
        Ok(Self { clock, config })
    }

    /// Active configuration
    pub fn config(&self) -> SamplingConfig {
        self.config
    }

    /// Measure one registered workload
    pub fn measure(&self, workload: &mut Workload) -> Result<BenchmarkResult, HarnessError> {
        let name = workload.name().to_string();
        let iterations = workload.iterations();
        run_sampling(
            &self.clock,
            &name,
            || workload.run_once(),
            self.config.samples,
            self.config.warmup,
            iterations,
        )
    }
}

/// Run the full protocol: `warmup` discarded calls, then `samples` timed calls.
///
/// The workload's return value is consumed through `black_box` in both phases.
/// The first error aborts the protocol; no partial result is returned.
///
/// # Arguments
/// * `clock` - Time source for the timed phase
/// * `name` - Display label of the result
/// * `workload` - Zero-argument body under test
/// * `samples` - Timed invocations (≥ 1)
/// * `warmup` - Untimed invocations
/// * `iterations` - Logical work units per invocation (≥ 1), used for normalization only
pub fn run_sampling<C, F, T, E>(
    clock: &C,
    name: &str,
    mut workload: F,
    samples: usize,
    warmup: usize,
    iterations: u64,
) -> Result<BenchmarkResult, HarnessError>
where
    C: Clock,
    F: FnMut() -> Result<T, E>,
    E: Into<WorkloadError>,
{
    SamplingConfig { samples, warmup }.validate()?;
    if iterations == 0 {
        return Err(HarnessError::InvalidConfig {
            field: "iterations",
            minimum: 1,
            value: 0,
        });
    }

    let fail = |phase: Phase, e: E| HarnessError::WorkloadFailed {
        name: name.to_string(),
        phase,
        source: e.into(),
    };

    // Warmup phase: results and timings discarded
    for _ in 0..warmup {
        let _ = black_box(workload().map_err(|e| fail(Phase::Warmup, e))?);
    }

    // Sampling phase: one timed invocation per sample
    let mut result = BenchmarkResult::with_capacity(name, iterations, samples);
    for _ in 0..samples {
        let timer = Timer::start(clock);
        let outcome = black_box(workload());
        let elapsed_ms = timer.stop();

        outcome.map_err(|e| fail(Phase::Sampling, e))?;
        result.push_sample(elapsed_ms);
    }

    debug!(
        workload = name,
        samples,
        warmup,
        mean_ms = result.mean(),
        "sampling complete"
    );

    Ok(result)
}
