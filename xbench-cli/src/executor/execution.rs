//! Workload Execution
//!
//! Runs each workload through the full protocol in declared order:
//!
//! ```text
//! Idle → (Warmup → Sampling → Aggregate → Report) per workload → FinalSummary → Done
//! ```
//!
//! Execution is single-threaded. A workload's result is appended to the
//! [`ResultLog`] only after its last sample; a failing workload aborts the run
//! and leaves no entry behind.

use super::formatting::format_progress;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};
use xbench_core::{
    BenchmarkResult, Clock, HarnessError, MonotonicClock, ResultLog, Sampler, SamplingConfig,
    Workload,
};
use xbench_report::{format_row, format_summary};

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Invalid configuration or a failing workload
    #[error(transparent)]
    Harness(#[from] HarnessError),
    /// The output writer failed
    #[error("failed to write benchmark output")]
    Output(#[from] std::io::Error),
}

/// Execute workloads and stream their rows to `out`
pub struct Executor<W: Write, C: Clock = MonotonicClock> {
    sampler: Sampler<C>,
    out: W,
}

impl<W: Write> Executor<W> {
    /// Executor on the monotonic wall clock
    pub fn new(config: SamplingConfig, out: W) -> Result<Self, ExecutionError> {
        Ok(Self::with_sampler(Sampler::new(config)?, out))
    }
}

impl<W: Write, C: Clock> Executor<W, C> {
    /// Executor around an existing sampler
    pub fn with_sampler(sampler: Sampler<C>, out: W) -> Self {
        Self { sampler, out }
    }

    /// Active sampling configuration
    pub fn config(&self) -> SamplingConfig {
        self.sampler.config()
    }

    /// Execute all workloads in the order given, appending each result to `results`
    pub fn execute(
        &mut self,
        workloads: &mut [Workload],
        results: &mut ResultLog,
    ) -> Result<(), ExecutionError> {
        info!(
            workloads = workloads.len(),
            samples = self.config().samples,
            warmup = self.config().warmup,
            "starting run"
        );

        for workload in workloads.iter_mut() {
            let result = self.execute_single(workload)?;
            results.push(result);
        }

        info!(completed = results.len(), "run finished");
        Ok(())
    }

    /// Execute a single workload: progress line, sampling, result row
    pub fn execute_single(
        &mut self,
        workload: &mut Workload,
    ) -> Result<BenchmarkResult, ExecutionError> {
        writeln!(self.out, "{}", format_progress(workload.title()))?;
        self.out.flush()?;

        let result = self.sampler.measure(workload)?;
        debug!(
            workload = workload.id(),
            per_iteration_us = result.per_iteration_us(),
            "workload complete"
        );

        writeln!(self.out, "{}", format_row(&result))?;
        Ok(result)
    }

    /// Write the final summary of every result so far, in recorded order
    pub fn write_summary(&mut self, results: &ResultLog) -> Result<(), ExecutionError> {
        self.out.write_all(format_summary(results.as_slice()).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Recover the output writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
