//! Harness errors

use std::fmt;
use thiserror::Error;

/// Failure raised by a workload body, carried unmodified
#[derive(Debug)]
pub struct WorkloadError(Box<dyn std::error::Error + Send + Sync + 'static>);

impl WorkloadError {
    /// Wrap any error (or message) produced by a workload body
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self(source.into())
    }

    /// The error as produced by the workload
    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for WorkloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Phase of the sampling protocol in which a workload failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Untimed warmup invocations
    Warmup,
    /// Timed sample invocations
    Sampling,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Warmup => f.write_str("warmup"),
            Phase::Sampling => f.write_str("sampling"),
        }
    }
}

/// Errors produced while measuring a workload
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A sampling parameter is below its minimum
    #[error("invalid sampling configuration: {field} must be at least {minimum}, got {value}")]
    InvalidConfig {
        /// Offending parameter
        field: &'static str,
        /// Smallest accepted value
        minimum: u64,
        /// Value supplied
        value: u64,
    },

    /// The workload body failed; the run must not continue
    #[error("workload '{name}' failed during {phase}")]
    WorkloadFailed {
        /// Display name of the failing workload
        name: String,
        /// Phase in which the failure occurred
        phase: Phase,
        /// Error returned by the workload body
        #[source]
        source: WorkloadError,
    },
}
