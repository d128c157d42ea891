//! Configuration loading from a TOML file
//!
//! The harness needs no configuration: the built-in defaults are 10 samples
//! and 3 warmup runs. A file is read only when passed explicitly with
//! `--config`; CLI flags override whatever it sets.

use serde::{Deserialize, Serialize};
use std::path::Path;
use xbench_core::{DEFAULT_SAMPLES, DEFAULT_WARMUP};

/// xbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HarnessConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration for workload execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Timed samples per workload
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Untimed warmup runs per workload
    #[serde(default = "default_warmup")]
    pub warmup: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            warmup: default_warmup(),
        }
    }
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}
fn default_warmup() -> usize {
    DEFAULT_WARMUP
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extra output after the summary table: "human", "csv" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// File for the CSV/JSON output (stdout if not set)
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl HarnessConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# xbench configuration

[runner]
# Timed samples per workload (at least 1)
samples = 10
# Untimed warmup runs per workload
warmup = 3

[output]
# Extra output after the summary table: human, csv, json
format = "human"
# File for CSV/JSON output (uncomment to enable; stdout otherwise)
# path = "target/xbench/results.json"
"#
        .to_string()
    }
}
