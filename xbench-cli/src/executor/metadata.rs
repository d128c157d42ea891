//! System Metadata Collection
//!
//! Collects system information for report metadata: OS, architecture,
//! CPU model and core count, plus the UTC time of report generation.
//!
//! Linux-specific data (CPU model) gracefully degrades on other platforms,
//! returning "Unknown".

use chrono::Utc;
use xbench_core::SamplingConfig;
use xbench_report::{REPORT_SCHEMA_VERSION, ReportConfig, ReportMeta, SystemInfo};

/// Build report metadata including system info and the sampling configuration
pub fn build_report_meta(config: &SamplingConfig) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema_version: REPORT_SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            samples: config.samples,
            warmup: config.warmup,
        },
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_captures_config() {
        let meta = build_report_meta(&SamplingConfig {
            samples: 4,
            warmup: 2,
        });

        assert_eq!(meta.schema_version, REPORT_SCHEMA_VERSION);
        assert_eq!(meta.config.samples, 4);
        assert_eq!(meta.config.warmup, 2);
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.os.is_empty());
    }
}
