#![warn(missing_docs)]
//! xbench CLI Library
//!
//! Process entry point for the harness. With no arguments it runs the full
//! standard battery with 10 samples and 3 warmup runs per workload, prints a
//! row per workload as it completes and then the summary table.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = xbench_cli::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    ExecutionError, Executor, build_report, build_report_meta, format_preamble, format_progress,
};

use anyhow::Context;
use clap::Parser;
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;
use xbench_core::{ResultLog, SamplingConfig, Workload};
use xbench_report::{OutputFormat, generate_csv_report, generate_json_report};
use xbench_workloads::standard_workloads;

/// xbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "xbench")]
#[command(author, version, about = "xbench - cross-language micro-benchmark harness")]
pub struct Cli {
    /// Run only workloads whose id matches this regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Timed samples per workload (default: 10)
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Untimed warmup runs per workload (default: 3)
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Extra output after the summary: human, csv, json
    #[arg(long)]
    pub format: Option<String>,

    /// Write the CSV/JSON output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Load settings from a TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List workloads without running them
    #[arg(long)]
    pub list: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Settings of one run after layering config file and CLI flags
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    /// Sample and warmup counts
    pub sampling: SamplingConfig,
    /// Extra output after the summary
    pub format: OutputFormat,
    /// Destination for the extra output
    pub output: Option<PathBuf>,
}

/// Run the xbench CLI with the process arguments.
/// This is the main entry point for the `xbench` binary.
///
/// # Returns
/// Returns `Ok(())` on success, or the first error (including a failing workload).
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the xbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => HarnessConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => HarnessConfig::default(),
    };
    let settings = resolve_settings(&cli, &config)?;
    let workloads = select_workloads(standard_workloads(), &cli.filter)?;

    if cli.list {
        list_workloads(&workloads);
        return Ok(());
    }

    if workloads.is_empty() {
        warn!(filter = %cli.filter, "no workloads matched");
        println!("No benchmarks found.");
        return Ok(());
    }

    run_benchmarks(workloads, &settings)
}

/// Initialize the stderr log subscriber; stdout carries only results
fn init_logging(verbose: bool) {
    let filter = if verbose { "xbench=debug" } else { "xbench=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Layer settings: built-in defaults → config file → CLI flags.
pub fn resolve_settings(cli: &Cli, config: &HarnessConfig) -> anyhow::Result<RunSettings> {
    let sampling = SamplingConfig::new(
        cli.samples.unwrap_or(config.runner.samples),
        cli.warmup.unwrap_or(config.runner.warmup),
    )?;

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()
        .map_err(anyhow::Error::msg)?;

    let output = cli
        .output
        .clone()
        .or_else(|| config.output.path.as_ref().map(PathBuf::from));

    if let (OutputFormat::Human, Some(path)) = (format, &output) {
        anyhow::bail!(
            "output path {} requires --format csv or json",
            path.display()
        );
    }

    Ok(RunSettings {
        sampling,
        format,
        output,
    })
}

/// Keep workloads whose id matches `filter`, preserving declared order.
pub fn select_workloads(workloads: Vec<Workload>, filter: &str) -> anyhow::Result<Vec<Workload>> {
    let filter_re =
        Regex::new(filter).with_context(|| format!("invalid workload filter '{}'", filter))?;
    Ok(workloads
        .into_iter()
        .filter(|w| filter_re.is_match(w.id()))
        .collect())
}

fn list_workloads(workloads: &[Workload]) {
    println!("xbench workloads:");
    for workload in workloads {
        println!(
            "├── {:<20} {} ({} iterations)",
            workload.id(),
            workload.name(),
            workload.iterations()
        );
    }
    println!("{} workloads found.", workloads.len());
}

fn run_benchmarks(mut workloads: Vec<Workload>, settings: &RunSettings) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(format_preamble(&settings.sampling).as_bytes())?;

    let mut results = ResultLog::new();
    let mut executor = Executor::new(settings.sampling, &mut out)?;
    executor.execute(&mut workloads, &mut results)?;
    executor.write_summary(&results)?;

    let extra = match settings.format {
        OutputFormat::Human => return Ok(()),
        OutputFormat::Csv => generate_csv_report(results.as_slice()),
        OutputFormat::Json => generate_json_report(&build_report(&results, &settings.sampling))?,
    };

    emit_report(&extra, settings.output.as_deref(), &mut out)
}

/// Write a CSV/JSON document to `path`, or to `out` when no path is set.
fn emit_report(contents: &str, path: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, contents.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(out, "Report written to: {}", path.display())?;
        }
        None => out.write_all(contents.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("xbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_arguments_uses_hardcoded_defaults() {
        let cli = parse(&[]);
        let settings = resolve_settings(&cli, &HarnessConfig::default()).unwrap();

        assert_eq!(cli.filter, ".*");
        assert_eq!(settings.sampling, SamplingConfig { samples: 10, warmup: 3 });
        assert_eq!(settings.format, OutputFormat::Human);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = HarnessConfig::default();
        config.runner.samples = 50;
        config.runner.warmup = 7;
        config.output.format = "json".to_string();

        let cli = parse(&["-n", "5", "--format", "csv"]);
        let settings = resolve_settings(&cli, &config).unwrap();

        assert_eq!(settings.sampling, SamplingConfig { samples: 5, warmup: 7 });
        assert_eq!(settings.format, OutputFormat::Csv);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let cli = parse(&["--samples", "0"]);
        assert!(resolve_settings(&cli, &HarnessConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let cli = parse(&["--format", "xml"]);
        assert!(resolve_settings(&cli, &HarnessConfig::default()).is_err());
    }

    #[test]
    fn test_output_path_requires_machine_format() {
        let cli = parse(&["--format", "human", "-o", "out/x.json"]);
        assert!(resolve_settings(&cli, &HarnessConfig::default()).is_err());

        let mut config = HarnessConfig::default();
        config.output.path = Some("out/x.csv".to_string());
        assert!(resolve_settings(&parse(&[]), &config).is_err());

        let cli = parse(&["--format", "json", "-o", "out/x.json"]);
        let settings = resolve_settings(&cli, &HarnessConfig::default()).unwrap();
        assert_eq!(settings.output, Some(PathBuf::from("out/x.json")));
    }

    #[test]
    fn test_emit_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.csv");
        let mut out = Vec::new();

        emit_report("name,avg_ms\n", Some(&path), &mut out).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name,avg_ms\n");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("Report written to: {}\n", path.display()));
    }

    #[test]
    fn test_emit_report_to_writer() {
        let mut out = Vec::new();
        emit_report("{}", None, &mut out).unwrap();
        assert_eq!(out, b"{}");
    }

    #[test]
    fn test_select_all_keeps_order() {
        let all = standard_workloads().len();
        let selected = select_workloads(standard_workloads(), ".*").unwrap();
        assert_eq!(selected.len(), all);
        assert_eq!(selected[0].id(), "math");
        assert_eq!(selected[all - 1].id(), "object_access");
    }

    #[test]
    fn test_select_by_pattern() {
        let selected = select_workloads(standard_workloads(), "^calls").unwrap();
        let ids: Vec<_> = selected.iter().map(|w| w.id()).collect();
        assert_eq!(ids, ["calls", "calls_args"]);

        let selected = select_workloads(standard_workloads(), "^keyvalue$").unwrap();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn test_invalid_filter() {
        assert!(select_workloads(standard_workloads(), "(").is_err());
    }
}
