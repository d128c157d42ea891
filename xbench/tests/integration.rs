//! Integration tests for xbench
//!
//! These tests verify the end-to-end behavior of the harness.

use std::time::Duration;
use xbench::{
    BenchmarkResult, FixedClock, HarnessError, MonotonicClock, Phase, ResultLog, Sampler,
    SamplingConfig, Workload, WorkloadError, compute_summary, format_summary, run_sampling,
};
use xbench_cli::Executor;

/// Test the documented end-to-end case on a fixed 2.0 ms clock
#[test]
fn test_fixed_clock_end_to_end() {
    let clock = FixedClock::new(Duration::from_millis(2));
    let result = run_sampling(
        &clock,
        "fixed",
        || Ok::<_, WorkloadError>(7u64),
        4,
        2,
        1000,
    )
    .unwrap();

    assert_eq!(result.samples(), &[2.0, 2.0, 2.0, 2.0]);
    assert_eq!(result.mean(), 2.0);
    assert_eq!(result.min(), 2.0);
    assert_eq!(result.max(), 2.0);
    assert_eq!(result.std_dev(), 0.0);
    assert_eq!(result.per_iteration_us(), 2.0);
}

/// Test that warmup invocations never appear in the samples
#[test]
fn test_sample_count_matches_config() {
    let sampler = Sampler::new(SamplingConfig::new(6, 4).unwrap()).unwrap();

    for mut workload in xbench::standard_workloads()
        .into_iter()
        .filter(|w| matches!(w.id(), "calls" | "object_access" | "keyvalue"))
    {
        let result = sampler.measure(&mut workload).unwrap();
        assert_eq!(result.samples().len(), 6);
        assert!(result.samples().iter().all(|&s| s >= 0.0));
    }
}

/// Test min <= mean <= max on real timings
#[test]
fn test_mean_between_extremes() {
    let result = run_sampling(
        &MonotonicClock,
        "vec",
        || Ok::<_, WorkloadError>((0..10_000u64).collect::<Vec<_>>()),
        8,
        1,
        10_000,
    )
    .unwrap();

    assert!(result.min() <= result.mean());
    assert!(result.mean() <= result.max());
}

/// Test that the aggregator is idempotent on a fixed sequence
#[test]
fn test_statistics_idempotent() {
    let result = BenchmarkResult::from_samples("constant", vec![5.0, 5.0, 5.0], 1);

    for _ in 0..5 {
        let summary = compute_summary(result.samples());
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.std_dev, 0.0);
    }
}

/// Test stddev is zero below two samples
#[test]
fn test_stddev_single_sample() {
    let clock = FixedClock::new(Duration::from_micros(750));
    let result = run_sampling(&clock, "one", || Ok::<_, WorkloadError>(()), 1, 0, 1).unwrap();

    assert_eq!(result.samples().len(), 1);
    assert_eq!(result.std_dev(), 0.0);
}

/// Test per-iteration cost normalization
#[test]
fn test_per_iteration_cost_formula() {
    for &iterations in &[1u64, 7, 1000, 100_000] {
        let result = BenchmarkResult::from_samples("cost", vec![1.25, 3.5, 2.0], iterations);
        assert_eq!(
            result.per_iteration_us(),
            (result.mean() * 1000.0) / iterations as f64
        );
    }
}

/// Test that a failing workload aborts before any sample and adds no entry
#[test]
fn test_warmup_failure_leaves_no_entry() {
    let sampler = Sampler::with_clock(
        FixedClock::new(Duration::from_millis(1)),
        SamplingConfig::default(),
    )
    .unwrap();
    let mut executor = Executor::with_sampler(sampler, Vec::new());
    let mut workloads = vec![Workload::fallible(
        "broken",
        "Broken Workload",
        1,
        || -> Result<(), String> { Err("first call fails".to_string()) },
    )];
    let mut results = ResultLog::new();

    let err = executor.execute(&mut workloads, &mut results).unwrap_err();

    assert!(results.is_empty());
    match err {
        xbench_cli::ExecutionError::Harness(HarnessError::WorkloadFailed { phase, .. }) => {
            assert_eq!(phase, Phase::Warmup);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Test that the summary lists workloads in run order, never re-sorted
#[test]
fn test_summary_declared_order() {
    let sampler = Sampler::with_clock(
        FixedClock::new(Duration::from_millis(1)),
        SamplingConfig::new(2, 0).unwrap(),
    )
    .unwrap();
    let mut executor = Executor::with_sampler(sampler, Vec::new());
    let mut workloads: Vec<Workload> = xbench::standard_workloads()
        .into_iter()
        .filter(|w| matches!(w.id(), "calls_args" | "calls" | "object_access"))
        .collect();
    let mut results = ResultLog::new();

    executor.execute(&mut workloads, &mut results).unwrap();
    let summary = format_summary(results.as_slice());

    let positions: Vec<usize> = [
        "Function Calls (100k)",
        "Function Calls with Args (100k)",
        "Object Access (50k)",
    ]
    .iter()
    .map(|name| summary.find(&format!("{name:<35}")).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
