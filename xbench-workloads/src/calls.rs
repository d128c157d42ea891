//! Plain function-call overhead

use std::hint::black_box;

/// Calls made by each call workload
pub const CALL_ITERATIONS: u64 = 100_000;

#[inline(never)]
fn return_num() -> f64 {
    42.0
}

#[inline(never)]
fn with_args(a: f64, b: f64) -> f64 {
    a + b
}

/// Repeated zero-argument calls returning a constant
pub fn bench_calls() -> f64 {
    let mut result = 0.0;
    for _ in 0..CALL_ITERATIONS {
        let x = black_box(return_num());
        result += x;
    }
    result
}

/// Repeated two-argument calls
pub fn bench_calls_with_args() -> f64 {
    let mut result = 0.0;
    for _ in 0..CALL_ITERATIONS {
        let x = black_box(with_args(black_box(1.5), black_box(2.5)));
        result += x;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_totals() {
        assert_eq!(bench_calls(), 4_200_000.0);
        assert_eq!(bench_calls_with_args(), 400_000.0);
    }
}
