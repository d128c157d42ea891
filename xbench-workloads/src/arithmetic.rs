//! Floating-point arithmetic with transcendental calls

/// Loop count of [`bench_math`]
pub const MATH_ITERATIONS: u64 = 100_000;

/// Mixed multiply/divide/add with `sin`/`cos`, returning the last value
// Truncated constants keep the payload identical to the other language ports.
#[allow(clippy::approx_constant)]
pub fn bench_math() -> f64 {
    let mut result = 0.0;
    for i in 0..MATH_ITERATIONS {
        let x = i as f64 * 3.14159;
        let y = x / 2.71828;
        let z = y + x - 1.0;
        result = z * x.sin() + y.cos();
    }
    result
}
