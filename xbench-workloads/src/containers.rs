//! Container growth and iteration

use std::hint::black_box;

/// Elements appended by [`bench_array`]
pub const ARRAY_LEN: usize = 10_000;

/// Elements iterated by [`bench_foreach`]
pub const FOREACH_LEN: usize = 10_000;

/// Elements iterated by [`bench_foreach_functions`]
pub const FOREACH_FUNCTIONS_LEN: usize = 1_000;

/// Aggregates computed over the appended array
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrayStats {
    /// Sum of all elements
    pub total: i64,
    /// Mean element value
    pub avg: f64,
    /// Largest element
    pub max: i64,
    /// Smallest element
    pub min: i64,
}

/// Append [`ARRAY_LEN`] integers one at a time, then reduce them
pub fn bench_array() -> ArrayStats {
    let mut arr = Vec::new();
    for i in 0..ARRAY_LEN as i64 {
        arr.push(i);
    }
    let total: i64 = arr.iter().sum();
    ArrayStats {
        total,
        avg: total as f64 / arr.len() as f64,
        max: arr.iter().copied().max().unwrap_or_default(),
        min: arr.iter().copied().min().unwrap_or_default(),
    }
}

/// Build a float array, then accumulate it with an indexed loop
pub fn bench_foreach() -> f64 {
    let mut arr = Vec::new();
    for i in 0..FOREACH_LEN {
        arr.push(i as f64 * 0.5);
    }
    let mut total = 0.0;
    for (idx, value) in arr.iter().enumerate() {
        let _ = black_box(idx);
        total += value * 2.0;
    }
    total
}

#[inline(never)]
fn process(val: f64, idx: usize) -> f64 {
    val * idx as f64 + 1.0
}

/// Indexed iteration calling a helper function per element
pub fn bench_foreach_functions() -> f64 {
    let arr: Vec<f64> = (0..FOREACH_FUNCTIONS_LEN).map(|i| i as f64).collect();
    let mut total = 0.0;
    for (idx, &value) in arr.iter().enumerate() {
        total += process(black_box(value), idx);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_stats() {
        let stats = bench_array();
        assert_eq!(stats.total, 49_995_000);
        assert_eq!(stats.avg, 4999.5);
        assert_eq!(stats.max, 9_999);
        assert_eq!(stats.min, 0);
    }

    #[test]
    fn test_foreach_total() {
        assert_eq!(bench_foreach(), 49_995_000.0);
    }

    #[test]
    fn test_foreach_functions_total() {
        // sum(i * i + 1) for i in 0..1000
        assert_eq!(bench_foreach_functions(), 332_834_500.0);
    }
}
