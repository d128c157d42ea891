//! Short-string formatting and case conversion

use std::hint::black_box;

/// Loop count of [`bench_text`]
pub const TEXT_ITERATIONS: usize = 1_000;

/// Zero-padded formatting followed by upper/lower case round trips.
///
/// Returns the last formatted string.
pub fn bench_text() -> String {
    let mut text = String::new();
    for i in 0..TEXT_ITERATIONS {
        text = format!("{i:06}");
        let upper = text.to_uppercase();
        let lower = upper.to_lowercase();
        let _ = black_box(lower.len());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_returns_last_value() {
        assert_eq!(bench_text(), "000999");
    }
}
