//! Object construction and field reads

use std::hint::black_box;

/// Objects constructed by [`bench_object_access`]
pub const OBJECT_ITERATIONS: u64 = 50_000;

/// Three-component position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        }
    }
}

/// Construct a position per iteration and sum its fields
pub fn bench_object_access() -> f64 {
    let mut result = 0.0;
    for _ in 0..OBJECT_ITERATIONS {
        let pos = black_box(Position::default());
        result = pos.x + pos.y + pos.z;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_access() {
        assert_eq!(bench_object_access(), 6.0);
    }
}
