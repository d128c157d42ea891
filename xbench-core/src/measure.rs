//! Wall-Clock Timing
//!
//! Samples are measured with a monotonic clock and reported in fractional
//! milliseconds. The [`Clock`] trait lets the sampler run against a fixed
//! clock so timing behavior can be checked deterministically.

use std::time::Duration;

/// Source of elapsed wall-clock time
pub trait Clock {
    /// Opaque point in time captured by [`Clock::now`]
    type Stamp: Copy;

    /// Capture the current point in time
    fn now(&self) -> Self::Stamp;

    /// Time elapsed since `since`
    fn elapsed(&self, since: Self::Stamp) -> Duration;
}

/// Monotonic high-resolution clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Stamp = std::time::Instant;

    #[inline(always)]
    fn now(&self) -> Self::Stamp {
        std::time::Instant::now()
    }

    #[inline(always)]
    fn elapsed(&self, since: Self::Stamp) -> Duration {
        since.elapsed()
    }
}

/// Clock that reports the same elapsed time for every measurement
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    elapsed: Duration,
}

impl FixedClock {
    /// Clock whose every measurement lasts exactly `elapsed`
    pub fn new(elapsed: Duration) -> Self {
        Self { elapsed }
    }
}

impl Clock for FixedClock {
    type Stamp = ();

    fn now(&self) -> Self::Stamp {}

    fn elapsed(&self, _since: Self::Stamp) -> Duration {
        self.elapsed
    }
}

/// Timer for measuring a single sample
pub struct Timer<'a, C: Clock> {
    clock: &'a C,
    start: C::Stamp,
}

impl<'a, C: Clock> Timer<'a, C> {
    /// Start a new timer
    #[inline(always)]
    pub fn start(clock: &'a C) -> Self {
        Self {
            clock,
            start: clock.now(),
        }
    }

    /// Stop the timer and return elapsed fractional milliseconds
    #[inline(always)]
    pub fn stop(&self) -> f64 {
        duration_to_millis(self.clock.elapsed(self.start))
    }
}

/// Convert a duration to fractional milliseconds
pub fn duration_to_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
