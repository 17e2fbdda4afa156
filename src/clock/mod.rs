//! Timestamp sources for commit calls
//!
//! The engine requires monotonically non-decreasing timestamps in
//! nanoseconds. These clocks satisfy that contract for the two common
//! producers: live capture pacing itself against real time, and offline
//! rendering emitting frames at a fixed interval.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// A source of commit timestamps in nanoseconds.
pub trait Clock {
    /// Next timestamp. Successive calls never go backwards.
    fn timestamp_ns(&self) -> i64;
}

/// Real-time clock reporting nanoseconds elapsed since creation.
pub struct RealtimeClock {
    start: Instant,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RealtimeClock {
    fn timestamp_ns(&self) -> i64 {
        self.start.elapsed().as_nanos() as i64
    }
}

/// Fixed-interval clock for offline rendering.
///
/// Each call stamps the next frame: 0, interval, 2x interval, and so on,
/// independent of wall time.
pub struct FixedIntervalClock {
    interval_ns: i64,
    frame: AtomicU64,
}

impl FixedIntervalClock {
    pub fn new(frames_per_second: f64) -> Self {
        assert!(
            frames_per_second > 0.0,
            "frame rate must be positive, got {}",
            frames_per_second
        );
        Self {
            interval_ns: (1_000_000_000.0 / frames_per_second) as i64,
            frame: AtomicU64::new(0),
        }
    }
}

impl Clock for FixedIntervalClock {
    fn timestamp_ns(&self) -> i64 {
        let frame = self.frame.fetch_add(1, Ordering::Relaxed);
        frame as i64 * self.interval_ns
    }
}
