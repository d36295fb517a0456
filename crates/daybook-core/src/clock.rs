//! Time abstraction for testability
//!
//! The directory never reads the wall clock directly. It is handed a
//! [`Clock`] at construction and reads it at most once per logical
//! operation, so every map and index touched by one call sees the same
//! timestamp, and tests can drive time by hand.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Milliseconds in a second.
pub const SECOND: i64 = 1000;
/// Milliseconds in a minute.
pub const MINUTE: i64 = 60 * SECOND;
/// Milliseconds in an hour.
pub const HOUR: i64 = 60 * MINUTE;
/// Milliseconds in a day.
pub const DAY: i64 = 24 * HOUR;

/// Source of the current time in milliseconds since the Unix epoch
///
/// Implementations must be monotonically non-decreasing between calls made
/// from a single thread; the rolling event window depends on that ordering.
pub trait Clock: Send + Sync {
    /// Get the current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Real clock implementation using system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for deterministic tests
///
/// Time only moves when the test moves it. Backed by an atomic so a shared
/// reference is enough to advance it while the store owns the clock.
#[derive(Debug, Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    /// Create a clock positioned at the given millisecond timestamp
    pub fn starting_at(millis: i64) -> Self {
        Self(AtomicI64::new(millis))
    }

    /// Advance the clock by a number of milliseconds
    pub fn advance(&self, millis: i64) {
        self.0.fetch_add(millis, Ordering::SeqCst);
    }

    /// Jump the clock to an absolute timestamp
    pub fn set(&self, millis: i64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}
