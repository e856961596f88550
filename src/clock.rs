//! Clock Module
//!
//! Time source abstraction so expiry logic can be tested deterministically.
//! Timestamps are Unix epoch milliseconds, signed so negative TTLs can place
//! an expiration in the past.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;

// == Clock Trait ==
/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

// == System Clock ==
/// Default clock reading the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// == Manual Clock ==
/// Clock that only moves when told to, for deterministic tests.
///
/// Clones share the same underlying instant: advancing one clone is visible
/// through all of them.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a ManualClock starting at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ManualClock starting at the given epoch milliseconds.
    pub fn starting_at(now_ms: i64) -> Self {
        let clock = Self::new();
        clock.set(now_ms);
        clock
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, now_ms: i64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by the given number of milliseconds.
    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_current() {
        // 2020-01-01 in epoch milliseconds; anything earlier means a broken clock.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_system_clock_does_not_go_backwards() {
        let first = SystemClock.now_ms();
        let second = SystemClock.now_ms();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::starting_at(1_000);
        assert_eq!(clock.now_ms(), 1_000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);

        clock.set(100);
        assert_eq!(clock.now_ms(), 100);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();

        clock.advance(42);
        assert_eq!(other.now_ms(), 42);
    }
}
