//! Execution time model.
//!
//! Time is represented as a monotonically increasing `Tick` counter.  One
//! tick advances every route in the executing set by one transition; the
//! mapping to wall-clock time (the transition interval) lives in
//! [`ExecuteConfig`][crate::ExecuteConfig] and is applied only by the timer
//! driving the executor.  Using an integer tick as the canonical time unit
//! keeps all window arithmetic exact and lets a test harness drive the
//! engine without any real clock.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute transition counter within one execution pass.
///
/// Resets to zero at the start of every pass (including repeat passes).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Advance by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
