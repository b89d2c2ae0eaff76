//! Tick pacing.
//!
//! The executor's state machine is clock-agnostic; pacing lives behind the
//! `TickTimer` seam so the same engine runs against a real interval timer in
//! production and against [`NoDelay`] in tests.

use std::time::{Duration, Instant};

/// Blocks until the next tick is due.
pub trait TickTimer {
    fn wait(&mut self);
}

/// No pacing at all — every tick is due immediately.
///
/// The synthetic-tick harness used by tests and hosts that provide their
/// own event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl TickTimer for NoDelay {
    fn wait(&mut self) {}
}

/// Fixed-interval pacing against a monotonic deadline.
///
/// The first `wait` returns immediately (the first transition executes as
/// soon as a run starts, not one interval late).  Subsequent waits sleep
/// until the next deadline, and deadlines advance by exactly one interval
/// each tick, so a slow tick shortens the following sleep instead of
/// accumulating drift.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, next: None }
    }
}

impl TickTimer for IntervalTimer {
    fn wait(&mut self) {
        let now = Instant::now();
        match self.next {
            None => {
                self.next = Some(now + self.interval);
            }
            Some(deadline) => {
                if deadline > now {
                    std::thread::sleep(deadline - now);
                }
                self.next = Some(deadline + self.interval);
            }
        }
    }
}
