//! The repeat policy: at the end of a pass, restart or finish?

use std::time::Duration;

use dmf_core::ExecuteConfig;

/// Decides, at each pass boundary, whether cyclic routes run another pass.
///
/// A restart happens when either criterion still holds:
///
/// - less wall-clock time has elapsed than `repeat_duration`, or
/// - fewer than `repeat_count` passes have completed.
///
/// A zero `repeat_duration` disables the time criterion (elapsed time is
/// never less than zero), so the default configuration runs exactly
/// `repeat_count` passes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RepeatPolicy {
    pub repeat_count: u32,
    pub repeat_duration: Duration,
}

impl RepeatPolicy {
    pub fn from_config(config: &ExecuteConfig) -> Self {
        Self {
            repeat_count:    config.repeat_count,
            repeat_duration: config.repeat_duration,
        }
    }

    /// `completed_repeats` is the number of *extra* passes already run —
    /// zero at the end of the first pass.
    pub fn should_repeat(&self, elapsed: Duration, completed_repeats: u32) -> bool {
        elapsed < self.repeat_duration || completed_repeats + 1 < self.repeat_count
    }
}
