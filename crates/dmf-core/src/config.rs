//! Per-run execution configuration.

use std::time::Duration;

use crate::{DmfError, DmfResult};

/// Knobs for one route-execution run.
///
/// Typically loaded from the host's per-step settings and passed to
/// `RouteExecutor::start`.  [`ExecuteConfig::default`] mirrors the device
/// defaults: trail length 1, 750 ms transition interval, a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecuteConfig {
    /// Number of consecutive transitions kept simultaneously active,
    /// simulating a droplet's trailing edge.  Must be ≥ 1.
    pub trail_length: u32,

    /// Wall-clock spacing between ticks.  The first tick fires immediately;
    /// subsequent ticks at this fixed interval.  Must be non-zero.
    pub transition_interval: Duration,

    /// Number of passes to execute.  Only cyclic routes participate in
    /// passes after the first.  Must be ≥ 1.
    pub repeat_count: u32,

    /// Keep repeating (cyclic routes only) until at least this much
    /// wall-clock time has elapsed.  `Duration::ZERO` disables the
    /// time-based repeat criterion.
    pub repeat_duration: Duration,
}

impl Default for ExecuteConfig {
    fn default() -> Self {
        Self {
            trail_length:        1,
            transition_interval: Duration::from_millis(750),
            repeat_count:        1,
            repeat_duration:     Duration::ZERO,
        }
    }
}

impl ExecuteConfig {
    /// Check the configuration for values the engine cannot execute.
    pub fn validate(&self) -> DmfResult<()> {
        if self.trail_length < 1 {
            return Err(DmfError::Config("trail_length must be >= 1".into()));
        }
        if self.transition_interval.is_zero() {
            return Err(DmfError::Config(
                "transition_interval must be non-zero".into(),
            ));
        }
        if self.repeat_count < 1 {
            return Err(DmfError::Config("repeat_count must be >= 1".into()));
        }
        Ok(())
    }
}
