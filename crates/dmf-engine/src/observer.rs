//! Run observer trait for progress reporting.

use dmf_core::Tick;

use crate::scheduler::RunSummary;

/// Callbacks invoked by [`RouteExecutor::run`][crate::RouteExecutor::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Emission of site states goes through
/// the [`ActuationSink`][crate::ActuationSink], not the observer — these
/// hooks are for progress display and bookkeeping only.
pub trait RunObserver {
    /// Called after each executed tick (the state map has been acknowledged).
    fn on_tick(&mut self, _tick: Tick) {}

    /// Called when a pass ends and a repeat pass follows.
    /// `completed_passes` counts passes finished so far, starting at 1.
    fn on_pass_end(&mut self, _completed_passes: u32) {}

    /// Called once when the run completes successfully.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
