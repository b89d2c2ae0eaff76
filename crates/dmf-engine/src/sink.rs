//! `ActuationSink` — the seam to whatever actually energizes channels.
//!
//! The engine emits one state map per tick, synchronously: `apply_site_states`
//! must not return until the collaborator has acknowledged the update (a UI
//! redraw, hardware confirmation, …).  That single blocking call is what
//! bounds tick duration and keeps emissions strictly ordered by tick number.

use thiserror::Error;

use crate::aggregate::SiteStateMap;

/// The actuation collaborator rejected or failed a state update.
#[derive(Debug, Error)]
#[error("actuation sink rejected state update: {0}")]
pub struct ActuationError(pub String);

/// Applies site-state maps to the device (or a renderer, or a recorder).
pub trait ActuationSink {
    /// Apply `states` and block until acknowledged.
    ///
    /// The engine always passes `persist = false`: engine-driven transitions
    /// are transient and must never be saved as step state.  Hosts may call
    /// their sink with `persist = true` for user-authored edits.
    fn apply_site_states(&mut self, states: &SiteStateMap, persist: bool)
    -> Result<(), ActuationError>;
}

// ── MemorySink ───────────────────────────────────────────────────────────────

/// An `ActuationSink` that records every emission in order.
///
/// Used by tests and dry runs.  Can be armed to start rejecting updates
/// after a number of successful emissions, to exercise the engine's failure
/// path.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Every map applied, in emission order.
    pub emissions: Vec<SiteStateMap>,
    fail_after: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `n` emissions, then reject every subsequent one.
    pub fn failing_after(n: usize) -> Self {
        Self { emissions: Vec::new(), fail_after: Some(n) }
    }

    /// Number of recorded emissions.
    pub fn len(&self) -> usize {
        self.emissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emissions.is_empty()
    }
}

impl ActuationSink for MemorySink {
    fn apply_site_states(
        &mut self,
        states: &SiteStateMap,
        _persist: bool,
    ) -> Result<(), ActuationError> {
        if let Some(limit) = self.fail_after {
            if self.emissions.len() >= limit {
                return Err(ActuationError("injected sink failure".into()));
            }
        }
        self.emissions.push(states.clone());
        Ok(())
    }
}
