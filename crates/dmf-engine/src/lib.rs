//! `dmf-engine` — lock-step route execution for digital-microfluidics devices.
//!
//! Drives one or more droplet routes along a device, one discrete transition
//! per tick.  Each tick the engine computes the active transition window of
//! every route, merges the windows into a changed-sites-only state map, and
//! emits the map to an [`ActuationSink`].
//!
//! # Tick loop
//!
//! ```text
//! start(route_set, config):
//!   validate config; cancel any in-progress run; tick = 0
//! step():
//!   ① Windows    — active_positions(tick, trail, len, cyclic) per route
//!   ② Aggregate  — union windows into the on-set; diff against the
//!                  previous tick (on wins over off; changed sites only)
//!   ③ Emit       — sink.apply_site_states(map, persist = false)
//!   ④ Advance    — tick += 1; at max(len + trail − 1) the pass ends and
//!                  the repeat policy decides: restart (cyclic routes
//!                  only) or tear down (force every touched site off)
//! ```
//!
//! # Driving the engine
//!
//! The state machine is tick-driven and clock-agnostic: call [`RouteExecutor::step`]
//! yourself (tests, host event loops) or use [`RouteExecutor::run`] with an
//! [`IntervalTimer`] for real-time pacing (first tick immediate, then fixed
//! `transition_interval` spacing).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dmf_core::ExecuteConfig;
//! use dmf_engine::{IntervalTimer, MemorySink, NoopObserver, RouteExecutor};
//! use dmf_route::{RouteSelection, RouteSet};
//!
//! let set = RouteSet::select(&table, &RouteSelection::default());
//! let config = ExecuteConfig::default();
//! let mut timer = IntervalTimer::new(config.transition_interval);
//! let mut executor = RouteExecutor::new(MemorySink::new());
//! let summary = executor.run(set, config, &mut timer, &mut NoopObserver)?;
//! println!("touched {} sites in {} passes", summary.touched_sites.len(), summary.passes);
//! ```

pub mod aggregate;
pub mod command;
pub mod error;
pub mod observer;
pub mod repeat;
pub mod scheduler;
pub mod sink;
pub mod timer;
pub mod window;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aggregate::{SiteStateMap, active_sites, changed_states, forced_off};
pub use command::{CommandReply, RouteCommand, dispatch_command};
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, RunObserver};
pub use repeat::RepeatPolicy;
pub use scheduler::{RouteExecutor, RunSummary, StepOutcome};
pub use sink::{ActuationError, ActuationSink, MemorySink};
pub use timer::{IntervalTimer, NoDelay, TickTimer};
pub use window::active_positions;
