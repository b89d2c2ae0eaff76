//! The execution scheduler: owns all mutable run state and drives the
//! window calculator, aggregator, and repeat policy once per tick.
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ──▶ (pass boundary) ──▶ Repeating ──▶ Running
//!   ▲                │                 │
//!   │             cancel /          complete
//!   │             failure              │
//!   └────────────────┴─────────────────┘
//! ```
//!
//! Teardown — forcing every touched site off — is shared by all three exits
//! (completion, cancellation, actuation failure), so the device never ends a
//! run with stray energized sites.
//!
//! Run state is owned exclusively by the executor and every tick runs to
//! completion before the next can start, so emissions are strictly ordered
//! by tick number.  Hosts with their own threads must funnel `cancel` and
//! `start` calls through a command channel rather than sharing the executor.

use std::collections::BTreeSet;
use std::time::{Instant, SystemTime};

use log::{debug, info, warn};

use dmf_core::{DmfError, ExecuteConfig, SiteId, Tick};
use dmf_route::RouteSet;

use crate::aggregate;
use crate::observer::RunObserver;
use crate::repeat::RepeatPolicy;
use crate::sink::ActuationSink;
use crate::timer::TickTimer;
use crate::{EngineError, EngineResult};

// ── Outcomes ─────────────────────────────────────────────────────────────────

/// What one call to [`RouteExecutor::step`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// No run in progress; nothing happened.
    Idle,
    /// Executed (computed, emitted, acknowledged) the given tick.
    Ticked(Tick),
    /// A pass ended and the repeat policy restarted the run with its cyclic
    /// routes; the tick counter is back at zero.
    PassComplete { completed_passes: u32 },
    /// The whole run finished; every touched site has been forced off.
    Completed(RunSummary),
}

/// Success payload of a finished run, covering all passes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// Wall-clock time at which the run started.
    pub started_at: SystemTime,
    /// Every actuation site activated at any point during the run.
    pub touched_sites: BTreeSet<SiteId>,
    /// Total ticks executed across all passes.
    pub ticks: u64,
    /// Passes completed (0 for an empty route set).
    pub passes: u32,
}

// ── Run state ────────────────────────────────────────────────────────────────

/// Mutable state of one run.  Created by `start`, destroyed by completion,
/// cancellation, or failure.
struct RunState {
    routes: RouteSet,
    trail_length: u32,
    policy: RepeatPolicy,

    /// Current transition counter; resets to zero at each pass boundary.
    tick: Tick,
    /// Extra passes already executed (0 during the first pass).
    repeat_i: u32,
    /// Passes fully completed so far.
    passes_done: u32,
    /// The current pass ends when `tick` reaches this value:
    /// `max(route_len + trail_length − 1)` over the set.
    pass_stop: u64,

    started_wall: SystemTime,
    started: Instant,

    /// Sites active as of the previous tick.
    on_now: BTreeSet<SiteId>,
    /// Every site activated at any point during the run.
    touched: BTreeSet<SiteId>,
    total_ticks: u64,
}

fn pass_stop_for(set: &RouteSet, trail_length: u32) -> u64 {
    set.iter()
        .map(|e| e.route.len() as u64 + trail_length as u64 - 1)
        .max()
        .unwrap_or(0)
}

// ── RouteExecutor ────────────────────────────────────────────────────────────

/// The stateful run driver.  See the module docs for the state machine.
pub struct RouteExecutor<S: ActuationSink> {
    sink: S,
    run: Option<RunState>,
}

impl<S: ActuationSink> RouteExecutor<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, run: None }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Begin a run over `routes`.
    ///
    /// Fails synchronously on an invalid configuration.  If a run is already
    /// in progress it is cancelled first (its touched sites forced off), so
    /// at most one run — and one pending tick — exists at any instant.
    ///
    /// An empty set is not an error: the first `step` completes immediately
    /// with zero ticks and an empty touched-site set.
    pub fn start(&mut self, routes: RouteSet, config: ExecuteConfig) -> EngineResult<()> {
        config.validate().map_err(EngineError::Config)?;
        if self.run.is_some() {
            self.cancel();
        }

        let trail_length = config.trail_length;
        let pass_stop = pass_stop_for(&routes, trail_length);
        debug!(
            "starting run: {} routes, trail {trail_length}, {pass_stop} ticks per pass",
            routes.len()
        );

        self.run = Some(RunState {
            routes,
            trail_length,
            policy: RepeatPolicy::from_config(&config),
            tick: Tick::ZERO,
            repeat_i: 0,
            passes_done: 0,
            pass_stop,
            started_wall: SystemTime::now(),
            started: Instant::now(),
            on_now: BTreeSet::new(),
            touched: BTreeSet::new(),
            total_ticks: 0,
        });
        Ok(())
    }

    /// Advance the run by one tick (or resolve a pass boundary).
    ///
    /// On actuation failure the run is torn down — touched sites forced off,
    /// state cleared — before the error is returned; it is never retried,
    /// since a mid-route failure leaves site state ambiguous.
    pub fn step(&mut self) -> EngineResult<StepOutcome> {
        let ticking = match &self.run {
            None => return Ok(StepOutcome::Idle),
            Some(run) => run.tick.0 < run.pass_stop,
        };
        if ticking {
            self.execute_tick()
        } else {
            self.pass_boundary()
        }
    }

    /// Cancel the run in progress: force every touched site off, clear run
    /// state, return to idle.  Idempotent; a no-op when already idle.
    pub fn cancel(&mut self) {
        if self.run.is_some() {
            debug!("run cancelled");
            self.abort();
        }
    }

    /// Drive the run to completion: `start`, then `step` once per
    /// `timer.wait()` (first tick immediate with
    /// [`IntervalTimer`][crate::IntervalTimer]).
    ///
    /// Returns exactly one terminal result per invocation: the run summary
    /// on success, or the first error after forced teardown.
    pub fn run<T: TickTimer, O: RunObserver>(
        &mut self,
        routes: RouteSet,
        config: ExecuteConfig,
        timer: &mut T,
        observer: &mut O,
    ) -> EngineResult<RunSummary> {
        self.start(routes, config)?;
        loop {
            timer.wait();
            match self.step()? {
                StepOutcome::Ticked(tick) => observer.on_tick(tick),
                StepOutcome::PassComplete { completed_passes } => {
                    observer.on_pass_end(completed_passes);
                }
                StepOutcome::Completed(summary) => {
                    observer.on_run_end(&summary);
                    return Ok(summary);
                }
                // Unreachable once `start` has succeeded; keeps `run` total
                // without panicking.
                StepOutcome::Idle => {
                    return Err(EngineError::Config(DmfError::Config(
                        "no run in progress".into(),
                    )));
                }
            }
        }
    }

    // ── Tick execution ────────────────────────────────────────────────────

    fn execute_tick(&mut self) -> EngineResult<StepOutcome> {
        let Some(run) = self.run.as_mut() else {
            return Ok(StepOutcome::Idle);
        };

        let tick = run.tick;
        let now_on = aggregate::active_sites(&run.routes, tick, run.trail_length);
        let changes = aggregate::changed_states(&run.on_now, &now_on);
        debug!("{tick}: {} sites active, {} changed", now_on.len(), changes.len());

        // One emission per tick, even when nothing changed, so the sink sees
        // every tick in order.
        match self.sink.apply_site_states(&changes, false) {
            Ok(()) => {
                run.touched.extend(now_on.iter().copied());
                run.on_now = now_on;
                run.tick.advance();
                run.total_ticks += 1;
                Ok(StepOutcome::Ticked(tick))
            }
            Err(e) => {
                self.abort();
                Err(e.into())
            }
        }
    }

    // ── Pass boundary ─────────────────────────────────────────────────────

    fn pass_boundary(&mut self) -> EngineResult<StepOutcome> {
        let Some(run) = self.run.as_mut() else {
            return Ok(StepOutcome::Idle);
        };

        let elapsed = run.started.elapsed();
        if run.pass_stop > 0 {
            run.passes_done += 1;
        }
        let completed_passes = run.passes_done;

        if run.policy.should_repeat(elapsed, run.repeat_i) {
            let mut next = run.routes.clone();
            next.retain_cyclic();

            // Acyclic routes have reached their terminal position and are
            // dropped; with no cyclic route left there is nothing to replay.
            if !next.is_empty() {
                let off = aggregate::forced_off(&run.on_now);
                if !off.is_empty() {
                    match self.sink.apply_site_states(&off, false) {
                        Ok(()) => {}
                        Err(e) => {
                            self.abort();
                            return Err(e.into());
                        }
                    }
                }

                debug!(
                    "pass {completed_passes} complete; repeating with {} cyclic routes",
                    next.len()
                );
                run.pass_stop = pass_stop_for(&next, run.trail_length);
                run.routes = next;
                run.on_now.clear();
                run.tick = Tick::ZERO;
                run.repeat_i += 1;
                return Ok(StepOutcome::PassComplete { completed_passes });
            }
        }

        match self.run.take() {
            None => Ok(StepOutcome::Idle),
            Some(run) => self.finish(run).map(StepOutcome::Completed),
        }
    }

    /// Normal-completion teardown: force all touched sites off, then report.
    fn finish(&mut self, run: RunState) -> EngineResult<RunSummary> {
        if !run.touched.is_empty() {
            let off = aggregate::forced_off(&run.touched);
            self.sink.apply_site_states(&off, false)?;
        }

        let summary = RunSummary {
            started_at:    run.started_wall,
            touched_sites: run.touched,
            ticks:         run.total_ticks,
            passes:        run.passes_done,
        };
        info!(
            "completed routes ({} passes, {} ticks in {:.1?})",
            summary.passes,
            summary.ticks,
            run.started.elapsed()
        );
        Ok(summary)
    }

    /// Shared teardown for cancellation and failure: best-effort forced-off,
    /// run state dropped.
    fn abort(&mut self) {
        if let Some(run) = self.run.take() {
            if !run.touched.is_empty() {
                let off = aggregate::forced_off(&run.touched);
                if let Err(e) = self.sink.apply_site_states(&off, false) {
                    warn!("could not deactivate sites during teardown: {e}");
                }
            }
        }
    }
}
