//! Run selection: which routes from a table participate in one execution.
//!
//! The host selects routes with a [`RouteSelection`] — a tagged filter plus
//! cyclic/acyclic inclusion flags — and the engine receives the resulting
//! [`RouteSet`]: an immutable per-run snapshot in which each route's length
//! and cyclic flag are computed once, up front.

use dmf_core::{RouteId, SiteId};

use crate::{Route, RouteTable};

// ── RouteFilter / RouteSelection ─────────────────────────────────────────────

/// Which routes of a table to pick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteFilter {
    /// Every route in the table.
    #[default]
    All,
    /// Only the route with this ID.
    ByRoute(RouteId),
    /// Every route that contains this actuation site.
    BySite(SiteId),
}

/// A filter combined with cyclic/acyclic inclusion flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSelection {
    pub filter: RouteFilter,
    pub include_cyclic: bool,
    pub include_acyclic: bool,
}

impl Default for RouteSelection {
    /// Everything: all routes, cyclic and acyclic alike.
    fn default() -> Self {
        Self {
            filter:          RouteFilter::All,
            include_cyclic:  true,
            include_acyclic: true,
        }
    }
}

impl RouteSelection {
    fn admits(&self, route: &Route) -> bool {
        let filter_ok = match self.filter {
            RouteFilter::All          => true,
            RouteFilter::ByRoute(id)  => route.id() == id,
            RouteFilter::BySite(site) => route.contains_site(site),
        };
        let class_ok = if route.is_cyclic() {
            self.include_cyclic
        } else {
            self.include_acyclic
        };
        filter_ok && class_ok
    }
}

// ── RouteSet ─────────────────────────────────────────────────────────────────

/// One route of a run, with its cyclic flag classified at selection time.
#[derive(Clone, Debug)]
pub struct RunRoute {
    pub route:  Route,
    pub cyclic: bool,
}

/// The immutable set of routes for one execution run.
///
/// Built fresh per run and discarded on completion or cancellation.  The
/// only mutation the engine performs is [`retain_cyclic`][Self::retain_cyclic]
/// at a repeat-pass boundary, which shrinks the set to the routes eligible
/// for replay.
#[derive(Clone, Debug, Default)]
pub struct RouteSet {
    entries: Vec<RunRoute>,
}

impl RouteSet {
    /// Snapshot the routes of `table` admitted by `selection`.
    pub fn select(table: &RouteTable, selection: &RouteSelection) -> Self {
        let entries = table
            .routes()
            .iter()
            .filter(|r| selection.admits(r))
            .map(|r| RunRoute { route: r.clone(), cyclic: r.is_cyclic() })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunRoute> {
        self.entries.iter()
    }

    /// Drop acyclic routes.  Called at repeat-pass boundaries: acyclic
    /// routes have reached their terminal position and are never replayed.
    pub fn retain_cyclic(&mut self) {
        self.entries.retain(|e| e.cyclic);
    }

    /// Longest route length in the set, or 0 when empty.
    pub fn max_route_len(&self) -> u32 {
        self.entries.iter().map(|e| e.route.len()).max().unwrap_or(0)
    }
}
