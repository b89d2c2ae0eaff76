//! Remote command surface — the shape the engine exposes to a message bus.
//!
//! Each command is a thin adapter over one core operation: the table edits
//! go through a [`RouteStore`], and `execute_routes` snapshots a selection
//! and drives the executor to completion.  Transport (sockets, queues,
//! encodings beyond the serde derives) is the host's business.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use dmf_core::{ExecuteConfig, RouteId, SiteId};
use dmf_route::{RouteFilter, RouteSelection, RouteSet, RouteStore, RouteTable};

use crate::observer::NoopObserver;
use crate::scheduler::{RouteExecutor, RunSummary};
use crate::sink::ActuationSink;
use crate::timer::TickTimer;
use crate::EngineResult;

// ── Commands ─────────────────────────────────────────────────────────────────

/// A remotely issued route operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum RouteCommand {
    /// Append a route built from an ordered site list; the next unused route
    /// ID is assigned.
    AddRoute { sites: Vec<SiteId> },

    /// Fetch the current route table.
    GetRoutes,

    /// Remove every route containing `site`, or all routes when `None`.
    ClearRoutes { site: Option<SiteId> },

    /// Execute a selection of the stored routes to completion.
    ///
    /// `route` narrows to a single route ID and takes precedence over
    /// `site`, which narrows to routes containing that site.
    /// `transition_interval_ms` overrides the configured interval for this
    /// invocation only.
    ExecuteRoutes {
        route: Option<RouteId>,
        site: Option<SiteId>,
        transition_interval_ms: Option<u64>,
    },
}

/// Reply to one [`RouteCommand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum CommandReply {
    RouteAdded { route: RouteId, table: RouteTable },
    Routes { table: RouteTable },
    RoutesCleared { removed: usize, table: RouteTable },
    Executed { summary: RunSummary },
}

// ── Dispatch ─────────────────────────────────────────────────────────────────

/// Execute one command against the host's store and the executor.
///
/// `base_config` supplies the step's execution settings; `execute_routes`
/// may override the transition interval per invocation.
pub fn dispatch_command<St, Sk, T>(
    command: RouteCommand,
    store: &mut St,
    executor: &mut RouteExecutor<Sk>,
    timer: &mut T,
    base_config: &ExecuteConfig,
) -> EngineResult<CommandReply>
where
    St: RouteStore,
    Sk: ActuationSink,
    T: TickTimer,
{
    match command {
        RouteCommand::AddRoute { sites } => {
            let mut table = store.get_routes()?;
            let route = table.add_route(sites)?;
            store.set_routes(table.clone())?;
            Ok(CommandReply::RouteAdded { route, table })
        }

        RouteCommand::GetRoutes => Ok(CommandReply::Routes { table: store.get_routes()? }),

        RouteCommand::ClearRoutes { site } => {
            let mut table = store.get_routes()?;
            let removed = table.clear_routes(site);
            store.set_routes(table.clone())?;
            Ok(CommandReply::RoutesCleared { removed, table })
        }

        RouteCommand::ExecuteRoutes { route, site, transition_interval_ms } => {
            let table = store.get_routes()?;
            let filter = match (route, site) {
                (Some(id), _)   => RouteFilter::ByRoute(id),
                (None, Some(s)) => RouteFilter::BySite(s),
                (None, None)    => RouteFilter::All,
            };
            let selection = RouteSelection { filter, ..Default::default() };
            let set = RouteSet::select(&table, &selection);

            let mut config = base_config.clone();
            if let Some(ms) = transition_interval_ms {
                config.transition_interval = Duration::from_millis(ms);
            }

            let summary = executor.run(set, config, timer, &mut NoopObserver)?;
            Ok(CommandReply::Executed { summary })
        }
    }
}
