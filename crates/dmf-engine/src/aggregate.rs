//! The state aggregator: per-route windows → one site-state map per tick.
//!
//! The same physical site may appear in more than one logical route (or more
//! than once within a single route), so per-route desires can disagree.  The
//! merge is a plain set union of every route's active sites, which realizes
//! the conflict rule by construction: a site is **on** if *any* route wants
//! it on, and transitions to **off** only when no route wants it any more.
//!
//! Emitted maps contain only sites whose state changed since the previous
//! tick, bounding the actuation collaborator's per-tick work.

use std::collections::{BTreeMap, BTreeSet};

use dmf_core::{SiteId, Tick};
use dmf_route::RouteSet;

use crate::window::active_positions;

/// Actuation-site states to apply this tick (`true` = active).
///
/// Ordered map so emissions are deterministic and assertable.
pub type SiteStateMap = BTreeMap<SiteId, bool>;

/// Union of all routes' active sites at `tick`.
pub fn active_sites(set: &RouteSet, tick: Tick, trail_length: u32) -> BTreeSet<SiteId> {
    let mut on = BTreeSet::new();
    for entry in set.iter() {
        let positions = active_positions(tick, trail_length, entry.route.len(), entry.cyclic);
        for position in positions {
            if let Some(site) = entry.route.site_at(position) {
                on.insert(site);
            }
        }
    }
    on
}

/// Diff two consecutive on-sets into a changed-sites-only state map.
pub fn changed_states(previous: &BTreeSet<SiteId>, current: &BTreeSet<SiteId>) -> SiteStateMap {
    let mut map = SiteStateMap::new();
    for &site in current.difference(previous) {
        map.insert(site, true);
    }
    for &site in previous.difference(current) {
        map.insert(site, false);
    }
    map
}

/// Map forcing every given site off, regardless of previous state.
///
/// Used for teardown on completion, cancellation, and failure.
pub fn forced_off(sites: &BTreeSet<SiteId>) -> SiteStateMap {
    sites.iter().map(|&site| (site, false)).collect()
}
