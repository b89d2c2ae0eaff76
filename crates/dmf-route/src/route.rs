//! Core route types: `Transition` and `Route`.
//!
//! # Invariants
//!
//! A `Route` always holds at least one transition, and transition positions
//! are contiguous `0..len`.  Both constructors enforce this, so every
//! `Route` in circulation satisfies the invariant — the execution engine
//! indexes positions directly without re-checking.

use dmf_core::{RouteId, SiteId};

use crate::{RouteError, RouteResult};

// ── Transition ───────────────────────────────────────────────────────────────

/// One step of a droplet route: the actuation site occupied at a given
/// zero-based position along the path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Zero-based position within the route.
    pub position: u32,
    /// The actuation site occupied at this position.
    pub site: SiteId,
}

// ── Route ────────────────────────────────────────────────────────────────────

/// An ordered path of actuation sites a droplet should traverse.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    id: RouteId,
    /// Transitions sorted ascending by position, positions `0..len`.
    transitions: Vec<Transition>,
}

impl Route {
    /// Build a route from an ordered list of sites; positions are assigned
    /// `0, 1, 2, …` in list order.
    pub fn from_sites(id: RouteId, sites: Vec<SiteId>) -> RouteResult<Self> {
        if sites.is_empty() {
            return Err(RouteError::Malformed(format!("route {id} has no transitions")));
        }
        let transitions = sites
            .into_iter()
            .enumerate()
            .map(|(i, site)| Transition { position: i as u32, site })
            .collect();
        Ok(Self { id, transitions })
    }

    /// Build a route from explicit (position, site) pairs, e.g. rows loaded
    /// from a CSV table.  Rows may arrive in any order; positions must form
    /// the contiguous range `0..len`.
    pub fn from_transitions(id: RouteId, mut transitions: Vec<Transition>) -> RouteResult<Self> {
        if transitions.is_empty() {
            return Err(RouteError::Malformed(format!("route {id} has no transitions")));
        }
        transitions.sort_unstable_by_key(|t| t.position);
        for (i, t) in transitions.iter().enumerate() {
            if t.position != i as u32 {
                return Err(RouteError::Malformed(format!(
                    "route {id}: expected position {i}, found {}",
                    t.position
                )));
            }
        }
        Ok(Self { id, transitions })
    }

    #[inline]
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Number of transitions.  Always ≥ 1.
    #[inline]
    pub fn len(&self) -> u32 {
        self.transitions.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // invariant: len >= 1
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Site occupied at `position`, or `None` past the end of the route.
    #[inline]
    pub fn site_at(&self, position: u32) -> Option<SiteId> {
        self.transitions.get(position as usize).map(|t| t.site)
    }

    /// `true` if any transition of this route occupies `site`.
    pub fn contains_site(&self, site: SiteId) -> bool {
        self.transitions.iter().any(|t| t.site == site)
    }

    /// The cycle classifier: a route is cyclic iff the site at position 0
    /// equals the site at the last position.  A single-transition route is
    /// trivially cyclic.
    pub fn is_cyclic(&self) -> bool {
        self.transitions[0].site == self.transitions[self.transitions.len() - 1].site
    }
}
