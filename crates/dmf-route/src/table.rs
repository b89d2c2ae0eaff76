//! `RouteTable` — the editable collection of routes for one experiment step.
//!
//! The table is the unit the host persists and the remote command surface
//! edits.  Execution never mutates a table: a run takes an immutable
//! [`RouteSet`][crate::RouteSet] snapshot instead.

use dmf_core::{RouteId, SiteId};

use crate::{Route, RouteError, RouteResult};

/// An ordered collection of routes with unique IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pre-constructed routes, rejecting duplicate IDs.
    pub fn from_routes(routes: Vec<Route>) -> RouteResult<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for route in &routes {
            if !seen.insert(route.id()) {
                return Err(RouteError::DuplicateRoute(route.id()));
            }
        }
        Ok(Self { routes })
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }

    /// Append a new route built from an ordered site list, assigning the
    /// next unused route ID (`max existing + 1`, or 0 for an empty table).
    ///
    /// Returns the assigned ID.
    pub fn add_route(&mut self, sites: Vec<SiteId>) -> RouteResult<RouteId> {
        let id = self
            .routes
            .iter()
            .map(|r| r.id().raw())
            .max()
            .map_or(RouteId(0), |m| RouteId(m + 1));
        self.routes.push(Route::from_sites(id, sites)?);
        Ok(id)
    }

    /// Remove routes from the table.
    ///
    /// With `Some(site)`, every route containing that site is removed whole
    /// and all other routes are left untouched.  With `None`, the table is
    /// emptied.  Returns the number of routes removed.
    pub fn clear_routes(&mut self, site: Option<SiteId>) -> usize {
        let before = self.routes.len();
        match site {
            None => self.routes.clear(),
            Some(site) => self.routes.retain(|r| !r.contains_site(site)),
        }
        before - self.routes.len()
    }
}
