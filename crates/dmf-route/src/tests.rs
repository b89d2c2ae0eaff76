//! Unit tests for dmf-route.

use std::io::Cursor;

use dmf_core::{RouteId, SiteId};

use crate::{
    MemoryStore, Route, RouteError, RouteFilter, RouteSelection, RouteSet, RouteStore,
    RouteTable, Transition, load_table_reader, write_table_writer,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn sites(ids: &[u32]) -> Vec<SiteId> {
    ids.iter().map(|&i| SiteId(i)).collect()
}

/// Table with an acyclic route 0 (10→11→12) and a cyclic route 1 (20→21→20).
fn two_route_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.add_route(sites(&[10, 11, 12])).unwrap();
    table.add_route(sites(&[20, 21, 20])).unwrap();
    table
}

// ── Route ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::*;

    #[test]
    fn from_sites_assigns_contiguous_positions() {
        let r = Route::from_sites(RouteId(0), sites(&[5, 6, 7])).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.site_at(0), Some(SiteId(5)));
        assert_eq!(r.site_at(2), Some(SiteId(7)));
        assert_eq!(r.site_at(3), None);
    }

    #[test]
    fn empty_route_rejected() {
        assert!(matches!(
            Route::from_sites(RouteId(0), vec![]),
            Err(RouteError::Malformed(_))
        ));
    }

    #[test]
    fn from_transitions_accepts_any_row_order() {
        let r = Route::from_transitions(
            RouteId(3),
            vec![
                Transition { position: 2, site: SiteId(9) },
                Transition { position: 0, site: SiteId(7) },
                Transition { position: 1, site: SiteId(8) },
            ],
        )
        .unwrap();
        assert_eq!(r.site_at(0), Some(SiteId(7)));
        assert_eq!(r.site_at(2), Some(SiteId(9)));
    }

    #[test]
    fn non_contiguous_positions_rejected() {
        let result = Route::from_transitions(
            RouteId(0),
            vec![
                Transition { position: 0, site: SiteId(1) },
                Transition { position: 2, site: SiteId(2) },
            ],
        );
        assert!(matches!(result, Err(RouteError::Malformed(_))));
    }

    #[test]
    fn cycle_classifier() {
        let acyclic = Route::from_sites(RouteId(0), sites(&[1, 2, 3])).unwrap();
        let cyclic = Route::from_sites(RouteId(1), sites(&[1, 2, 1])).unwrap();
        assert!(!acyclic.is_cyclic());
        assert!(cyclic.is_cyclic());
    }

    #[test]
    fn single_transition_route_is_cyclic() {
        let r = Route::from_sites(RouteId(0), sites(&[4])).unwrap();
        assert!(r.is_cyclic());
    }

    #[test]
    fn contains_site() {
        let r = Route::from_sites(RouteId(0), sites(&[1, 2, 3])).unwrap();
        assert!(r.contains_site(SiteId(2)));
        assert!(!r.contains_site(SiteId(9)));
    }
}

// ── RouteTable ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use super::*;

    #[test]
    fn add_route_assigns_sequential_ids() {
        let mut table = RouteTable::new();
        assert_eq!(table.add_route(sites(&[1, 2])).unwrap(), RouteId(0));
        assert_eq!(table.add_route(sites(&[3, 4])).unwrap(), RouteId(1));
    }

    #[test]
    fn add_route_uses_max_plus_one_after_removal() {
        let mut table = two_route_table();
        // Remove route 0; next ID is still max + 1 = 2, never a reused 0.
        table.clear_routes(Some(SiteId(10)));
        assert_eq!(table.add_route(sites(&[1])).unwrap(), RouteId(2));
    }

    #[test]
    fn clear_by_site_removes_whole_routes_and_preserves_others() {
        let mut table = two_route_table();
        let untouched = table.get(RouteId(1)).unwrap().clone();

        let removed = table.clear_routes(Some(SiteId(11)));
        assert_eq!(removed, 1);
        assert!(table.get(RouteId(0)).is_none());
        // The surviving route is exactly as it was.
        assert_eq!(table.get(RouteId(1)), Some(&untouched));
    }

    #[test]
    fn clear_by_absent_site_is_a_no_op() {
        let mut table = two_route_table();
        assert_eq!(table.clear_routes(Some(SiteId(99))), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn clear_all() {
        let mut table = two_route_table();
        assert_eq!(table.clear_routes(None), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn from_routes_rejects_duplicate_ids() {
        let a = Route::from_sites(RouteId(0), sites(&[1])).unwrap();
        let b = Route::from_sites(RouteId(0), sites(&[2])).unwrap();
        assert!(matches!(
            RouteTable::from_routes(vec![a, b]),
            Err(RouteError::DuplicateRoute(RouteId(0)))
        ));
    }
}

// ── RouteSet selection ───────────────────────────────────────────────────────

#[cfg(test)]
mod select {
    use super::*;

    #[test]
    fn default_selection_takes_everything() {
        let set = RouteSet::select(&two_route_table(), &RouteSelection::default());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn by_route_filter() {
        let selection = RouteSelection {
            filter: RouteFilter::ByRoute(RouteId(1)),
            ..Default::default()
        };
        let set = RouteSet::select(&two_route_table(), &selection);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().route.id(), RouteId(1));
    }

    #[test]
    fn by_site_filter() {
        let selection = RouteSelection {
            filter: RouteFilter::BySite(SiteId(11)),
            ..Default::default()
        };
        let set = RouteSet::select(&two_route_table(), &selection);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().route.id(), RouteId(0));
    }

    #[test]
    fn inclusion_flags_split_by_class() {
        let cyclic_only = RouteSelection {
            include_acyclic: false,
            ..Default::default()
        };
        let set = RouteSet::select(&two_route_table(), &cyclic_only);
        assert_eq!(set.len(), 1);
        assert!(set.iter().next().unwrap().cyclic);

        let acyclic_only = RouteSelection {
            include_cyclic: false,
            ..Default::default()
        };
        let set = RouteSet::select(&two_route_table(), &acyclic_only);
        assert_eq!(set.len(), 1);
        assert!(!set.iter().next().unwrap().cyclic);
    }

    #[test]
    fn retain_cyclic_drops_acyclic_entries() {
        let mut set = RouteSet::select(&two_route_table(), &RouteSelection::default());
        set.retain_cyclic();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().route.id(), RouteId(1));
    }

    #[test]
    fn max_route_len() {
        let mut table = two_route_table();
        table.add_route(sites(&[1, 2, 3, 4, 5])).unwrap();
        let set = RouteSet::select(&table, &RouteSelection::default());
        assert_eq!(set.max_route_len(), 5);
        assert_eq!(RouteSet::default().max_route_len(), 0);
    }
}

// ── CSV loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_grouped_rows_in_any_order() {
        let csv = "route_id,position,site\n\
                   1,1,21\n\
                   0,0,10\n\
                   1,0,20\n\
                   0,1,11\n\
                   1,2,20\n";
        let table = load_table_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(RouteId(0)).unwrap().site_at(1), Some(SiteId(11)));
        assert!(table.get(RouteId(1)).unwrap().is_cyclic());
    }

    #[test]
    fn missing_column_is_malformed() {
        let csv = "route_id,position\n0,0\n";
        assert!(matches!(
            load_table_reader(Cursor::new(csv)),
            Err(RouteError::Malformed(_))
        ));
    }

    #[test]
    fn gap_in_positions_is_malformed() {
        let csv = "route_id,position,site\n0,0,1\n0,2,3\n";
        assert!(matches!(
            load_table_reader(Cursor::new(csv)),
            Err(RouteError::Malformed(_))
        ));
    }

    #[test]
    fn write_then_load_round_trips() {
        let table = two_route_table();
        let mut buf = Vec::new();
        write_table_writer(&table, &mut buf).unwrap();
        let reloaded = load_table_reader(Cursor::new(buf)).unwrap();
        assert_eq!(reloaded, table);
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn starts_empty_and_round_trips() {
        let mut store = MemoryStore::default();
        assert!(store.get_routes().unwrap().is_empty());

        store.set_routes(two_route_table()).unwrap();
        assert_eq!(store.get_routes().unwrap().len(), 2);
    }
}
