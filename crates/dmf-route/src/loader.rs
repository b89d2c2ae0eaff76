//! CSV route-table exchange format.
//!
//! # CSV format
//!
//! One row per transition.  Positions within a route must form the
//! contiguous range `0..len` (any row order is accepted).
//!
//! ```csv
//! route_id,position,site
//! 0,0,10
//! 0,1,11
//! 0,2,12
//! 1,0,20
//! 1,1,21
//! 1,2,20
//! ```
//!
//! Route 1 above is cyclic (first site 20 == last site 20).
//!
//! Missing columns, unparsable fields, or non-contiguous positions are
//! reported as [`RouteError::Malformed`].

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use dmf_core::{RouteId, SiteId};

use crate::route::Transition;
use crate::{Route, RouteError, RouteResult, RouteTable};

// ── CSV record ───────────────────────────────────────────────────────────────

#[derive(Deserialize, Serialize)]
struct RouteRecord {
    route_id: u32,
    position: u32,
    site:     u32,
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Load a [`RouteTable`] from a CSV file.
pub fn load_table_csv(path: &Path) -> RouteResult<RouteTable> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_table_reader(file)
}

/// Like [`load_table_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_table_reader<R: Read>(reader: R) -> RouteResult<RouteTable> {
    // ── Parse CSV rows ───────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: BTreeMap<u32, Vec<Transition>> = BTreeMap::new();

    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| RouteError::Malformed(e.to_string()))?;
        by_route.entry(row.route_id).or_default().push(Transition {
            position: row.position,
            site:     SiteId(row.site),
        });
    }

    // ── Build one Route per group ────────────────────────────────────────
    let routes = by_route
        .into_iter()
        .map(|(id, transitions)| Route::from_transitions(RouteId(id), transitions))
        .collect::<RouteResult<Vec<Route>>>()?;

    RouteTable::from_routes(routes)
}

/// Write `table` to a CSV file in the exchange format above.
pub fn write_table_csv(table: &RouteTable, path: &Path) -> RouteResult<()> {
    let file = std::fs::File::create(path).map_err(RouteError::Io)?;
    write_table_writer(table, file)
}

/// Like [`write_table_csv`] but accepts any `Write` sink.
pub fn write_table_writer<W: Write>(table: &RouteTable, writer: W) -> RouteResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for route in table.routes() {
        for t in route.transitions() {
            csv_writer
                .serialize(RouteRecord {
                    route_id: route.id().raw(),
                    position: t.position,
                    site:     t.site.raw(),
                })
                .map_err(|e| RouteError::Malformed(e.to_string()))?;
        }
    }
    csv_writer.flush().map_err(RouteError::Io)?;
    Ok(())
}
