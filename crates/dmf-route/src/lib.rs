//! `dmf-route` — droplet route tables, run selection, and CSV loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`route`]   | `Transition`, `Route` (incl. the cycle classifier)      |
//! | [`table`]   | `RouteTable` — add/clear/lookup of whole routes         |
//! | [`select`]  | `RouteFilter`, `RouteSelection`, `RouteSet`             |
//! | [`store`]   | `RouteStore` trait, `MemoryStore`                       |
//! | [`loader`]  | `load_table_csv`, `load_table_reader`, `write_table_*`  |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                          |
//!
//! # Cycle model (summary)
//!
//! A route is **cyclic** iff its first and last actuation site coincide.
//! Cyclic routes may wrap past their final transition and are the only
//! routes eligible for repeat passes; acyclic routes execute exactly once.
//! The flag is computed once per route when a [`RouteSet`] is built and is
//! immutable for the lifetime of the run.

pub mod error;
pub mod loader;
pub mod route;
pub mod select;
pub mod store;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{load_table_csv, load_table_reader, write_table_csv, write_table_writer};
pub use route::{Route, Transition};
pub use select::{RouteFilter, RouteSelection, RouteSet, RunRoute};
pub use store::{MemoryStore, RouteStore};
pub use table::RouteTable;
