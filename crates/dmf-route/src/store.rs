//! `RouteStore` — the seam to the host's per-step route persistence.
//!
//! The engine edits routes only through this trait, so the host decides
//! where tables actually live (step options, a database, a file).
//! [`MemoryStore`] is the in-process implementation used by tests and
//! standalone embeddings.

use crate::{RouteResult, RouteTable};

/// Read/write access to the route table of the current experiment step.
pub trait RouteStore {
    /// The current table (the empty table if none has been stored yet).
    fn get_routes(&self) -> RouteResult<RouteTable>;

    /// Replace the stored table.
    fn set_routes(&mut self, table: RouteTable) -> RouteResult<()>;
}

/// A `RouteStore` backed by a plain in-memory table.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    table: RouteTable,
}

impl MemoryStore {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }
}

impl RouteStore for MemoryStore {
    fn get_routes(&self) -> RouteResult<RouteTable> {
        Ok(self.table.clone())
    }

    fn set_routes(&mut self, table: RouteTable) -> RouteResult<()> {
        self.table = table;
        Ok(())
    }
}
