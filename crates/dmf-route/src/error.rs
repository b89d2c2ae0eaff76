use dmf_core::RouteId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Missing columns, non-contiguous positions, empty routes, and other
    /// structural defects in a route table.
    #[error("malformed route table: {0}")]
    Malformed(String),

    #[error("duplicate route id {0}")]
    DuplicateRoute(RouteId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
