use dmf_core::DmfError;
use dmf_route::RouteError;
use thiserror::Error;

use crate::sink::ActuationError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Rejected before the first tick — surfaced synchronously by `start`.
    #[error("invalid configuration: {0}")]
    Config(#[from] DmfError),

    /// The actuation collaborator rejected a state map mid-run.  The run is
    /// already torn down (touched sites forced off) when this is returned.
    #[error("actuation failure: {0}")]
    Actuation(#[from] ActuationError),

    /// Route table defects, surfaced through the command adapter.
    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type EngineResult<T> = Result<T, EngineError>;
