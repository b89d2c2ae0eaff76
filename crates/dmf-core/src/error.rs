//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into `DmfError`
//! via `From` impls or wrap it as one variant.  Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `dmf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DmfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `dmf-*` crates.
pub type DmfResult<T> = Result<T, DmfError>;
