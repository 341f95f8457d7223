//! Error types for the search engine.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the search engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The coordinate or distance source cannot back a search space.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operator was asked for an impossible index sample.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A declared capability with no implementation behind it.
    #[error("operator `{0}` is not implemented")]
    Unimplemented(&'static str),

    /// An internal consistency check failed; the run is aborted.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// I/O failure while loading a coordinate file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
