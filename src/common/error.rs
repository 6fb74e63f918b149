//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every error is a malformed *request*: each one is detected before a
/// simulation starts, so a run that begins never fails midway. There is no
/// retry or partial-run recovery path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested frame capacity cannot hold any page.
    #[error("invalid frame capacity {0}: must be at least 1")]
    InvalidCapacity(usize),

    /// The reference trace has no elements, so rates are undefined.
    #[error("reference trace is empty")]
    EmptyTrace,

    /// The policy selector does not name one of the defined variants.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
