//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `EmsError` as one
//! variant where they need to surface configuration failures.

use thiserror::Error;

/// The base error type for `ems-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum EmsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ems-core`.
pub type EmsResult<T> = Result<T, EmsError>;
