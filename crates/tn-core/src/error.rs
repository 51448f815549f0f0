//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TnError` as one variant
//! via `#[from]`, so range violations raised here propagate with `?`.

use thiserror::Error;

/// The base error type for `tn-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TnError {
    /// A value fell outside its permitted range (e.g. a negative length).
    #[error("range error: {0}")]
    Range(String),
}

/// Shorthand result type for all `tn-*` crates.
pub type TnResult<T> = Result<T, TnError>;
