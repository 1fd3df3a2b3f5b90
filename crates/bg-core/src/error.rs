//! Core error type.
//!
//! `bg-driver` and `bg-sim` define their own error enums; `bg-sim` wraps
//! `CoreError` as one variant via `From`.

use thiserror::Error;

/// Errors raised by `bg-core` types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
