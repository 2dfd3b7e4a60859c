//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a core
//! operation (parsing a control name, validating a config) can fail.

use thiserror::Error;

/// The error type for `mob-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown control `{0}` (expected one of: move, look, jump, target)")]
    UnknownControl(String),

    #[error("control ordinal {0} is out of range")]
    ControlOutOfRange(usize),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mob-core`.
pub type CoreResult<T> = Result<T, CoreError>;
