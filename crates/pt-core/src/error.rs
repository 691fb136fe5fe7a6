//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `PtError` as one variant
//! via `From` where they need to surface it.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `pt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum PtError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `pt-*` crates.
pub type PtResult<T> = Result<T, PtError>;
