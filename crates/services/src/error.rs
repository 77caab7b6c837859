//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by evaluation backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvaluatorError {
    #[error("evaluation returned an empty response")]
    EmptyResponse,
    #[error("evaluation failed: {0}")]
    Rejected(String),
    #[error("evaluation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while parsing reveal pacing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RevealPaceError {
    #[error("reveal delay minimum {min_ms}ms exceeds maximum {max_ms}ms")]
    Inverted { min_ms: u64, max_ms: u64 },
    #[error("invalid reveal delay range: {raw}")]
    Malformed { raw: String },
}
