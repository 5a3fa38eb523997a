//! Engine errors.
//!
//! The engine fails in exactly three ways. Every other input (empty text,
//! zero citations, missing translations) produces a well-defined empty
//! result instead of an error.

use thiserror::Error;

/// Errors returned by the slugger and the unit tree navigator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("slug '{slug}' is ambiguous between: {}", titles.join(", "))]
    Ambiguous { slug: String, titles: Vec<String> },
}
