//! Common types and utilities shared across the brave-search crates.
//!
//! - [`SearchError`] and [`Result`]: the one error type every failure path
//!   funnels into before the binary turns it into an exit status
//! - [`observability`]: centralised tracing/logging initialisation
//!
//! # Examples
//!
//! ```rust
//! use brave_common::{SearchError, ErrorKind};
//!
//! let err = SearchError::Usage("--count must be at least 1".into());
//! assert_eq!(err.kind(), ErrorKind::Usage);
//! assert_eq!(err.exit_code(), 1);
//! assert_eq!(err.to_string(), "--count must be at least 1");
//! ```
use brave_http::HttpError;

pub mod observability;

/// Process exit status for every handled failure.
pub const EXIT_FAILURE: i32 = 1;

/// Coarse classification of a [`SearchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad flag values; raised before any I/O.
    Usage,
    /// Missing or unusable credential; raised before any I/O.
    Config,
    /// Network, HTTP status or body decoding failure.
    Runtime,
}

/// Error types used across brave-search.
#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// Argument values out of bounds.
    #[error("{0}")]
    Usage(String),

    /// Configuration was incomplete or invalid.
    #[error("{0}")]
    Config(String),

    /// The HTTP exchange failed (transport, status or body).
    #[error("{0}")]
    Http(#[from] HttpError),

    /// A JSON document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Usage(_) => ErrorKind::Usage,
            SearchError::Config(_) => ErrorKind::Config,
            SearchError::Http(_) | SearchError::Json(_) => ErrorKind::Runtime,
        }
    }

    /// All kinds are terminal and share one status.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Convenient alias for results that use [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;
