//! Error types for the store facade.

use std::fmt;

/// Errors the store facade can raise.
#[derive(Debug)]
pub enum StoreError {
    /// The database address used a scheme we don't recognize.
    UnsupportedScheme(String),

    /// The underlying driver rejected the connection or a query.
    ///
    /// This is the transport-error case from the error handling
    /// design: it propagates to the calling engine's tick, which
    /// aborts — it is never retried silently.
    Transport(sqlx::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnsupportedScheme(addr) => {
                write!(f, "unsupported database address scheme: '{}'", addr)
            }
            StoreError::Transport(e) => write!(f, "store transport error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Transport(e) => Some(e),
            StoreError::UnsupportedScheme(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Transport(e)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
