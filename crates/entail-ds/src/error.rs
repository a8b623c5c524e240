//! Error types for the DS engine.

use std::fmt;

/// Errors the DS driver loop can raise.
#[derive(Debug)]
pub enum DsError {
    /// A row read back from the store failed to parse as a rule.
    ///
    /// Rows in `facts`/`ideas` are only ever written in canonical
    /// form by code in this workspace, so this should never happen
    /// against a store this workspace wrote; it's kept as a variant
    /// rather than an `unwrap()` so a corrupted or foreign database
    /// fails the tick instead of panicking the process.
    MalformedRow(entail_term::TermError),

    /// The store itself failed (transport, disconnect, bad scheme).
    Store(entail_store::StoreError),

    /// An internal invariant the driver loop relies on did not hold —
    /// e.g. a rule this process derived itself failed to round-trip
    /// through its own canonical form. Treated as fatal by the
    /// supervisor rather than retried.
    Invariant(String),
}

impl fmt::Display for DsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DsError::MalformedRow(e) => write!(f, "malformed rule row: {}", e),
            DsError::Store(e) => write!(f, "store error: {}", e),
            DsError::Invariant(msg) => write!(f, "internal invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for DsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DsError::MalformedRow(e) => Some(e),
            DsError::Store(e) => Some(e),
            DsError::Invariant(_) => None,
        }
    }
}

impl From<entail_term::TermError> for DsError {
    fn from(e: entail_term::TermError) -> Self {
        DsError::MalformedRow(e)
    }
}

impl From<entail_store::StoreError> for DsError {
    fn from(e: entail_store::StoreError) -> Self {
        DsError::Store(e)
    }
}

pub type DsResult<T> = Result<T, DsError>;
