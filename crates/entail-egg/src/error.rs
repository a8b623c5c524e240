//! Error types for the EGG engine.

use std::fmt;

#[derive(Debug)]
pub enum EggError {
    /// A row read back from the store failed to parse as a rule.
    MalformedRow(entail_term::TermError),
    Store(entail_store::StoreError),

    /// An internal invariant the driver loop relies on did not hold —
    /// e.g. a rule this process yielded itself failed to round-trip
    /// through its own canonical form. Treated as fatal by the
    /// supervisor rather than retried.
    Invariant(String),
}

impl fmt::Display for EggError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EggError::MalformedRow(e) => write!(f, "malformed rule row: {}", e),
            EggError::Store(e) => write!(f, "store error: {}", e),
            EggError::Invariant(msg) => write!(f, "internal invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for EggError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EggError::MalformedRow(e) => Some(e),
            EggError::Store(e) => Some(e),
            EggError::Invariant(_) => None,
        }
    }
}

impl From<entail_term::TermError> for EggError {
    fn from(e: entail_term::TermError) -> Self {
        EggError::MalformedRow(e)
    }
}

impl From<entail_store::StoreError> for EggError {
    fn from(e: entail_store::StoreError) -> Self {
        EggError::Store(e)
    }
}

pub type EggResult<T> = Result<T, EggError>;
