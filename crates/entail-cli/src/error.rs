//! Top-level error type the binary maps to an exit code.

use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// A bad `--only` component name, or an address with no
    /// recognized scheme. Exit code 2.
    Usage(String),
    Store(entail_store::StoreError),
    Ds(entail_ds::DsError),
    Egg(entail_egg::EggError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Store(e) => write!(f, "{}", e),
            CliError::Ds(e) => write!(f, "{}", e),
            CliError::Egg(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Usage(_) => None,
            CliError::Store(e) => Some(e),
            CliError::Ds(e) => Some(e),
            CliError::Egg(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl CliError {
    /// The process exit code this error should produce.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<entail_store::StoreError> for CliError {
    fn from(e: entail_store::StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<entail_ds::DsError> for CliError {
    fn from(e: entail_ds::DsError) -> Self {
        CliError::Ds(e)
    }
}

impl From<entail_egg::EggError> for CliError {
    fn from(e: entail_egg::EggError) -> Self {
        CliError::Egg(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

pub type CliResult<T> = Result<T, CliError>;
