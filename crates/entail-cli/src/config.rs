//! Argument parsing, component selection, and address resolution.

use std::collections::HashSet;

use clap::Parser;

use crate::error::{CliError, CliResult};

const SCHEMES: &[&str] = &["sqlite://", "mysql://", "mariadb://", "postgresql://"];

#[derive(Parser)]
#[command(name = "entail")]
#[command(about = "A distributed deductive reasoning engine", long_about = None)]
struct Args {
    /// Database address (sqlite://, mysql://, mariadb://, postgresql://).
    /// With none given, a temporary sqlite file is created for the run.
    address: Option<String>,

    /// Comma-separated subset of {input, output, ds, egg} to run.
    #[arg(long, value_delimiter = ',')]
    only: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Input,
    Output,
    Ds,
    Egg,
}

impl Component {
    fn from_name(name: &str) -> Option<Component> {
        match name {
            "input" => Some(Component::Input),
            "output" => Some(Component::Output),
            "ds" => Some(Component::Ds),
            "egg" => Some(Component::Egg),
            _ => None,
        }
    }

    const ALL: [Component; 4] = [Component::Input, Component::Output, Component::Ds, Component::Egg];
}

pub struct Config {
    pub address: String,
    pub components: HashSet<Component>,
    /// Set when `address` was substituted rather than given explicitly,
    /// so the caller can log the chosen path the way the original did.
    pub address_was_generated: bool,
}

pub fn resolve() -> CliResult<Config> {
    let args = Args::parse();

    let components = match args.only {
        None => HashSet::from(Component::ALL),
        Some(names) => {
            let mut set = HashSet::new();
            for name in &names {
                let component = Component::from_name(name).ok_or_else(|| {
                    CliError::Usage(format!(
                        "unknown component '{}' (expected one of input, output, ds, egg)",
                        name
                    ))
                })?;
                set.insert(component);
            }
            set
        }
    };

    let (address, address_was_generated) = match args.address {
        Some(addr) => {
            validate_scheme(&addr)?;
            (addr, false)
        }
        None => (temp_sqlite_address()?, true),
    };

    Ok(Config {
        address,
        components,
        address_was_generated,
    })
}

fn validate_scheme(address: &str) -> CliResult<()> {
    if SCHEMES.iter().any(|scheme| address.starts_with(scheme)) {
        Ok(())
    } else {
        Err(CliError::Usage(format!(
            "unsupported database address: {}",
            address
        )))
    }
}

fn temp_sqlite_address() -> CliResult<String> {
    let file = tempfile::NamedTempFile::new()?;
    // Keep the file from being deleted when `file` drops at the end of
    // this function — the store needs the path to persist for the run.
    let (_, path) = file.keep().map_err(|e| CliError::Io(e.error))?;
    Ok(format!("sqlite://{}", path.display()))
}
