//! Supervisor, CLI parsing, pretty-printer, and the interactive
//! input/output tasks for the entail reasoning engine.

mod config;
mod error;
mod input;
mod output;
mod pretty;
mod supervisor;

pub use config::{resolve, Config};
pub use error::{CliError, CliResult};
pub use supervisor::run;
