//! roster-cli library
//!
//! Argument parsing, logger setup and command execution, exported so the
//! binary stays thin and tests can drive commands against a mock store.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{build_model, execute, load_config};
