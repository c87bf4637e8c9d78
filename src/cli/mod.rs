//! Command-line interface
//!
//! Argument parsing and the runner that wires config, client, and
//! processor together.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
