//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::{dispatch, execute_command, parse_command, report_error, run};
pub use error::{CliError, CliResult};
