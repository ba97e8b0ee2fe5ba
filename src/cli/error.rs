//! CLI-level errors

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// No subcommand was given; reported as the usage block.
    #[error("no command given")]
    MissingCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingCommand
            | CliError::UnknownCommand(_)
            | CliError::Config(_)
            | CliError::Io(_) => crate::exitcode::FAILURE,
        }
    }

    /// Whether the error is reported on stdout rather than stderr.
    pub fn reports_on_stdout(&self) -> bool {
        matches!(self, CliError::MissingCommand | CliError::UnknownCommand(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_unknown_command_when_displayed_then_names_literal() {
        let err = CliError::UnknownCommand("foo".into());
        assert_eq!(err.to_string(), "Unknown command: foo");
        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
    }

    #[test]
    fn given_config_error_when_classified_then_goes_to_stderr() {
        let err = CliError::from(ConfigError {
            message: "bad".into(),
        });
        assert!(!err.reports_on_stdout());
        assert_eq!(err.to_string(), "config error: bad");
    }
}
