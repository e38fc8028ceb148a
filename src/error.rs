use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PortalError
{
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Unknown game '{0}'. Run with --help.")]
    UnknownGame(String),

    #[error("Unknown command '{0}'. Run with --help.")]
    UnknownCommand(String),

    #[error("{game} does not accept option '{option}'")]
    UnknownOption
    {
        game: &'static str,
        option: String,
    },

    #[error("Expected value after {0}")]
    MissingValue(String),

    #[error("{option} must be {expected}, got '{value}'")]
    InvalidValue
    {
        option: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid selection.")]
    InvalidSelection,

    #[error("failed to open log file {path}: {source}")]
    LogFile
    {
        path: String,
        source: io::Error,
    },
}
