use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command `{command}` could not be started: {source}")]
    CommandUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn command_unavailable<S: Into<String>>(command: S, source: std::io::Error) -> Self {
        Error::CommandUnavailable { command: command.into(), source }
    }

    pub(crate) fn command_failed<S: Into<String>>(command: S, status: ExitStatus) -> Self {
        Error::CommandFailed { command: command.into(), status }
    }

    pub(crate) fn invalid_data<S: Into<String>>(msg: S) -> Self {
        Error::InvalidData(msg.into())
    }

    pub(crate) fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for pice operations
pub type Result<T> = std::result::Result<T, Error>;
