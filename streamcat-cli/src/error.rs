use thiserror::Error;

/// Errors that end a CLI invocation with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database could not be opened or written
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Seed file could not be read
    #[error("Import error: {0}")]
    Import(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }
}
