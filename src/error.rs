use crate::domain::DirectoryError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Telemetry error: {message}")]
    Telemetry { message: String },
}

impl Error {
    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::Telemetry {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
