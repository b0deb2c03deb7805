// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] crate::port::RepositoryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
