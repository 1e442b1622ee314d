//! Types for reporting errors that happened while running the application.

use crate::core::greeting::greeting_service::GreetingError;

/// An error from the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// Greeting failed.
    #[error(transparent)]
    Greeting(#[from] GreetingError),
    /// Serde json error.
    #[error("serde json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The greeting could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The result of calling application-level functions.
pub type AppResult<T> = Result<T, AppError>;
