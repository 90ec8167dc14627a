use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid page transition: {0}")]
    InvalidTransition(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TransportError(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            AppError::TransportError(format!("Failed to connect to search service: {}", err))
        } else if let Some(status) = err.status() {
            AppError::TransportError(format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            AppError::SerializationError(format!("Invalid response body: {}", err))
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::SerializationError(format!("Invalid CSV: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl AppError {
    /// True for failures of the outbound search call itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::TransportError(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
