use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                404 => AppError::NotFound("External resource not found".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Not authorized to access external service".to_string())
                }
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
