use crate::shared::errors::{AppError, AppResult};
use reqwest::StatusCode;
use std::time::Duration;

/// Common HTTP response handler for external sources
/// Eliminates duplicate status handling code
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    /// Handle HTTP response status codes consistently across sources
    pub fn handle_response_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                provider_name
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                provider_name
            ))),
            StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized(format!(
                "Unauthorized access to {} API",
                provider_name
            ))),
            StatusCode::FORBIDDEN => Err(AppError::Unauthorized(format!(
                "Access forbidden to {} API",
                provider_name
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable",
                provider_name
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                provider_name, status
            ))),
        }
    }

    /// Create an HTTP client with consistent configuration.
    ///
    /// The request timeout doubles as the per-branch timeout for the
    /// aggregation joins: an expired request surfaces as a transport
    /// error and the operation falls back, so one slow source cannot
    /// stall a whole join.
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }
}
