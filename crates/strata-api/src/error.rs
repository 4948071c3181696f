//! Error types for the platform API client.

/// Platform API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Authentication failed or token invalid.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Endpoint or organization not found.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Platform-side failure (5xx).
    #[error("platform error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status.
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Network error.
    #[error("network error: {message}")]
    Network { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for platform API operations.
pub type ApiResult<T> = Result<T, ApiError>;
