//! API-specific error types
//!
//! Classifies failures of the three collaborator endpoints and keeps the
//! response body of non-2xx replies so it can be shown to an operator.

use tappal_domain::TappalError;
use thiserror::Error;

/// Categories of API errors for retry logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429) - retry with backoff
    RateLimit,
    /// Server errors (5xx) - retryable
    Server,
    /// Client errors (4xx except auth) - non-retryable
    Client,
    /// Network/connection errors - retryable
    Network,
    /// Bad configuration or unreadable payloads - non-retryable
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Rate limit exceeded: {body}")]
    RateLimit { body: String },

    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    #[error("Client error ({status}): {body}")]
    Client { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a non-2xx status, keeping the response body verbatim.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Auth { status, body },
            429 => Self::RateLimit { body },
            500..=599 => Self::Server { status, body },
            _ => Self::Client { status, body },
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth { .. } => ApiErrorCategory::Authentication,
            Self::RateLimit { .. } => ApiErrorCategory::RateLimit,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Decode(_) | Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check if this error is worth retrying at a higher level
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::RateLimit | ApiErrorCategory::Server | ApiErrorCategory::Network
        )
    }

    /// Get suggested retry delay in seconds
    pub fn retry_delay_secs(&self) -> u64 {
        match self.category() {
            ApiErrorCategory::RateLimit => 60,
            ApiErrorCategory::Server => 10,
            ApiErrorCategory::Network => 5,
            ApiErrorCategory::Authentication
            | ApiErrorCategory::Client
            | ApiErrorCategory::Config => 0,
        }
    }
}

impl From<TappalError> for ApiError {
    fn from(err: TappalError) -> Self {
        match err {
            TappalError::Network(msg) => Self::Network(msg),
            TappalError::Config(msg) => Self::Config(msg),
            TappalError::Http { status, body } => Self::from_status(status, body),
            TappalError::InvalidInput(msg) => Self::Decode(msg),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<ApiError> for TappalError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth { status, body }
            | ApiError::Server { status, body }
            | ApiError::Client { status, body } => Self::Http { status, body },
            ApiError::RateLimit { body } => Self::Http { status: 429, body },
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Decode(msg) => Self::InvalidInput(msg),
            ApiError::Config(msg) => Self::Config(msg),
        }
    }
}
