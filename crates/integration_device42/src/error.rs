//! Device42 integration error types

use thiserror::Error;

/// Errors that can occur while validating or contacting a Device42 instance
#[derive(Debug, Error)]
pub enum Device42Error {
    /// The instance configuration is incomplete or unusable
    ///
    /// The message is shown verbatim to the operator configuring the
    /// integration, so `Display` carries it without any prefix.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// Credentials were rejected by the Device42 API (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Connection to the Device42 instance failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the Device42 API failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl Device42Error {
    /// Returns true if a later attempt could plausibly succeed
    ///
    /// Nothing in this crate retries; callers may use this to decide
    /// whether re-running the invocation is worthwhile.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::RateLimitExceeded
        )
    }
}
