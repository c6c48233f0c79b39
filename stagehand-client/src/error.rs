//! Error types for the platform client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the remote platform API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform rejected the supplied credential
    #[error("Credential rejected by platform: {0}")]
    Auth(String),

    /// Platform returned a non-auth error status code
    #[error("Platform API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the platform
        message: String,
    },

    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse response body
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ClientError {
    /// Classify a non-2xx response into `Auth` vs `Api`.
    ///
    /// 401 means the credential itself was rejected; 403 means it is valid
    /// but not allowed to touch the resource. Both are credential problems
    /// from the caller's point of view.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth(message),
            _ => Self::Api { status, message },
        }
    }

    /// Check if this error means the credential was rejected
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
