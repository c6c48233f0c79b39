//! Stagehand Platform Client
//!
//! HTTP client for the remote automation platform API.
//!
//! Every call is a single authenticated outbound request; retry policy lives
//! with the caller (the relay's run driver), never here.
//!
//! # Example
//!
//! ```no_run
//! use stagehand_client::PlatformClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stagehand_client::ClientError> {
//!     let client = PlatformClient::new("https://api.apify.com");
//!
//!     let user = client.validate_token("my-token").await?;
//!     println!("Token belongs to: {}", user.id);
//!     Ok(())
//! }
//! ```

mod actors;
pub mod error;
mod runs;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use runs::RunApi;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// The platform wraps every JSON response body in `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// HTTP client for the remote automation platform API
///
/// Provides methods for the endpoints the relay needs:
/// - Credential validation (`/v2/users/me`)
/// - Actor listing and detail (`/v2/acts`)
/// - Run lifecycle: start, status, dataset items (`/v2/actor-runs`)
#[derive(Debug, Clone)]
pub struct PlatformClient {
    /// Base URL of the platform API (e.g., "https://api.apify.com")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl PlatformClient {
    /// Create a new platform client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the platform API
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new platform client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the platform API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize an enveloped JSON body.
    pub(crate) async fn handle_enveloped<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let envelope: Envelope<T> = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Check the status code and deserialize a bare JSON body.
    ///
    /// Non-2xx responses are classified into `Auth` vs `Api` by status code.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::from_status(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PlatformClient::new("https://api.apify.com");
        assert_eq!(client.base_url(), "https://api.apify.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = PlatformClient::new("https://api.apify.com/");
        assert_eq!(client.base_url(), "https://api.apify.com");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = PlatformClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"data":{"id":"r1"}}"#).unwrap();
        assert_eq!(envelope.data["id"], "r1");
    }
}
