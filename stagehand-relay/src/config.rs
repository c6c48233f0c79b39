//! Relay configuration
//!
//! Defines all configurable parameters for the relay including the platform
//! API location, polling policy, and HTTP bind address.

use std::time::Duration;

/// Relay configuration
///
/// The polling policy bounds how long one run request can hold its HTTP
/// connection: at most `max_poll_attempts * poll_interval`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the relay's HTTP server binds to
    pub bind_addr: String,

    /// Base URL of the remote platform API
    pub platform_url: String,

    /// Fixed delay before each run status check
    pub poll_interval: Duration,

    /// Maximum number of status checks per run before giving up
    pub max_poll_attempts: u32,

    /// Directory the static UI bundle is served from
    pub static_dir: String,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - RELAY_BIND_ADDR (default: 0.0.0.0:3000)
    /// - PLATFORM_API_URL (default: https://api.apify.com)
    /// - POLL_INTERVAL (seconds, default: 2)
    /// - MAX_POLL_ATTEMPTS (default: 30)
    /// - STATIC_DIR (default: public)
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("RELAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let platform_url = std::env::var("PLATFORM_API_URL")
            .unwrap_or_else(|_| "https://api.apify.com".to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(2));

        let max_poll_attempts = std::env::var("MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(30);

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            bind_addr,
            platform_url,
            poll_interval,
            max_poll_attempts,
            static_dir,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.platform_url.starts_with("http://") && !self.platform_url.starts_with("https://") {
            anyhow::bail!("platform_url must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.max_poll_attempts == 0 {
            anyhow::bail!("max_poll_attempts must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            platform_url: "https://api.apify.com".to_string(),
            poll_interval: Duration::from_secs(2),
            max_poll_attempts: 30,
            static_dir: "public".to_string(),
        }
    }
}
