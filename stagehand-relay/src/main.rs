//! Stagehand Relay
//!
//! Backend relay between the browser UI and the remote automation platform.
//!
//! Architecture:
//! - Configuration: platform URL, polling policy, bind address from env
//! - API: axum routes for credential validation, actor listing, and runs
//! - Service: the run driver that walks one run from start to terminal state
//!
//! The relay never executes actor logic; it forwards authenticated calls to
//! the platform and holds each run request open while polling for its
//! outcome. Nothing is persisted between requests.

mod api;
mod config;
mod service;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::service::RunDriver;
use stagehand_client::PlatformClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stagehand_relay=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Stagehand Relay");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!(
        "Loaded configuration: platform_url={}, poll_interval={:?}, max_poll_attempts={}",
        config.platform_url, config.poll_interval, config.max_poll_attempts
    );

    // Platform client and run driver are shared across all requests
    let client = Arc::new(PlatformClient::new(config.platform_url.clone()));
    let driver = Arc::new(RunDriver::new(
        client.clone() as Arc<dyn stagehand_client::RunApi>,
        config.poll_interval,
        config.max_poll_attempts,
    ));

    let state = AppState { client, driver };

    // Build router with all API endpoints
    let app = api::create_router(state, &config.static_dir);

    info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
