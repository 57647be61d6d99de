//! Main entry point for the Slack invite relay.
//!
//! Loads the Slack credential, wires the invite client into the Axum router
//! and serves `GET /invite` until the process is stopped.

mod api;
mod config;
mod errors;
mod services;

use anyhow::Context;
use config::{Config, SERVER_PORT};
use services::slack_service::SlackClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let slack = SlackClient::new(config.slack_token).context("Failed to create Slack client")?;

    let app = api::router(Arc::new(slack));

    let bind_address = format!("0.0.0.0:{}", SERVER_PORT);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("Serving on :{}", SERVER_PORT);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
