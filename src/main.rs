//! Entry point for the TSA wait-time proxy.
//!
//! Serves `GET /api/tsa-wait-times?airport=XXX`, which fetches the airport's
//! checkpoint samples from the TSA web service and returns one summary per
//! checkpoint.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use tsa_wait_proxy::{
    config::Config,
    fetch::BasicClient,
    http::{AppState, create_router},
    infra::tsa::TsaClient,
    telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::parse();
    let _log_guard = telemetry::init(&config.log_file_path)?;

    let timeout = config.upstream_timeout();
    let http = BasicClient::with_timeout(timeout)?;
    let source = TsaClient::new(http, &config.tsa_base_url, timeout)?;
    info!(
        upstream = %config.tsa_base_url,
        timeout_secs = timeout.as_secs(),
        "TSA client ready"
    );

    let app = create_router(AppState::new(Arc::new(source)));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
