//! Player Gate - player info gateway.
//!
//! This service validates player lookups against fixed access lists,
//! attaches a local scan and proxies the request to the region info
//! service, wrapping every answer in a JSON envelope.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod engine;
mod error;
mod logging;
#[cfg(test)]
mod test_support;

use crate::api::build_router;
use crate::config::Config;
use crate::engine::{LatencySimulator, ListAccessPolicy, RegionInfoClient, RequestEvaluator};
use crate::error::{GatewayError, GatewayRejection};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The request evaluator.
    pub evaluator: Arc<RequestEvaluator>,
    /// Branding attached to every response body.
    pub credit: Arc<str>,
}

impl AppState {
    /// Build the state once from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let upstream = RegionInfoClient::new(&config.upstream)?;
        let evaluator = RequestEvaluator::new(
            Box::new(ListAccessPolicy::new(&config.policy)),
            LatencySimulator::new(&config.latency),
            upstream,
            config.status.load_max_percent,
        );

        Ok(Self {
            evaluator: Arc::new(evaluator),
            credit: Arc::from(config.branding.credit.as_str()),
        })
    }

    /// Turn an error into a response carrying this service's credit.
    pub fn reject(&self, error: GatewayError) -> GatewayRejection {
        error.with_credit(&*self.credit)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    logging::init();

    tracing::info!("Starting Player Gate v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        blocked_uids = config.policy.blocked_uids.len(),
        allowed_regions = ?config.policy.allowed_regions,
        latency_enabled = config.latency.enabled,
        "Configuration loaded"
    );

    if !config.latency.enabled {
        tracing::warn!("Latency simulation is disabled");
    }

    let state = AppState::from_config(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to build application state");
        e
    })?;

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
