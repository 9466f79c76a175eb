//! Client for the upstream region info service.
//!
//! The upstream payload is opaque: whatever JSON it returns is handed back
//! to the caller verbatim.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::UpstreamConfig;

/// Header announcing the access level to the upstream.
pub const ACCESS_LEVEL_HEADER: &str = "X-Access-Level";

/// Failure while talking to the upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("request to upstream failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned a non-JSON body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

/// HTTP client for `<base_url>/region`.
#[derive(Debug, Clone)]
pub struct RegionInfoClient {
    client: Client,
    region_url: String,
    access_level: String,
}

impl RegionInfoClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(UpstreamError::ClientBuild)?;

        Ok(Self {
            client,
            region_url: format!("{}/region", config.base_url.trim_end_matches('/')),
            access_level: config.access_level.clone(),
        })
    }

    /// Fetch region info for a uid and decode the body as JSON.
    ///
    /// The upstream status code is not interpreted; a JSON error body from
    /// the upstream is returned like any other payload.
    pub async fn fetch_region_info(&self, uid: &str) -> Result<Value, UpstreamError> {
        tracing::debug!(url = %self.region_url, uid = %uid, "Connecting to region info service");

        let response = self
            .client
            .get(&self.region_url)
            .query(&[("uid", uid)])
            .header(ACCESS_LEVEL_HEADER, &self.access_level)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        tracing::debug!(status = %response.status(), "Region info service responded");

        response.json::<Value>().await.map_err(UpstreamError::InvalidBody)
    }
}
