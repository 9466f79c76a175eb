//! Shared helpers for tests: an in-process stand-in for the region info service.

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use crate::config::{Config, LatencyConfig, UpstreamConfig};

/// Uid the mock answers with a JSON 404.
pub const MISSING_UID: &str = "missing";
/// Uid the mock answers with a plain-text body.
pub const GARBLED_UID: &str = "garbled";

async fn region(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Response {
    let uid = params.get("uid").map(String::as_str).unwrap_or_default();
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    match uid {
        MISSING_UID => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "player not found" })),
        )
            .into_response(),
        GARBLED_UID => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => Json(json!({
            "uid": uid,
            "nickname": "TestPlayer",
            "level": 42,
            "access_level": header("x-access-level"),
            "user_agent": header(USER_AGENT.as_str()),
        }))
        .into_response(),
    }
}

/// Start the mock upstream on an ephemeral port and return its base URL.
pub async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/region", get(region));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
        ..UpstreamConfig::default()
    }
}

/// Default configuration pointed at `base_url`, with delays switched off.
pub fn test_config(base_url: &str) -> Config {
    Config {
        upstream: upstream_config(base_url),
        latency: LatencyConfig {
            enabled: false,
            ..LatencyConfig::default()
        },
        ..Config::default()
    }
}
