//! Configuration module for Player Gate.
//!
//! Loads configuration from YAML files and environment variables.
//! Every section carries defaults, so the service runs without any files.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub policy: PolicyConfig,
    pub latency: LatencyConfig,
    pub status: StatusConfig,
    pub branding: BrandingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Region info service the lookup endpoint proxies to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL; requests go to `<base_url>/region?uid=<uid>`.
    pub base_url: String,
    /// Value sent in the `X-Access-Level` header.
    pub access_level: String,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
    /// Overall request timeout. `None` keeps the client default (no timeout).
    pub timeout_secs: Option<u64>,
}

/// Access lists gating uid and region.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Uids that are always denied (exact, case-sensitive match).
    pub blocked_uids: Vec<String>,
    /// Regions that may be queried (compared upper-cased).
    pub allowed_regions: Vec<String>,
}

/// Artificial delay settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub load_min_ms: u64,
    pub load_max_ms: u64,
    pub metrics_min_ms: u64,
    pub metrics_max_ms: u64,
}

/// `/status` endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Upper bound of the reported load percentage, clamped to `1..=100`.
    pub load_max_percent: u8,
}

/// Branding attached to every response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandingConfig {
    pub credit: String,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GATEWAY__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aditya-region-v6op.onrender.com".to_string(),
            access_level: "elevated".to_string(),
            user_agent: "PlayerSecureClient/2.1".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            blocked_uids: vec!["123456".to_string(), "000000".to_string()],
            allowed_regions: vec!["PRINCE".to_string(), "IND".to_string()],
        }
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            load_min_ms: 100,
            load_max_ms: 250,
            metrics_min_ms: 100,
            metrics_max_ms: 200,
        }
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            load_max_percent: 10,
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            credit: "@ultimate_rex".to_string(),
        }
    }
}
