//! API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{ProfileScore, SecurityScan};

// ==================== Query Parameters ====================

/// Raw query pairs in request order.
///
/// Repeated keys are kept; lookups return the first value, so a duplicated
/// parameter never fails a request.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value supplied for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// ==================== Player Lookup ====================

/// Successful player lookup.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlayerInfoResponse {
    /// Always `true`.
    pub success: bool,
    /// Upstream region info payload, passed through verbatim.
    #[schema(value_type = Object)]
    pub data: Value,
    /// Local scan of the uid.
    pub security: SecurityScan,
    pub credit: String,
}

// ==================== Profile Evaluation ====================

/// Profile evaluation response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EvaluateResponse {
    pub uid: String,
    pub score_data: ProfileScore,
    pub credit: String,
}

// ==================== Status ====================

/// Service status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Service status.
    pub status: String,
    /// Simulated load, e.g. "7%".
    pub load: String,
    /// Server local time.
    pub timestamp: String,
    pub credit: String,
}

// ==================== Errors ====================

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    pub credit: String,
}
