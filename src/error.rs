//! Error types for Player Gate.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::types::ErrorEnvelope;
use crate::engine::UpstreamError;

/// Unified error type for Player Gate operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing required parameters: region and uid")]
    MissingParameters,

    #[error("Access denied for this UID.")]
    UidBlocked,

    #[error("Region not supported.")]
    RegionNotSupported,

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingParameters => StatusCode::BAD_REQUEST,
            GatewayError::UidBlocked => StatusCode::FORBIDDEN,
            GatewayError::RegionNotSupported => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to API clients. Upstream causes are logged where they
    /// occur and never rendered.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Upstream(_) => "Unable to retrieve player info.".to_string(),
            other => other.to_string(),
        }
    }

    /// Attach the branding credit so the error can be rendered.
    pub fn with_credit(self, credit: impl Into<String>) -> GatewayRejection {
        GatewayRejection {
            error: self,
            credit: credit.into(),
        }
    }
}

/// A [`GatewayError`] ready to be sent as an [`ErrorEnvelope`].
#[derive(Debug)]
pub struct GatewayRejection {
    pub error: GatewayError,
    pub credit: String,
}

impl IntoResponse for GatewayRejection {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        let body = ErrorEnvelope {
            success: false,
            error: self.error.public_message(),
            credit: self.credit,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
