//! HTTP request handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};

use crate::api::types::*;
use crate::error::{GatewayError, GatewayRejection};
use crate::AppState;

/// Report service status.
///
/// GET /status
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is online", body = StatusResponse)
    ),
    tag = "status"
)]
pub async fn system_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let status = state.evaluator.system_status();

    Json(StatusResponse {
        status: status.status.to_string(),
        load: status.load,
        timestamp: status.timestamp,
        credit: state.credit.to_string(),
    })
}

/// Score a player profile.
///
/// GET /evaluate
#[utoipa::path(
    get,
    path = "/evaluate",
    params(
        ("uid" = Option<String>, Query, description = "Player identifier, defaults to \"unknown\"")
    ),
    responses(
        (status = 200, description = "Profile evaluated", body = EvaluateResponse)
    ),
    tag = "profiles"
)]
pub async fn profile_evaluation(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Json<EvaluateResponse> {
    let query = query_params(query);

    let evaluation = state.evaluator.evaluate_profile(query.first("uid")).await;

    Json(EvaluateResponse {
        uid: evaluation.uid,
        score_data: evaluation.score,
        credit: state.credit.to_string(),
    })
}

/// Look up a player through the access checks and the region info service.
///
/// GET /ultimate-info
#[utoipa::path(
    get,
    path = "/ultimate-info",
    params(
        ("uid" = String, Query, description = "Player identifier"),
        ("region" = String, Query, description = "Player region (case-insensitive)")
    ),
    responses(
        (status = 200, description = "Player info retrieved", body = PlayerInfoResponse),
        (status = 400, description = "Missing uid or region", body = ErrorEnvelope),
        (status = 403, description = "UID is blocked", body = ErrorEnvelope),
        (status = 422, description = "Region not supported", body = ErrorEnvelope),
        (status = 500, description = "Region info service failed", body = ErrorEnvelope)
    ),
    tag = "players"
)]
pub async fn player_info(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<PlayerInfoResponse>, GatewayRejection> {
    let query = query_params(query);

    let info = state
        .evaluator
        .lookup_player(query.first("uid"), query.first("region"))
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(PlayerInfoResponse {
        success: true,
        data: info.data,
        security: info.security,
        credit: state.credit.to_string(),
    }))
}

/// Unparseable query strings are treated as carrying no parameters.
fn query_params(query: Result<Query<QueryParams>, QueryRejection>) -> QueryParams {
    match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!(error = %e.body_text(), "Ignoring unparseable query string");
            QueryParams::default()
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> GatewayRejection {
    tracing::debug!(path = %uri.path(), "No route matched");
    state.reject(GatewayError::NotFound(uri.path().to_string()))
}
