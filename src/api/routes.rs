//! Route definitions for the API.

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system_status,
        handlers::profile_evaluation,
        handlers::player_info,
    ),
    components(schemas(
        crate::api::types::StatusResponse,
        crate::api::types::EvaluateResponse,
        crate::api::types::PlayerInfoResponse,
        crate::api::types::ErrorEnvelope,
        crate::domain::SecurityScan,
        crate::domain::RiskFlag,
        crate::domain::ProfileScore,
        crate::domain::ProfileStatus,
    )),
    tags(
        (name = "players", description = "Player lookup endpoints"),
        (name = "profiles", description = "Profile scoring endpoints"),
        (name = "status", description = "Service status endpoints")
    ),
    info(
        title = "Player Gate API",
        version = "0.1.0",
        description = "Player info gateway - validates lookups and proxies the region info service",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/status", get(handlers::system_status))
        .route("/evaluate", get(handlers::profile_evaluation))
        .route("/ultimate-info", get(handlers::player_info))
        .fallback(handlers::not_found)
        .with_state(state)
        // OpenAPI docs
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
