use axum::Router;
use shared_types::{
    AppErrorKind, EntityType, ErrorBody, FeatureFlags, RecordId, SearchResponse, SearchResults,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::error_convert::panic_response;
use crate::health::{self, HealthResponse};
use crate::rest;
use crate::state::AppState;
use crate::telemetry::OtelTraceLayer;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::search::global_search,
        health::health_check,
    ),
    components(
        schemas(
            SearchResponse,
            SearchResults,
            ErrorBody,
            AppErrorKind,
            EntityType,
            RecordId,
            HealthResponse,
        )
    ),
    tags(
        (name = "search", description = "Federated search across every record type"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Staffdesk API",
        description = "Staffing agency dashboard API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .fallback(rest::not_found)
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}

/// `api_router` wrapped in the HTTP layers the server runs with: panic
/// recovery, request tracing, request IDs and, when enabled, OTLP spans.
pub fn app_router(state: AppState, flags: &FeatureFlags) -> Router {
    let mut router = api_router(state).layer(CatchPanicLayer::custom(panic_response));

    if flags.telemetry {
        router = router.layer(OtelTraceLayer);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
