pub mod search;

use axum::{routing::get, Router};
use shared_types::AppError;

use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Federated search
        .route("/api/search", get(search::global_search))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
