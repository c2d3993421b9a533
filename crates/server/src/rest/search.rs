use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use shared_types::{AppError, ErrorBody, SearchResponse};

use crate::auth::extractors::MaybeSession;
use crate::backend::BackendClient;
use crate::search::{self, SearchQuery};

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Free text, or a prefixed record ID such as `O54`.
    pub query: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/search
// ---------------------------------------------------------------------------

/// Search jobs, leads, job seekers, organizations, tasks, hiring managers
/// and placements at once.
///
/// Every term must appear in some searchable field of a record. A query
/// shaped like a record ID (`O54`, `JS 12`) also fetches that record
/// directly. Backend failures leave the affected bucket empty.
#[utoipa::path(
    get,
    path = "/api/search",
    params(
        SearchParams,
        ("token" = String, Cookie, description = "Session token forwarded to the backend")
    ),
    responses(
        (status = 200, description = "Matches grouped by entity type", body = SearchResponse),
        (status = 400, description = "Missing or blank query", body = ErrorBody),
        (status = 401, description = "No session token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "search"
)]
pub async fn global_search(
    State(backend): State<BackendClient>,
    session: MaybeSession,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = params
        .ok()
        .and_then(|Query(p)| p.query)
        .as_deref()
        .and_then(SearchQuery::parse)
        .ok_or_else(|| AppError::bad_request("Search query is required"))?;

    let token = session.require()?;

    let results = search::run_search(&backend, &query, &token).await;

    tracing::info!(
        query = query.text(),
        jobs = results.jobs.len(),
        leads = results.leads.len(),
        job_seekers = results.job_seekers.len(),
        organizations = results.organizations.len(),
        tasks = results.tasks.len(),
        hiring_managers = results.hiring_managers.len(),
        placements = results.placements.len(),
        "Search completed"
    );

    Ok(Json(SearchResponse {
        success: true,
        query: query.text().to_string(),
        results,
    }))
}
