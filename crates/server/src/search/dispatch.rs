use serde_json::Value;

use shared_types::{EntityType, RecordId};

use super::matcher::Matcher;
use super::query::SearchQuery;
use super::resources;
use crate::backend::{BackendClient, BackendError};

/// The record fetched directly by its prefixed ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactMatch {
    pub id: RecordId,
    pub record: Value,
}

/// Fetch one collection and keep the matching records. Any backend failure
/// becomes an empty bucket; this never fails.
pub async fn fetch_bucket(
    client: &BackendClient,
    entity: EntityType,
    query: &SearchQuery,
    token: &str,
) -> (EntityType, Vec<Value>) {
    let body = match entity {
        EntityType::Lead => fetch_leads(client, query, token).await,
        _ => client.fetch_collection(entity, token).await,
    };

    let records = match body {
        Ok(body) => resources::unwrap_collection(entity, body),
        Err(e) => {
            tracing::warn!(%entity, error = %e, "Search backend fetch failed, bucket left empty");
            return (entity, Vec::new());
        }
    };

    let matcher = Matcher::new(query);
    let matched = records
        .into_iter()
        .filter(|record| matcher.matches(record, entity))
        .collect();

    (entity, matched)
}

/// Leads try the backend's own search endpoint first and fall back to the
/// full collection on any failure.
async fn fetch_leads(
    client: &BackendClient,
    query: &SearchQuery,
    token: &str,
) -> Result<Value, BackendError> {
    match client.search_leads(query.text(), token).await {
        Ok(body) => Ok(body),
        Err(e) => {
            tracing::warn!(error = %e, "Lead search endpoint failed, falling back to full list");
            client.fetch_collection(EntityType::Lead, token).await
        }
    }
}

/// Fetch the record a prefixed-ID query names. `None` when the query is not
/// an ID or the lookup failed.
pub async fn fetch_exact(
    client: &BackendClient,
    parsed: Option<RecordId>,
    token: &str,
) -> Option<ExactMatch> {
    let id = parsed?;

    match client.fetch_record(id.entity, id.id, token).await {
        Ok(body) => resources::unwrap_record(body).map(|record| ExactMatch { id, record }),
        Err(e) => {
            tracing::warn!(record_id = %id, error = %e, "Exact ID lookup failed");
            None
        }
    }
}
