use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

use shared_types::EntityType;

/// Why a backend call produced no usable payload.
#[derive(Debug)]
pub enum BackendError {
    /// The request never got a response (connection refused, reset, ...).
    Transport(reqwest::Error),
    /// The backend answered with a non-2xx status.
    Status(StatusCode),
    /// The response body was not valid JSON.
    Decode(reqwest::Error),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Transport(e) => write!(f, "backend request failed: {e}"),
            BackendError::Status(status) => write!(f, "backend returned {status}"),
            BackendError::Decode(e) => write!(f, "backend returned malformed JSON: {e}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Thin client for the staffing REST backend. Cloning is cheap; all clones
/// share one connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// `GET /api/<resource>`: the full collection for one entity type.
    #[tracing::instrument(skip(self, token))]
    pub async fn fetch_collection(
        &self,
        entity: EntityType,
        token: &str,
    ) -> Result<Value, BackendError> {
        let request = self.http.get(self.url(entity.resource_path()));
        send_json(request, token).await
    }

    /// `GET /api/leads/search/query?query=<text>`: server-side lead search.
    #[tracing::instrument(skip(self, token))]
    pub async fn search_leads(&self, text: &str, token: &str) -> Result<Value, BackendError> {
        let request = self
            .http
            .get(self.url("leads/search/query"))
            .query(&[("query", text)]);
        send_json(request, token).await
    }

    /// `GET /api/<resource>/<id>`: one record by numeric ID.
    #[tracing::instrument(skip(self, token))]
    pub async fn fetch_record(
        &self,
        entity: EntityType,
        id: i64,
        token: &str,
    ) -> Result<Value, BackendError> {
        let request = self
            .http
            .get(self.url(&format!("{}/{}", entity.resource_path(), id)));
        send_json(request, token).await
    }
}

async fn send_json(request: reqwest::RequestBuilder, token: &str) -> Result<Value, BackendError> {
    let response = request
        .bearer_auth(token)
        .send()
        .await
        .map_err(BackendError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status));
    }

    response.json::<Value>().await.map_err(BackendError::Decode)
}
