use axum::extract::FromRef;

use crate::backend::BackendClient;
use crate::config::Settings;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<BackendClient>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(BackendClient::new(settings.api_base_url.clone()))
    }
}
