use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::AppError;

use super::cookies::extract_session_token;

/// Extractor that optionally reads the session token. Never fails, so the
/// handler decides when a missing session becomes a 401.
pub struct MaybeSession(pub Option<String>);

impl MaybeSession {
    /// Return the token, or `401 Authentication required`.
    pub fn require(self) -> Result<String, AppError> {
        self.0
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(extract_session_token(&parts.headers)))
    }
}
