use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use server::backend::BackendClient;
use server::state::AppState;
use shared_types::FeatureFlags;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Canned reply for one backend path.
#[derive(Clone)]
enum Reply {
    Json(StatusCode, Value),
    Raw(StatusCode, String),
}

/// A request the mock backend received.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Hit {
    pub path_and_query: String,
    pub authorization: Option<String>,
}

/// In-process stand-in for the REST backend. Replies are looked up by full
/// path-and-query first, then by path alone; anything unregistered is a 404.
#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    hits: Arc<Mutex<Vec<Hit>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply 200 with `body` at `path`.
    pub fn json(self, path: &str, body: Value) -> Self {
        self.reply(path, Reply::Json(StatusCode::OK, body))
    }

    /// Reply with an error status and a JSON error body at `path`.
    pub fn status(self, path: &str, status: u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.reply(
            path,
            Reply::Json(status, serde_json::json!({"message": "backend error"})),
        )
    }

    /// Reply 200 with a body that is not JSON.
    pub fn malformed(self, path: &str) -> Self {
        self.reply(path, Reply::Raw(StatusCode::OK, "<html>oops".to_string()))
    }

    /// Hold every reply at `path` for `delay` before answering.
    pub fn delay(self, path: &str, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(path.to_string(), delay);
        self
    }

    fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
        self
    }

    /// Every request received so far.
    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    /// Paths (with query) received so far.
    pub fn hit_paths(&self) -> Vec<String> {
        self.hits().into_iter().map(|h| h.path_and_query).collect()
    }

    /// Serve the mock on an ephemeral port and return its base URL.
    pub async fn start(&self) -> String {
        let router = Router::new().fallback(respond).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn respond(State(mock): State<MockBackend>, req: Request<Body>) -> Response {
    let path = req.uri().path().to_string();
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    mock.hits.lock().unwrap().push(Hit {
        path_and_query: path_and_query.clone(),
        authorization,
    });

    let delay = {
        let delays = mock.delays.lock().unwrap();
        delays
            .get(&path_and_query)
            .or_else(|| delays.get(&path))
            .copied()
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let reply = {
        let replies = mock.replies.lock().unwrap();
        replies
            .get(&path_and_query)
            .or_else(|| replies.get(&path))
            .cloned()
    };

    match reply {
        Some(Reply::Json(status, body)) => (status, axum::Json(body)).into_response(),
        Some(Reply::Raw(status, body)) => (status, body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Build the full application router pointed at `base_url`.
pub fn test_app(base_url: &str) -> Router {
    test_app_with_flags(base_url, &FeatureFlags::default())
}

/// Build the full application router with explicit feature flags.
#[allow(dead_code)]
pub fn test_app_with_flags(base_url: &str, flags: &FeatureFlags) -> Router {
    let state = AppState::new(BackendClient::new(base_url));
    server::openapi::app_router(state, flags)
}

/// Start `mock` and build an app that talks to it.
pub async fn app_with_backend(mock: &MockBackend) -> Router {
    let base_url = mock.start().await;
    test_app(&base_url)
}

/// GET `uri`, optionally with a `token` session cookie, and return
/// (status, JSON body).
pub async fn get_json(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("token={token}"));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// GET `/api/search?query=<encoded>` with a valid session.
#[allow(dead_code)]
pub async fn search(app: &Router, encoded_query: &str) -> (StatusCode, Value) {
    get_json(app, &format!("/api/search?query={encoded_query}"), Some("test-token")).await
}
