use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::cookies::extract_session_token;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOG_FILTER: &str = "staffdesk=info,server=info,tower_http=info";

/// Keep the TracerProvider reachable so it can be flushed on shutdown.
static TRACER_PROVIDER: OnceLock<opentelemetry_sdk::trace::SdkTracerProvider> = OnceLock::new();

/// Install the global `tracing` subscriber: `RUST_LOG` filter (falling back
/// to `DEFAULT_LOG_FILTER`) and the fmt layer.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Set up the OpenTelemetry TracerProvider and register it globally so
/// `OtelTraceLayer` spans are exported over OTLP/gRPC.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag (default: `staffdesk`)
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
///
/// Must run inside a Tokio runtime.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) => ep,
        Err(_) => {
            tracing::warn!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "staffdesk".to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);

    // TLS with system root certs for HTTPS collectors
    if endpoint.starts_with("https://") {
        builder = builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }

    let exporter = match builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    let _ = TRACER_PROVIDER.set(provider.clone());
    global::set_tracer_provider(provider);

    tracing::info!(endpoint = %endpoint, "Telemetry initialized v{APP_VERSION}");
}

/// Flush pending spans. No-op when telemetry was never initialized.
pub fn shutdown_telemetry() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Failed to flush OTLP spans");
        }
    }
}

/// Span name for a request: method plus the path with any trailing numeric
/// segment stripped, so `/api/jobs/54` and `/api/jobs/7` group together.
fn span_name(method: &str, path: &str) -> String {
    let route = path.trim_end_matches(|c: char| c.is_ascii_digit());
    format!("{method} {route}")
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, request ID, whether a session cookie was sent,
/// and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer("staffdesk");
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let request_id = req
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let session_status = if extract_session_token(req.headers()).is_some() {
            "present"
        } else {
            "absent"
        };

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.request_id", request_id),
            KeyValue::new("session.status", session_status),
        ];

        let span = tracer
            .span_builder(span_name(&method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
