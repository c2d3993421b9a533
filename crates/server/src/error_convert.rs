use axum::response::{IntoResponse, Response};
use shared_types::AppError;
use std::any::Any;

/// Convert a handler panic into the generic 500 body. Used with
/// `CatchPanicLayer::custom`; the panic detail only goes to the log.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = detail, "Request handler panicked");
    AppError::internal("Internal server error").into_response()
}
