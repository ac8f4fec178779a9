use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The server layer
/// converts these into actual HTTP responses, keeping domain errors
/// decoupled from axum handlers.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Render an error as `{ "error": "<client message>" }` with its status code
pub fn error_response<E: HttpError>(error: &E) -> Response {
    let status = error.status_code();
    let body = serde_json::json!({ "error": error.client_message() });

    (status, Json(body)).into_response()
}
