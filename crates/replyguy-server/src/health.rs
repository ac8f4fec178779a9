use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe
///
/// Does not touch the completion provider, so it stays green even when
/// the credential is missing.
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
