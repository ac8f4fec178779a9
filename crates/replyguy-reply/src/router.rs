//! HTTP routes for reply generation

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ReplyError;
use crate::request::RawReplyRequest;
use crate::service::{ModelInfo, ReplyService};

#[derive(Debug, Serialize)]
struct ReplyResponse {
    reply: String,
}

/// Routes for `/generate-reply` and `/model-info`
pub fn reply_router(service: ReplyService) -> Router {
    Router::new()
        .route("/generate-reply", post(generate_reply))
        .route("/model-info", get(model_info))
        .with_state(service)
}

/// Handle a reply request
///
/// The provider is checked before the body is looked at, so an
/// unconfigured deployment answers 500 to every request.
async fn generate_reply(
    State(service): State<ReplyService>,
    body: Result<Json<RawReplyRequest>, JsonRejection>,
) -> Result<Json<ReplyResponse>, ReplyError> {
    service.ensure_ready().await?;

    let Json(raw) = body.map_err(|rejection| ReplyError::InvalidBody(rejection.body_text()))?;

    let outcome = service.generate(raw).await?;

    Ok(Json(ReplyResponse {
        reply: outcome.into_text(),
    }))
}

async fn model_info(State(service): State<ReplyService>) -> Json<ModelInfo> {
    Json(service.model_info())
}
