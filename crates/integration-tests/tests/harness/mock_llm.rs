//! Mock completion backend for integration tests
//!
//! Implements the OpenAI chat completions endpoint with a scripted behavior

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// How the mock answers completion requests
#[derive(Debug, Clone)]
enum Behavior {
    Reply(String),
    Fail(StatusCode),
    RateLimit,
    Stall(Duration),
}

/// Mock backend that answers every completion the same way
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    behavior: Behavior,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A completion request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

impl MockLlm {
    /// Start a mock that replies with `content`
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Reply(content.to_owned())).await
    }

    /// Start a mock that replies with empty content
    pub async fn start_empty() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Reply(String::new())).await
    }

    /// Start a mock that fails every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Fail(StatusCode::INTERNAL_SERVER_ERROR)).await
    }

    /// Start a mock that rate-limits every request
    pub async fn start_rate_limited() -> anyhow::Result<Self> {
        Self::start_inner(Behavior::RateLimit).await
    }

    /// Start a mock that waits `delay` before answering
    pub async fn start_stalling(delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(Behavior::Stall(delay)).await
    }

    async fn start_inner(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the provider appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Completion requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/v1")
}

// -- Wire types matching OpenAI format --

#[derive(Debug, Serialize)]
struct ChatCompletionResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Serialize)]
struct Choice {
    index: u32,
    message: ResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ResponseMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let model = body["model"].as_str().unwrap_or("unknown").to_owned();

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    });

    let content = match &state.behavior {
        Behavior::Reply(content) => content.clone(),
        Behavior::Fail(status) => {
            let error = serde_json::json!({
                "error": { "message": "mock upstream failure", "type": "server_error" }
            });
            return (*status, Json(error)).into_response();
        }
        Behavior::RateLimit => {
            let error = serde_json::json!({
                "error": { "message": "Rate limit reached", "type": "rate_limit_error" }
            });
            return (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "20")], Json(error)).into_response();
        }
        Behavior::Stall(delay) => {
            tokio::time::sleep(*delay).await;
            "too late".to_owned()
        }
    };

    Json(ChatCompletionResponse {
        id: "chatcmpl-mock".to_owned(),
        object: "chat.completion".to_owned(),
        created: 1_700_000_000,
        model,
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: "assistant".to_owned(),
                content,
            },
            finish_reason: "stop".to_owned(),
        }],
        usage: Usage {
            prompt_tokens: 42,
            completion_tokens: 12,
            total_tokens: 54,
        },
    })
    .into_response()
}
