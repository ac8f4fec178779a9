//! OpenAI-compatible provider implementation

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use replyguy_config::ProviderConfig;
use replyguy_telemetry::{Histogram, KeyValue, metrics};
use reqwest::{Client, StatusCode, header::RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::CompletionProvider;
use crate::convert::{SamplingSettings, openai_request};
use crate::error::LlmError;
use crate::protocol::openai::{OpenAiErrorResponse, OpenAiRequest, OpenAiResponse};
use crate::types::{CompletionResult, PromptSpec};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// HTTP client plus the credential it was built with
struct ProviderClient {
    http: Client,
    api_key: SecretString,
}

/// OpenAI-compatible provider
///
/// The HTTP client is built on first use and then shared by every request
/// for the rest of the process. A missing credential is remembered too, so
/// the provider stays unavailable instead of re-reading the environment on
/// each call.
pub struct OpenAiProvider {
    name: String,
    base_url: Url,
    api_key: Option<SecretString>,
    api_key_env: String,
    sampling: SamplingSettings,
    timeout: Duration,
    client: OnceLock<Result<ProviderClient, String>>,
    request_duration: Histogram<f64>,
}

impl OpenAiProvider {
    /// Create from provider configuration
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Configuration` if the timeout or base URL is invalid.
    pub fn new(name: String, config: &ProviderConfig) -> Result<Self, LlmError> {
        let base_url = match &config.base_url {
            Some(url) => url.clone(),
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| LlmError::Configuration(format!("invalid default base URL: {e}")))?,
        };

        let timeout = config
            .timeout_duration()
            .map_err(|e| LlmError::Configuration(e.to_string()))?;

        let request_duration = metrics::meter()
            .f64_histogram(metrics::LLM_REQUEST_DURATION)
            .with_unit("s")
            .with_description("Duration of completion calls to the provider")
            .build();

        Ok(Self {
            name,
            base_url,
            api_key: config.api_key.clone(),
            api_key_env: config.api_key_env.clone(),
            sampling: SamplingSettings {
                model: config.model.clone(),
                temperature: config.temperature,
                top_p: config.top_p,
            },
            timeout,
            client: OnceLock::new(),
            request_duration,
        })
    }

    /// Get the shared client, building it on first call
    fn client(&self) -> Result<&ProviderClient, LlmError> {
        self.client
            .get_or_init(|| self.build_client())
            .as_ref()
            .map_err(|message| LlmError::Configuration(message.clone()))
    }

    fn build_client(&self) -> Result<ProviderClient, String> {
        let Some(api_key) = self.resolve_api_key() else {
            let message = format!("{} environment variable is not set", self.api_key_env);
            tracing::error!(provider = %self.name, "{message}");
            return Err(message);
        };

        let http = Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .tcp_nodelay(true)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;

        tracing::info!(provider = %self.name, model = %self.sampling.model, "completion client initialized");

        Ok(ProviderClient { http, api_key })
    }

    /// Resolve the API key from config, falling back to the environment
    fn resolve_api_key(&self) -> Option<SecretString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .cloned()
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(SecretString::from)
            })
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }

    async fn send(&self, client: &ProviderClient, wire_request: &OpenAiRequest) -> Result<CompletionResult, LlmError> {
        let response = client
            .http
            .post(self.completions_url())
            .bearer_auth(client.api_key.expose_secret())
            .json(wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "upstream request failed");
                LlmError::Upstream(e.to_string())
            })?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse().ok());
            tracing::warn!(provider = %self.name, ?retry_after, "upstream rate limited");
            return Err(LlmError::RateLimited { retry_after });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiErrorResponse>(&body).map_or(body, |e| e.error.message);
            tracing::warn!(provider = %self.name, status = %status, "upstream returned error");
            return Err(LlmError::Upstream(format!("provider returned {status}: {message}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LlmError::Upstream(format!("failed to read response body: {e}")))?;

        let wire_response: OpenAiResponse = serde_json::from_slice(&bytes)
            .map_err(|e| LlmError::MalformedResponse(format!("failed to parse response: {e}")))?;

        Ok(wire_response.into())
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn model(&self) -> &str {
        &self.sampling.model
    }

    async fn ensure_ready(&self) -> Result<(), LlmError> {
        self.client().map(|_| ())
    }

    async fn submit(&self, prompt: &PromptSpec) -> Result<CompletionResult, LlmError> {
        let client = self.client()?;
        let wire_request = openai_request(&self.sampling, prompt);

        let start = Instant::now();
        let outcome = tokio::time::timeout(self.timeout, self.send(client, &wire_request)).await;

        let result = outcome.unwrap_or_else(|_| {
            tracing::warn!(provider = %self.name, timeout = ?self.timeout, "upstream deadline exceeded");
            Err(LlmError::Timeout(self.timeout))
        });

        let status = result.as_ref().map_or_else(LlmError::kind, |_| "ok");
        self.request_duration.record(
            start.elapsed().as_secs_f64(),
            &[
                KeyValue::new("provider", self.name.clone()),
                KeyValue::new("status", status),
            ],
        );

        result
    }
}
