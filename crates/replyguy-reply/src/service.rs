//! Reply generation orchestration

use std::fmt;
use std::sync::Arc;

use replyguy_config::Config;
use replyguy_llm::{CompletionProvider, LlmError, TokenUsage};
use serde::Serialize;

use crate::cost::Pricing;
use crate::error::ReplyError;
use crate::fallback::FallbackTable;
use crate::observer::{TelemetryObserver, UsageObserver};
use crate::prompt::{self, LONG_MAX_TOKENS, SHORT_MAX_TOKENS};
use crate::request::{self, RawReplyRequest, ReplyRequest};

/// How a reply was obtained
///
/// Both branches are successful replies as far as the caller is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    /// The provider wrote the reply
    Generated { text: String, usage: Option<TokenUsage> },
    /// A canned reply was substituted
    Fallback { text: String, reason: FallbackReason },
}

impl ReplyOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Generated { text, .. } | Self::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Generated { text, .. } | Self::Fallback { text, .. } => text,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Why a canned reply was served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Provider answered with no usable text
    EmptyCompletion,
    /// Provider call failed
    ProviderError { kind: &'static str, message: String },
}

impl FallbackReason {
    /// Short machine-readable label
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyCompletion => "empty_completion",
            Self::ProviderError { kind, .. } => kind,
        }
    }
}

impl From<&LlmError> for FallbackReason {
    fn from(error: &LlmError) -> Self {
        Self::ProviderError {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCompletion => f.write_str("provider returned an empty completion"),
            Self::ProviderError { message, .. } => f.write_str(message),
        }
    }
}

/// Model and pricing details exposed to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub model: String,
    pub provider: String,
    pub input_price_per_1k: f64,
    pub output_price_per_1k: f64,
    pub max_tokens: MaxTokens,
}

/// Token budgets per length class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MaxTokens {
    pub short: u32,
    pub long: u32,
}

/// Shared reply generation service
#[derive(Clone)]
pub struct ReplyService {
    inner: Arc<ReplyServiceInner>,
}

struct ReplyServiceInner {
    provider: Arc<dyn CompletionProvider>,
    fallbacks: FallbackTable,
    pricing: Pricing,
    observer: Arc<dyn UsageObserver>,
}

impl ReplyService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        fallbacks: FallbackTable,
        pricing: Pricing,
        observer: Arc<dyn UsageObserver>,
    ) -> Self {
        Self {
            inner: Arc::new(ReplyServiceInner {
                provider,
                fallbacks,
                pricing,
                observer,
            }),
        }
    }

    /// Build the service from configuration
    ///
    /// The provider client itself is created lazily on the first request,
    /// so a missing credential does not prevent startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider settings are unusable.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = replyguy_llm::from_config(&config.provider)?;

        Ok(Self::new(
            provider,
            FallbackTable::from_config(&config.reply.fallback),
            Pricing::from(&config.provider.pricing),
            Arc::new(TelemetryObserver::new()),
        ))
    }

    /// Make sure the provider can be used at all
    ///
    /// Only configuration failures are reported; anything else is left for
    /// the fallback path of [`Self::generate_validated`].
    pub async fn ensure_ready(&self) -> Result<(), ReplyError> {
        match self.inner.provider.ensure_ready().await {
            Ok(()) => Ok(()),
            Err(LlmError::Configuration(message)) => {
                tracing::error!(provider = self.inner.provider.name(), error = %message, "reply generation unavailable");
                Err(ReplyError::Configuration(message))
            }
            Err(e) => {
                tracing::warn!(provider = self.inner.provider.name(), error = %e, "provider readiness check failed");
                Ok(())
            }
        }
    }

    /// Produce a reply for a raw request
    ///
    /// Provider readiness is checked before the request is validated.
    pub async fn generate(&self, raw: RawReplyRequest) -> Result<ReplyOutcome, ReplyError> {
        self.ensure_ready().await?;

        let request = request::validate(raw).inspect_err(|e| tracing::debug!(error = %e, "rejected reply request"))?;

        Ok(self.generate_validated(&request).await)
    }

    /// Produce a reply for a validated request
    ///
    /// Never fails: provider problems turn into a fallback reply.
    pub async fn generate_validated(&self, request: &ReplyRequest) -> ReplyOutcome {
        let prompt = prompt::build_prompt(request);

        let reason = match self.inner.provider.submit(&prompt).await {
            Ok(completion) => {
                let text = completion.text.trim();
                if text.is_empty() {
                    tracing::warn!(
                        provider = self.inner.provider.name(),
                        strategy = %request.strategy,
                        length = %request.length,
                        "provider returned an empty completion"
                    );
                    FallbackReason::EmptyCompletion
                } else {
                    let cost = completion
                        .usage
                        .map(|usage| self.inner.pricing.estimate(usage.prompt_tokens, usage.completion_tokens));
                    self.inner
                        .observer
                        .on_generated(request.strategy, request.length, completion.usage, cost);

                    return ReplyOutcome::Generated {
                        text: text.to_owned(),
                        usage: completion.usage,
                    };
                }
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.inner.provider.name(),
                    strategy = %request.strategy,
                    length = %request.length,
                    error = %e,
                    kind = e.kind(),
                    "completion failed, serving fallback reply"
                );
                FallbackReason::from(&e)
            }
        };

        self.inner
            .observer
            .on_fallback(request.strategy, request.length, &reason);

        ReplyOutcome::Fallback {
            text: self
                .inner
                .fallbacks
                .resolve(request.strategy, request.length)
                .to_owned(),
            reason,
        }
    }

    /// Configured model, provider and pricing
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model: self.inner.provider.model().to_owned(),
            provider: self.inner.provider.name().to_owned(),
            input_price_per_1k: self.inner.pricing.input_per_1k,
            output_price_per_1k: self.inner.pricing.output_per_1k,
            max_tokens: MaxTokens {
                short: SHORT_MAX_TOKENS,
                long: LONG_MAX_TOKENS,
            },
        }
    }
}
