//! Completion provider trait and backends

pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use replyguy_config::{ProviderConfig, ProviderType};

use crate::error::LlmError;
use crate::types::{CompletionResult, PromptSpec};

/// Capability to turn a prompt into generated text
///
/// Implementations own their underlying client and build it on first
/// use. A single `submit` makes exactly one attempt against the backend.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name
    fn name(&self) -> &str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Build the underlying client if needed and report whether it is usable
    ///
    /// Returns `LlmError::Configuration` when the provider can never work in
    /// this process, for instance because its credential is missing.
    async fn ensure_ready(&self) -> Result<(), LlmError>;

    /// Submit a prompt and wait for the completion
    async fn submit(&self, prompt: &PromptSpec) -> Result<CompletionResult, LlmError>;
}

/// Construct the configured provider
///
/// The provider's client is not built here; see
/// [`CompletionProvider::ensure_ready`].
pub fn from_config(config: &ProviderConfig) -> Result<Arc<dyn CompletionProvider>, LlmError> {
    let provider: Arc<dyn CompletionProvider> = match config.provider_type {
        ProviderType::Openai => Arc::new(openai::OpenAiProvider::new("openai".to_owned(), config)?),
    };

    tracing::debug!(provider = provider.name(), model = provider.model(), "completion provider configured");

    Ok(provider)
}
