//! Conversion between reply-side types and the `OpenAI` wire format

use crate::protocol::openai::{OpenAiMessage, OpenAiRequest, OpenAiResponse, OpenAiUsage};
use crate::types::{CompletionResult, PromptSpec, TokenUsage};

/// Sampling settings fixed per provider rather than per request
#[derive(Debug, Clone)]
pub struct SamplingSettings {
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
}

/// Build a chat completion request from a prompt
pub fn openai_request(settings: &SamplingSettings, prompt: &PromptSpec) -> OpenAiRequest {
    OpenAiRequest {
        model: settings.model.clone(),
        messages: vec![
            OpenAiMessage::system(prompt.system_instruction.as_str()),
            OpenAiMessage::user(prompt.user_instruction.as_str()),
        ],
        max_tokens: Some(prompt.max_tokens),
        temperature: Some(settings.temperature),
        top_p: Some(settings.top_p),
    }
}

impl From<OpenAiUsage> for TokenUsage {
    fn from(usage: OpenAiUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
        }
    }
}

impl From<OpenAiResponse> for CompletionResult {
    fn from(response: OpenAiResponse) -> Self {
        // Only the first choice is ever requested
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Self {
            text,
            usage: response.usage.map(Into::into),
        }
    }
}
