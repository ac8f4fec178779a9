//! Provider-agnostic prompt and completion types

use serde::{Deserialize, Serialize};

/// Instructions and token budget for a single completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    /// Role and policy instructions
    pub system_instruction: String,
    /// The actual ask, including the post being replied to
    pub user_instruction: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

/// Token usage statistics reported by the provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated in the completion
    pub completion_tokens: u32,
}

impl TokenUsage {
    /// Prompt plus completion tokens
    pub const fn total(&self) -> u32 {
        self.prompt_tokens.saturating_add(self.completion_tokens)
    }
}

/// Text generated by the provider
///
/// `text` may be empty; callers decide what an empty completion means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResult {
    /// Generated text, untrimmed
    pub text: String,
    /// Token counts when the provider reports them
    pub usage: Option<TokenUsage>,
}
