//! Completion provider capability for Reply Guy
//!
//! Wraps an external chat-completion API behind the [`CompletionProvider`]
//! trait: submit a system and user instruction with a token budget, get
//! back generated text and optional token usage.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod convert;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod types;

pub use error::LlmError;
pub use provider::{CompletionProvider, from_config};
pub use types::{CompletionResult, PromptSpec, TokenUsage};
