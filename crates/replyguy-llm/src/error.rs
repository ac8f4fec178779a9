use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while talking to the completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider cannot be used at all in this process (e.g. missing credential)
    #[error("provider configuration error: {0}")]
    Configuration(String),

    /// Transport failure or non-success status from the provider
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Provider rejected the call because of rate limiting
    #[error("rate limited by provider")]
    RateLimited {
        /// Seconds until the limit resets, when the provider says so
        retry_after: Option<u64>,
    },

    /// Provider answered with a body we could not decode
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// No answer within the configured deadline
    #[error("provider did not respond within {0:?}")]
    Timeout(Duration),
}

impl LlmError {
    /// Short machine-readable label for logs and metrics
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::Upstream(_) => "upstream",
            Self::RateLimited { .. } => "rate_limited",
            Self::MalformedResponse(_) => "malformed_response",
            Self::Timeout(_) => "timeout",
        }
    }
}
