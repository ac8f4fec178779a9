use axum::response::{IntoResponse, Response};
use http::StatusCode;
use replyguy_core::{HttpError, error_response};
use thiserror::Error;

/// Errors surfaced to callers of the reply service
///
/// Provider failures are deliberately absent: they are absorbed into a
/// fallback reply and never reach this type.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// A required field was absent or empty
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A field held a value outside its allowed set
    #[error("invalid {field}: '{value}' (expected one of: {expected})")]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// Body could not be read as a reply request
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The completion provider can never be used in this process
    #[error("reply generation is unavailable: {0}")]
    Configuration(String),
}

impl HttpError for ReplyError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField { .. } | Self::InvalidEnum { .. } | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::MissingField { .. } | Self::InvalidEnum { .. } | Self::InvalidBody(_) => "invalid_request_error",
            Self::Configuration(_) => "configuration_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for ReplyError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}
