//! Shared building blocks for Reply Guy crates

mod error;

pub use error::{HttpError, error_response};
