//! Reply generation for Reply Guy
//!
//! Turns a pasted social-media post into a prompt, asks the completion
//! provider for a reply, and falls back to a canned reply when the
//! provider cannot deliver one.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod cost;
pub mod error;
pub mod fallback;
pub mod observer;
pub mod prompt;
pub mod request;
mod router;
pub mod service;

pub use cost::Pricing;
pub use error::ReplyError;
pub use fallback::{DEFAULT_FALLBACK, FallbackTable};
pub use observer::{TelemetryObserver, UsageObserver};
pub use prompt::build_prompt;
pub use request::{Length, RawReplyRequest, ReplyRequest, Strategy, validate};
pub use router::reply_router;
pub use service::{FallbackReason, ModelInfo, ReplyOutcome, ReplyService};
