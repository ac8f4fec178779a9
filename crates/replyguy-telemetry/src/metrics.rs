//! Metric names and meter access

use opentelemetry::global;
use opentelemetry::metrics::Meter;

/// Instrumentation scope for all Reply Guy instruments
pub const METER_NAME: &str = "replyguy";

// Reply metric names
pub const REPLY_REQUEST_COUNT: &str = "reply.request.count";
pub const REPLY_COST_ESTIMATE: &str = "reply.cost.estimate";

// LLM metric names
pub const LLM_REQUEST_DURATION: &str = "llm.request.duration";
pub const LLM_TOKEN_USAGE: &str = "llm.token.usage";

/// Meter from the global provider
///
/// Falls back to a no-op meter when no exporter was configured.
pub fn meter() -> Meter {
    global::meter(METER_NAME)
}
