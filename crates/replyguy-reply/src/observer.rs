//! Usage and outcome reporting

use replyguy_llm::TokenUsage;
use replyguy_telemetry::metrics;
use replyguy_telemetry::{Counter, Histogram, KeyValue};

use crate::request::{Length, Strategy};
use crate::service::FallbackReason;

/// Receives one notification per completed reply
pub trait UsageObserver: Send + Sync {
    /// The provider produced a reply
    fn on_generated(&self, strategy: Strategy, length: Length, usage: Option<TokenUsage>, cost: Option<f64>);

    /// A canned reply was served instead
    fn on_fallback(&self, strategy: Strategy, length: Length, reason: &FallbackReason);
}

/// Observer reporting through `tracing` and OpenTelemetry instruments
pub struct TelemetryObserver {
    requests: Counter<u64>,
    tokens: Counter<u64>,
    cost: Histogram<f64>,
}

impl TelemetryObserver {
    /// Create instruments on the global meter
    pub fn new() -> Self {
        let meter = metrics::meter();

        Self {
            requests: meter
                .u64_counter(metrics::REPLY_REQUEST_COUNT)
                .with_description("Replies served, by outcome")
                .build(),
            tokens: meter
                .u64_counter(metrics::LLM_TOKEN_USAGE)
                .with_description("Tokens consumed by completion calls")
                .build(),
            cost: meter
                .f64_histogram(metrics::REPLY_COST_ESTIMATE)
                .with_unit("USD")
                .with_description("Estimated cost of a generated reply")
                .build(),
        }
    }
}

impl Default for TelemetryObserver {
    fn default() -> Self {
        Self::new()
    }
}

fn attributes(strategy: Strategy, length: Length, outcome: &'static str) -> [KeyValue; 3] {
    [
        KeyValue::new("strategy", strategy.as_ref().to_owned()),
        KeyValue::new("length", length.as_ref().to_owned()),
        KeyValue::new("outcome", outcome),
    ]
}

impl UsageObserver for TelemetryObserver {
    fn on_generated(&self, strategy: Strategy, length: Length, usage: Option<TokenUsage>, cost: Option<f64>) {
        self.requests.add(1, &attributes(strategy, length, "generated"));

        if let Some(usage) = usage {
            self.tokens
                .add(u64::from(usage.prompt_tokens), &[KeyValue::new("token.type", "input")]);
            self.tokens
                .add(u64::from(usage.completion_tokens), &[KeyValue::new("token.type", "output")]);
        }

        if let Some(cost) = cost {
            self.cost.record(cost, &[KeyValue::new("strategy", strategy.as_ref().to_owned())]);
        }

        tracing::info!(
            %strategy,
            %length,
            prompt_tokens = usage.map(|u| u.prompt_tokens),
            completion_tokens = usage.map(|u| u.completion_tokens),
            total_tokens = usage.map(|u| u.total()),
            estimated_cost_usd = cost,
            "reply generated"
        );
    }

    fn on_fallback(&self, strategy: Strategy, length: Length, reason: &FallbackReason) {
        self.requests.add(1, &attributes(strategy, length, "fallback"));

        tracing::info!(%strategy, %length, reason = reason.kind(), "fallback reply served");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_without_an_exporter() {
        let observer = TelemetryObserver::new();
        observer.on_generated(
            Strategy::Smart,
            Length::Short,
            Some(TokenUsage {
                prompt_tokens: 50,
                completion_tokens: 20,
            }),
            Some(0.0027),
        );
        observer.on_generated(Strategy::Engagement, Length::Long, None, None);
        observer.on_fallback(Strategy::Smart, Length::Long, &FallbackReason::EmptyCompletion);
    }
}
