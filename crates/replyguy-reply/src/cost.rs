//! Token cost estimation

use replyguy_config::PricingConfig;

/// Per-thousand-token prices in USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub input_per_1k: f64,
    pub output_per_1k: f64,
}

impl Pricing {
    /// Estimated cost in USD of a completion
    pub fn estimate(&self, prompt_tokens: u32, completion_tokens: u32) -> f64 {
        f64::from(prompt_tokens) / 1000.0 * self.input_per_1k
            + f64::from(completion_tokens) / 1000.0 * self.output_per_1k
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::from(&PricingConfig::default())
    }
}

impl From<&PricingConfig> for Pricing {
    fn from(config: &PricingConfig) -> Self {
        Self {
            input_per_1k: config.input_per_1k,
            output_per_1k: config.output_per_1k,
        }
    }
}
