use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Environment variable consulted for the provider credential by default
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Completion provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Provider protocol type
    #[serde(rename = "type", default)]
    pub provider_type: ProviderType,
    /// Explicit API key; takes precedence over `api_key_env`
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Environment variable read on first use when no explicit key is set
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model identifier sent with every completion
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Nucleus sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    /// Deadline for a single completion call (e.g. "30s", "1m")
    #[serde(default = "default_timeout")]
    pub timeout: String,
    /// Token pricing used for cost estimation
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_type: ProviderType::default(),
            api_key: None,
            api_key_env: default_api_key_env(),
            base_url: None,
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout: default_timeout(),
            pricing: PricingConfig::default(),
        }
    }
}

/// Supported completion provider protocols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderType {
    /// OpenAI-compatible chat completions API
    #[default]
    Openai,
}

/// Per-thousand-token prices in USD
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Price per 1K prompt tokens
    #[serde(default = "default_input_price")]
    pub input_per_1k: f64,
    /// Price per 1K completion tokens
    #[serde(default = "default_output_price")]
    pub output_per_1k: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            input_per_1k: default_input_price(),
            output_per_1k: default_output_price(),
        }
    }
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f64 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_top_p() -> f64 {
    0.9
}

fn default_timeout() -> String {
    "30s".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_input_price() -> f64 {
    0.03
}

#[allow(clippy::missing_const_for_fn)]
fn default_output_price() -> f64 {
    0.06
}

impl ProviderConfig {
    /// Parse the configured completion deadline
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is not a valid duration string
    pub fn timeout_duration(&self) -> anyhow::Result<std::time::Duration> {
        duration_str::parse(&self.timeout)
            .map_err(|e| anyhow::anyhow!("invalid provider timeout '{}': {e}", self.timeout))
    }
}
