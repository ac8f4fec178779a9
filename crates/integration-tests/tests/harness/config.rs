//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use replyguy_config::{Config, CorsConfig, FallbackTexts, HealthConfig, ProviderConfig, ServerConfig};
use secrecy::SecretString;

/// Environment variable no test ever sets
pub const UNSET_KEY_ENV: &str = "REPLYGUY_TEST_KEY_THAT_IS_NEVER_SET";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// The provider has no credential until one is added.
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                provider: ProviderConfig {
                    api_key_env: UNSET_KEY_ENV.to_owned(),
                    timeout: "5s".to_owned(),
                    ..ProviderConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point the provider at a mock backend with a test credential
    pub fn with_provider(mut self, base_url: &str) -> Self {
        self.config.provider.api_key = Some(SecretString::from("test-key"));
        self.config.provider.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Point the provider at a mock backend without any credential
    pub fn with_unauthenticated_provider(mut self, base_url: &str) -> Self {
        self.config.provider.api_key = None;
        self.config.provider.base_url = Some(base_url.parse().expect("valid URL"));
        self
    }

    /// Set the model sent upstream
    pub fn with_model(mut self, model: &str) -> Self {
        model.clone_into(&mut self.config.provider.model);
        self
    }

    /// Set the completion deadline (e.g. "200ms")
    pub fn with_timeout(mut self, timeout: &str) -> Self {
        timeout.clone_into(&mut self.config.provider.timeout);
        self
    }

    /// Override the canned engagement replies
    pub fn with_engagement_fallback(mut self, texts: FallbackTexts) -> Self {
        self.config.reply.fallback.engagement = texts;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
