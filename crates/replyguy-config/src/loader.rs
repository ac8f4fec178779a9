use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_provider()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_provider(&self) -> anyhow::Result<()> {
        let provider = &self.provider;

        if provider.model.trim().is_empty() {
            anyhow::bail!("provider.model must not be empty");
        }

        if !(0.0..=2.0).contains(&provider.temperature) {
            anyhow::bail!("provider.temperature must be between 0.0 and 2.0");
        }

        if provider.top_p <= 0.0 || provider.top_p > 1.0 {
            anyhow::bail!("provider.top_p must be in (0.0, 1.0]");
        }

        if provider.pricing.input_per_1k < 0.0 || provider.pricing.output_per_1k < 0.0 {
            anyhow::bail!("provider.pricing must not be negative");
        }

        if provider.timeout_duration()?.is_zero() {
            anyhow::bail!("provider.timeout must be greater than zero");
        }

        if provider.api_key.is_none() && provider.api_key_env.trim().is_empty() {
            anyhow::bail!("provider.api_key_env must not be empty when no api_key is set");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
