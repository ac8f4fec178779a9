use serde::Deserialize;

/// Reply generation policy
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplyConfig {
    /// Canned replies overriding the built-in fallback table
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Fallback overrides keyed by strategy
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackConfig {
    #[serde(default)]
    pub smart: FallbackTexts,
    #[serde(default)]
    pub engagement: FallbackTexts,
}

/// Fallback overrides for one strategy, keyed by length
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FallbackTexts {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
}
