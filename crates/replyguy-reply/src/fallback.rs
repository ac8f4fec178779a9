//! Canned replies used when the provider cannot deliver one

use std::collections::HashMap;

use replyguy_config::{FallbackConfig, FallbackTexts};

use crate::request::{Length, Strategy};

/// Reply used when the table has no entry for a request
pub const DEFAULT_FALLBACK: &str = "This is an interesting perspective that deserves thoughtful consideration.";

const BUILTIN: [(Strategy, Length, &str); 4] = [
    (Strategy::Smart, Length::Short, DEFAULT_FALLBACK),
    (
        Strategy::Smart,
        Length::Long,
        "This is an interesting perspective that deserves thoughtful consideration. \
         It raises real questions about the underlying assumptions, and it would be worth \
         looking at the long-term implications and trade-offs before drawing conclusions.",
    ),
    (
        Strategy::Engagement,
        Length::Short,
        "This is the kind of content that gets people talking! 🔥",
    ),
    (
        Strategy::Engagement,
        Length::Long,
        "This is the kind of content that gets people talking! 🔥 \
         Everyone has a take on this one, so drop yours below and let's see where the \
         conversation goes. Who else has been thinking about this?",
    ),
];

/// Fallback replies keyed by strategy and length
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    entries: HashMap<(Strategy, Length), String>,
}

impl FallbackTable {
    /// Table with only the built-in replies
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|(strategy, length, text)| (*strategy, *length, (*text).to_owned())),
        )
    }

    /// Table with exactly the given entries
    pub fn from_entries(entries: impl IntoIterator<Item = (Strategy, Length, String)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(strategy, length, text)| ((strategy, length), text))
                .collect(),
        }
    }

    /// Built-in replies with configured overrides applied
    ///
    /// Blank overrides are ignored.
    pub fn from_config(config: &FallbackConfig) -> Self {
        let mut table = Self::builtin();
        table.apply(Strategy::Smart, &config.smart);
        table.apply(Strategy::Engagement, &config.engagement);
        table
    }

    fn apply(&mut self, strategy: Strategy, texts: &FallbackTexts) {
        for (length, text) in [(Length::Short, &texts.short), (Length::Long, &texts.long)] {
            if let Some(text) = text.as_deref().map(str::trim).filter(|text| !text.is_empty()) {
                self.entries.insert((strategy, length), text.to_owned());
            }
        }
    }

    /// Reply for a strategy and length, if one is defined
    pub fn lookup(&self, strategy: Strategy, length: Length) -> Option<&str> {
        self.entries.get(&(strategy, length)).map(String::as_str)
    }

    /// Reply for a strategy and length, or [`DEFAULT_FALLBACK`]
    pub fn resolve(&self, strategy: Strategy, length: Length) -> &str {
        self.lookup(strategy, length).unwrap_or(DEFAULT_FALLBACK)
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::builtin()
    }
}
