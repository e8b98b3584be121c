//! Configuration loading from environment.

use std::env;

use currency_client::DEFAULT_BASE_URL;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub locale: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("CURRENCY_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // POSIX locales look like `ru_RU.UTF-8`; keep the language-region part.
        let locale = lookup("CURRENCY_LOCALE")
            .or_else(|| lookup("LANG"))
            .map(|raw| {
                raw.split('.')
                    .next()
                    .unwrap_or_default()
                    .replace('_', "-")
            })
            .filter(|tag| !tag.is_empty());

        Self { api_url, locale }
    }
}
