//! Currency Exchange Service
//!
//! Filters and derives over the feed port.
//! Contains NO transport logic - every method is one fetch plus a lookup.

use std::sync::Arc;

use currency_types::{
    ALLOWED_CURRENCIES, CountryDirectory, CountryRecord, CurrencyCode, CurrencyDirectory,
    CurrencyFeed, DiagnosticSink, ExchangeRate, ExchangeRateTable, FeedError,
    country_key_from_language,
};

use crate::TracingSink;

const CURRENCIES_FAILED: &str = "Failed to get currencies list";
const COUNTRIES_FAILED: &str = "Failed to get currencies by countries";
const RATES_FAILED: &str = "Failed to get exchange rates";
const RATE_FAILED: &str = "Failed to get exchange rate";

/// Application service for currency lookups.
///
/// Generic over `F: CurrencyFeed` - the feed adapter is injected at compile time.
/// Failures are reported to the [`DiagnosticSink`] and then returned unchanged.
pub struct CurrencyExchangeApi<F: CurrencyFeed> {
    feed: F,
    sink: Arc<dyn DiagnosticSink>,
    allowed: &'static [&'static str],
}

impl<F: CurrencyFeed> CurrencyExchangeApi<F> {
    /// Creates a service that logs failures through `tracing`.
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            sink: Arc::new(TracingSink),
            allowed: ALLOWED_CURRENCIES,
        }
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the currency allow-list.
    pub fn with_allowed_currencies(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    /// Returns a reference to the underlying feed.
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Codes [`get_currencies`](Self::get_currencies) is narrowed to.
    pub fn allowed_currencies(&self) -> &'static [&'static str] {
        self.allowed
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Directories
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the allowed currencies with their display names.
    pub async fn get_currencies(&self) -> Result<CurrencyDirectory, FeedError> {
        self.feed
            .currencies()
            .await
            .map(|directory| directory.filtered(self.allowed))
            .map_err(|e| self.report(CURRENCIES_FAILED, e))
    }

    /// Lists every country with the currency it uses.
    pub async fn get_countries_currencies(&self) -> Result<CountryDirectory, FeedError> {
        self.feed
            .countries()
            .await
            .map_err(|e| self.report(COUNTRIES_FAILED, e))
    }

    /// Resolves the currency used in the region of a language tag like `"ru-RU"`.
    ///
    /// Returns `Ok(None)` without fetching anything when the tag carries no
    /// region, and `Ok(None)` when the feed knows no such country.
    pub async fn get_currency_by_language(
        &self,
        language: &str,
    ) -> Result<Option<CountryRecord>, FeedError> {
        let Some(country_key) = country_key_from_language(language) else {
            tracing::debug!(language, "language tag has no region");
            return Ok(None);
        };

        let countries = self.get_countries_currencies().await?;
        Ok(countries.remove(&country_key))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Fetches every rate quoted against `currency_code`.
    pub async fn get_exchange_rates(
        &self,
        currency_code: &str,
    ) -> Result<ExchangeRateTable, FeedError> {
        let base = CurrencyCode::new(currency_code);
        self.feed
            .exchange_rates(&base)
            .await
            .map_err(|e| self.report(RATES_FAILED, e))
    }

    /// Fetches how many units of `to` one unit of `from` buys.
    ///
    /// `Ok(None)` when the table for `from` does not quote `to`. A table that
    /// lacks `from` itself is an error.
    pub async fn get_exchange_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<ExchangeRate>, FeedError> {
        let base = CurrencyCode::new(from);
        let target = CurrencyCode::new(to);

        let table = self
            .get_exchange_rates(from)
            .await
            .map_err(|e| self.report(RATE_FAILED, e))?;

        let rates = table
            .rates_for(&base)
            .ok_or_else(|| self.report(RATE_FAILED, FeedError::MissingBaseCurrency(base.clone())))?;

        Ok(rates.get(&target).cloned())
    }

    fn report(&self, operation: &str, error: FeedError) -> FeedError {
        self.sink.failure(operation, &error);
        error
    }
}
