//! Currency feed port.
//!
//! This trait defines the interface for the remote currency data feed.
//! Implementations can be HTTP clients, mock feeds, etc.

use crate::{CountryDirectory, CurrencyCode, CurrencyDirectory, ExchangeRateTable, FeedError};

/// Port trait for the three documents the feed publishes.
///
/// Each call is a single fetch; implementations must not cache.
#[async_trait::async_trait]
pub trait CurrencyFeed: Send + Sync {
    /// Every known currency code with its display name (`currencies.json`).
    async fn currencies(&self) -> Result<CurrencyDirectory, FeedError>;

    /// Country key to currency binding for every country (`country.json`).
    async fn countries(&self) -> Result<CountryDirectory, FeedError>;

    /// Rate table for `base` (`currencies/{base}.json`).
    async fn exchange_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateTable, FeedError>;
}
